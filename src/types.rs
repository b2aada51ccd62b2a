//! Core value types for filter design.
//!
//! [`FilterSpec`] describes what the caller wants (cutoff, Q, seed
//! capacitance, resistor ratio); [`ComponentValues`] is what the
//! synthesizer produces (concrete R and C values). Both are plain
//! immutable data with no behavior beyond validation and formatting.

use std::fmt;

use crate::error::DesignError;

/// Target parameters for a unity-gain Sallen-Key low-pass filter.
///
/// All fields must be strictly positive and finite; see
/// [`validate`](FilterSpec::validate).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FilterSpec {
    /// Cutoff frequency in Hz.
    pub fc: f64,
    /// Quality factor. 1/sqrt(2) gives a maximally flat (Butterworth)
    /// response.
    pub q: f64,
    /// Seed capacitance C1 in Farads. Picked from a standard series by
    /// the designer; the remaining components are derived from it.
    pub c: f64,
    /// Resistor ratio R1/R2 (dimensionless).
    pub m: f64,
}

impl FilterSpec {
    /// Create a spec with the default resistor ratio m = 1
    /// (equal-resistor configuration).
    #[must_use]
    pub fn new(fc: f64, q: f64, c: f64) -> Self {
        Self { fc, q, c, m: 1.0 }
    }

    /// Set the resistor ratio R1/R2.
    #[must_use]
    pub fn with_ratio(mut self, m: f64) -> Self {
        self.m = m;
        self
    }

    /// Check that every parameter is strictly positive and finite.
    ///
    /// # Errors
    ///
    /// Returns [`DesignError::InvalidParameter`] naming the first
    /// offending field.
    pub fn validate(&self) -> Result<(), DesignError> {
        for (name, value) in [("fc", self.fc), ("Q", self.q), ("C", self.c), ("m", self.m)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(DesignError::InvalidParameter { name, value });
            }
        }
        Ok(())
    }
}

/// Concrete component values for the synthesized filter.
///
/// Invariants (guaranteed by [`synthesize`](crate::design::synthesize)):
/// `c2 = n * c1` with `n = (q * (m + 1))^2 / m`, and `r1 = m * r2`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ComponentValues {
    /// First capacitor in Farads (the seed capacitance).
    pub c1: f64,
    /// Second capacitor in Farads.
    pub c2: f64,
    /// First resistor in Ohms.
    pub r1: f64,
    /// Second resistor in Ohms.
    pub r2: f64,
}

/// Convert Farads to nanofarads for display.
#[must_use]
pub fn nanofarads(farads: f64) -> f64 {
    farads * 1e9
}

impl fmt::Display for ComponentValues {
    /// Formats the component list the way a parts sheet reads:
    /// capacitors in nanofarads, resistors in Ohms, two decimals.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "C1 = {:.2} nF", nanofarads(self.c1))?;
        writeln!(f, "C2 = {:.2} nF", nanofarads(self.c2))?;
        writeln!(f, "R1 = {:.2} Ohm", self.r1)?;
        write!(f, "R2 = {:.2} Ohm", self.r2)
    }
}
