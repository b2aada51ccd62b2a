//! Component synthesis for the unity-gain Sallen-Key low-pass filter.
//!
//! Given a target cutoff frequency fc, quality factor Q, a seed
//! capacitance C and a resistor ratio m = R1/R2, the closed-form
//! relations fix the remaining components:
//!
//! ```text
//! n  = (Q * (m + 1))^2 / m        capacitor ratio C2/C1
//! R  = 1 / (2*pi*C*fc*sqrt(m*n))
//! C1 = C,  C2 = n*C,  R1 = m*R,  R2 = R
//! ```
//!
//! The synthesis is exact algebra, not a fit: the resulting network has
//! precisely the requested fc and Q (for ideal components).

use std::f64::consts::PI;

use crate::error::DesignError;
use crate::types::{ComponentValues, FilterSpec};

/// Derive concrete component values from a filter specification.
///
/// Pure and deterministic: identical inputs always yield bit-identical
/// outputs.
///
/// # Errors
///
/// Returns [`DesignError::InvalidParameter`] if any of fc, Q, C, m is
/// zero, negative, or non-finite. No partial result is produced.
///
/// # Examples
///
/// ```
/// use sallen_key::{synthesize, FilterSpec};
///
/// let spec = FilterSpec::new(10.0, std::f64::consts::FRAC_1_SQRT_2, 330e-9);
/// let c = synthesize(&spec)?;
/// assert!((c.r1 - 34102.89).abs() < 0.1);
/// # Ok::<(), sallen_key::DesignError>(())
/// ```
pub fn synthesize(spec: &FilterSpec) -> Result<ComponentValues, DesignError> {
    spec.validate()?;

    let n = (spec.q * (spec.m + 1.0)).powi(2) / spec.m;
    let r = 1.0 / (2.0 * PI * spec.c * spec.fc * (spec.m * n).sqrt());

    Ok(ComponentValues {
        c1: spec.c,
        c2: n * spec.c,
        r1: spec.m * r,
        r2: r,
    })
}
