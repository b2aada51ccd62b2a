//! Complex transfer-function evaluation for the synthesized filter.
//!
//! The unity-gain Sallen-Key low-pass has the transfer function
//!
//! ```text
//! H(s) = 1 / (s^2 * R1*C1*R2*C2 + s * (R1*C1 + R2*C1) + 1)
//! ```
//!
//! evaluated on the imaginary axis, s = j*2*pi*f. Magnitude is reported
//! in dB and phase in degrees as the principal value, matching direct
//! per-point evaluation (no unwrapping across a sweep).

use num_complex::Complex64;
use std::f64::consts::TAU;

use crate::error::ResponseError;
use crate::types::ComponentValues;

/// Frequency-domain evaluator for a set of component values.
///
/// Caches the two denominator polynomial coefficients so a sweep does
/// not recompute the R*C products per sample. Stateless otherwise:
/// every call is independent and referentially transparent.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TransferFunction {
    /// Quadratic coefficient R1*C1*R2*C2 (seconds squared).
    b2: f64,
    /// Linear coefficient R1*C1 + R2*C1 (seconds).
    b1: f64,
}

impl TransferFunction {
    /// Build the evaluator for the given component values.
    #[must_use]
    pub fn new(components: &ComponentValues) -> Self {
        Self {
            b2: components.r1 * components.c1 * components.r2 * components.c2,
            b1: components.r1 * components.c1 + components.r2 * components.c1,
        }
    }

    /// Complex gain H(f) at frequency `f` in Hz.
    ///
    /// `f = 0` is valid and yields exactly H = 1 (unity DC gain).
    /// Negative frequencies are mathematically valid inputs but outside
    /// the intended domain; the caller is responsible for them.
    #[must_use]
    pub fn gain(&self, f: f64) -> Complex64 {
        let s = Complex64::new(0.0, TAU * f);
        Complex64::new(1.0, 0.0) / (s * s * self.b2 + s * self.b1 + 1.0)
    }

    /// Gain magnitude in dB at frequency `f`: 20*log10(|H(f)|).
    ///
    /// # Errors
    ///
    /// [`ResponseError::DegenerateResponse`] if |H(f)| is zero or
    /// non-finite (denominator vanished). Only reachable with
    /// pathological hand-built component values, never from
    /// [`synthesize`](crate::design::synthesize) output.
    pub fn magnitude_db(&self, f: f64) -> Result<f64, ResponseError> {
        let norm = self.gain(f).norm();
        if norm == 0.0 || !norm.is_finite() {
            return Err(ResponseError::DegenerateResponse { frequency: f });
        }
        Ok(20.0 * norm.log10())
    }

    /// Phase in degrees at frequency `f`, principal value in
    /// (-180, 180].
    ///
    /// # Errors
    ///
    /// [`ResponseError::DegenerateResponse`] if H(f) is non-finite.
    pub fn phase_degrees(&self, f: f64) -> Result<f64, ResponseError> {
        let h = self.gain(f);
        if !h.re.is_finite() || !h.im.is_finite() {
            return Err(ResponseError::DegenerateResponse { frequency: f });
        }
        Ok(h.arg().to_degrees())
    }
}
