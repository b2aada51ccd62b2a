//! Error taxonomy for filter design and response evaluation.
//!
//! Numeric evaluation is deterministic and non-transient, so no error
//! here is retryable: an invalid parameter stays invalid, a degenerate
//! response stays degenerate.

use thiserror::Error;

/// Errors raised while synthesizing component values.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DesignError {
    /// A design parameter was zero, negative, or non-finite.
    #[error("invalid filter parameter {name} = {value} (must be positive and finite)")]
    InvalidParameter {
        /// Name of the offending parameter (fc, Q, C, or m).
        name: &'static str,
        /// The rejected value.
        value: f64,
    },
}

/// Errors raised while evaluating the frequency response.
///
/// Reported per sample; one degenerate point does not invalidate the
/// rest of a sweep.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ResponseError {
    /// The transfer-function denominator vanished or |H| was zero or
    /// non-finite at the requested frequency.
    #[error("degenerate response at {frequency} Hz: gain magnitude is zero or non-finite")]
    DegenerateResponse {
        /// Frequency at which the response degenerated, in Hz.
        frequency: f64,
    },
}
