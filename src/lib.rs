//! Sallen-Key Low-Pass Filter Design Library
//!
//! Computes the passive component values (R1, R2, C1, C2) of a
//! second-order unity-gain Sallen-Key active low-pass filter from a
//! target cutoff frequency and quality factor, then evaluates the
//! filter's complex frequency response for plotting or verification.
//!
//! Both stages are pure functions over immutable value types: the
//! synthesizer maps a [`FilterSpec`] to [`ComponentValues`], and the
//! evaluator maps [`ComponentValues`] plus a frequency to a complex
//! gain. There is no shared state and no I/O in the library.
//!
//! # Modules
//!
//! - [`types`] - Value types: FilterSpec, ComponentValues
//! - [`design`] - Component synthesis from cutoff frequency and Q
//! - [`response`] - Complex transfer-function evaluation
//! - [`sweep`] - Logarithmic frequency sweeps and lazy response sequences
//! - [`error`] - Error taxonomy
//!
//! # Example
//!
//! ```
//! use sallen_key::{synthesize, FilterSpec, TransferFunction};
//!
//! let spec = FilterSpec::new(10.0, std::f64::consts::FRAC_1_SQRT_2, 330e-9);
//! let components = synthesize(&spec)?;
//! let tf = TransferFunction::new(&components);
//!
//! // Butterworth cutoff sits at the half-power point.
//! let db = tf.magnitude_db(10.0)?;
//! assert!((db + 3.01).abs() < 0.01);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod design;
pub mod error;
pub mod response;
pub mod sweep;
pub mod types;

// Re-export commonly used items
pub use design::synthesize;
pub use error::{DesignError, ResponseError};
pub use response::TransferFunction;
pub use sweep::{LogSweep, ResponsePoint, ResponseSweep};
pub use types::{ComponentValues, FilterSpec};
