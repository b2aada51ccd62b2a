//! Frequency sweeps and lazy response sequences.
//!
//! A [`LogSweep`] yields logarithmically spaced frequencies; a
//! [`ResponseSweep`] pairs each frequency with the complex gain at that
//! point. Both are lazy and restartable: nothing is precomputed, and
//! every call to [`ResponseSweep::iter`] starts over from the first
//! frequency. There is no shared mutable state, so two passes over the
//! same sweep always produce identical sequences.

use num_complex::Complex64;

use crate::error::ResponseError;
use crate::response::TransferFunction;

/// Default sweep start frequency in Hz.
pub const DEFAULT_START_HZ: f64 = 1e-2;
/// Default sweep stop frequency in Hz.
pub const DEFAULT_STOP_HZ: f64 = 1e3;
/// Default number of sweep points.
pub const DEFAULT_POINTS: usize = 1000;

/// Finite iterator over logarithmically spaced frequencies.
///
/// Point k of n is `start * (stop/start)^(k/(n-1))`; the first and last
/// points land exactly on `start` and `stop`.
#[derive(Clone, Copy, Debug)]
pub struct LogSweep {
    start: f64,
    ratio: f64,
    points: usize,
    next: usize,
}

impl LogSweep {
    /// Create a sweep of `points` log-spaced frequencies from `start`
    /// to `stop` Hz. A single-point sweep yields only `start`.
    #[must_use]
    pub fn new(start: f64, stop: f64, points: usize) -> Self {
        Self {
            start,
            ratio: stop / start,
            points,
            next: 0,
        }
    }

    /// Number of frequencies in the sweep.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points
    }

    /// Whether the sweep contains no frequencies at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points == 0
    }
}

impl Default for LogSweep {
    /// The standard plotting sweep: 1000 points from 10 mHz to 1 kHz.
    fn default() -> Self {
        Self::new(DEFAULT_START_HZ, DEFAULT_STOP_HZ, DEFAULT_POINTS)
    }
}

impl Iterator for LogSweep {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        if self.next >= self.points {
            return None;
        }
        let k = self.next;
        self.next += 1;
        if self.points == 1 {
            return Some(self.start);
        }
        let t = k as f64 / (self.points - 1) as f64;
        Some(self.start * self.ratio.powf(t))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.points - self.next;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for LogSweep {}

/// One sample of the frequency response.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResponsePoint {
    /// Frequency in Hz.
    pub frequency: f64,
    /// Complex gain H at this frequency.
    pub gain: Complex64,
}

impl ResponsePoint {
    /// Gain magnitude in dB.
    ///
    /// # Errors
    ///
    /// [`ResponseError::DegenerateResponse`] if |H| is zero or
    /// non-finite. A degenerate point does not affect its neighbors.
    pub fn magnitude_db(&self) -> Result<f64, ResponseError> {
        let norm = self.gain.norm();
        if norm == 0.0 || !norm.is_finite() {
            return Err(ResponseError::DegenerateResponse {
                frequency: self.frequency,
            });
        }
        Ok(20.0 * norm.log10())
    }

    /// Phase in degrees, principal value in (-180, 180].
    ///
    /// # Errors
    ///
    /// [`ResponseError::DegenerateResponse`] if H is non-finite.
    pub fn phase_degrees(&self) -> Result<f64, ResponseError> {
        if !self.gain.re.is_finite() || !self.gain.im.is_finite() {
            return Err(ResponseError::DegenerateResponse {
                frequency: self.frequency,
            });
        }
        Ok(self.gain.arg().to_degrees())
    }
}

/// Lazy frequency response of a filter over a sweep.
///
/// Holds only the evaluator and the sweep description; gains are
/// computed on demand, one per iteration step.
#[derive(Clone, Copy, Debug)]
pub struct ResponseSweep {
    tf: TransferFunction,
    sweep: LogSweep,
}

impl ResponseSweep {
    /// Pair a transfer function with a frequency sweep.
    #[must_use]
    pub fn new(tf: TransferFunction, sweep: LogSweep) -> Self {
        Self { tf, sweep }
    }

    /// Iterate over (frequency, gain) samples from the first frequency.
    ///
    /// Each call restarts the sweep; iterating twice yields identical
    /// sequences.
    pub fn iter(&self) -> impl Iterator<Item = ResponsePoint> + '_ {
        self.sweep.map(|frequency| ResponsePoint {
            frequency,
            gain: self.tf.gain(frequency),
        })
    }
}
