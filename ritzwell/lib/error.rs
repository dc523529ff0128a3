//! Collection of all error types.
//!
//! All errors derive [`thiserror::Error`], making them composable when allowed
//! and compatible with application code using [`anyhow`][anyhow].
//!
//! [anyhow]: https://crates.io/crates/anyhow

use ndarray_linalg::error::LinalgError;
use thiserror::Error;

/// Returned when an operation requiring equal-length arrays encounters arrays
/// with unequal length.
#[derive(Debug, Error)]
#[error("encountered arrays with incompatible lengths; got {0} and {1}")]
pub struct LengthError(pub usize, pub usize);

impl LengthError {
    pub(crate) fn check_len(na: usize, nb: usize) -> Result<(), Self> {
        (na == nb).then_some(()).ok_or(Self(na, nb))
    }
}

/// Returned from any stage of the Rayleigh-Ritz pipeline.
#[derive(Debug, Error)]
pub enum SolveError {
    /// Returned when a non-positive or non-finite well width is encountered.
    #[error("well width must be finite and greater than 0; got {0}")]
    BadWidth(f64),

    /// Returned when a zero step count is encountered.
    #[error("step count must be greater than 0; got {0}")]
    BadSteps(usize),

    /// Returned when a sampling interval is empty, reversed, or non-finite.
    #[error("sampling interval must satisfy min < max with finite bounds; got [{0}, {1})")]
    BadInterval(f64, f64),

    /// Returned when a potential amplitude is non-finite.
    #[error("potential amplitude must be finite; got {0}")]
    BadAmplitude(f64),

    /// Returned when a sampled potential holds a non-finite value.
    #[error("potential must be finite; got {1} at index {0}")]
    NonFinitePotential(usize, f64),

    /// Returned when the potential and the basis are sampled with different
    /// numbers of points, or when a coefficient vector does not match the
    /// basis size.
    #[error("dimension mismatch: {0}")]
    DimensionMismatch(#[from] LengthError),

    /// Returned when the potential and the basis are sampled over different
    /// intervals.
    #[error("domain mismatch: basis covers [{0}, {1}) but potential covers [{2}, {3})")]
    DomainMismatch(f64, f64, f64, f64),

    /// Returned when a matrix passed to the eigensolver is not square.
    #[error("eigensolver input must be square; got {0}x{1}")]
    NotSquare(usize, usize),

    /// Returned when the dense eigen-decomposition reports a nonzero status.
    #[error("eigen-decomposition failed: {0}")]
    Factorization(#[from] LinalgError),

    /// Returned when a solve is cancelled before it completes.
    #[error("solve was cancelled")]
    Cancelled,

    /// Returned when the background thread running a solve panics.
    #[error("solve worker thread panicked")]
    WorkerPanicked,
}

impl SolveError {
    pub(crate) fn check_width(width: f64) -> Result<(), Self> {
        (width.is_finite() && width > 0.0)
            .then_some(()).ok_or(Self::BadWidth(width))
    }

    pub(crate) fn check_steps(steps: usize) -> Result<(), Self> {
        (steps != 0).then_some(()).ok_or(Self::BadSteps(steps))
    }

    pub(crate) fn check_interval(x_min: f64, x_max: f64) -> Result<(), Self> {
        (x_min.is_finite() && x_max.is_finite() && x_min < x_max)
            .then_some(()).ok_or(Self::BadInterval(x_min, x_max))
    }

    pub(crate) fn check_amplitude(amplitude: f64) -> Result<(), Self> {
        amplitude.is_finite()
            .then_some(()).ok_or(Self::BadAmplitude(amplitude))
    }

    /// Return `true` if `self` belongs to the invalid-parameter family, i.e.
    /// the error was raised before any matrix work began.
    pub fn is_invalid_parameter(&self) -> bool {
        matches!(
            self,
            Self::BadWidth(..)
                | Self::BadSteps(..)
                | Self::BadInterval(..)
                | Self::BadAmplitude(..)
                | Self::NonFinitePotential(..)
        )
    }

    /// Return `true` if `self` is `DimensionMismatch` or `DomainMismatch`.
    pub fn is_dimension_mismatch(&self) -> bool {
        matches!(self, Self::DimensionMismatch(..) | Self::DomainMismatch(..))
    }

    /// Return `true` if `self` is `Factorization`.
    pub fn is_factorization(&self) -> bool {
        matches!(self, Self::Factorization(..))
    }

    /// Return `true` if `self` is `Cancelled`.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parameter_checks() {
        assert!(SolveError::check_width(1.0).is_ok());
        assert!(SolveError::check_width(0.0).unwrap_err().is_invalid_parameter());
        assert!(SolveError::check_width(-2.0).is_err());
        assert!(SolveError::check_width(f64::NAN).is_err());
        assert!(SolveError::check_steps(0).unwrap_err().is_invalid_parameter());
        assert!(SolveError::check_interval(1.0, 1.0).is_err());
        assert!(SolveError::check_interval(0.0, f64::INFINITY).is_err());
        assert!(SolveError::check_amplitude(-3.0).is_ok());
        assert!(SolveError::check_amplitude(f64::NAN).unwrap_err().is_invalid_parameter());
        assert!(SolveError::check_amplitude(f64::INFINITY).is_err());
    }

    #[test]
    fn length_error_converts() {
        let err: SolveError = LengthError::check_len(100, 50).unwrap_err().into();
        assert!(err.is_dimension_mismatch());
        assert!(!err.is_invalid_parameter());
    }

    #[test]
    fn linalg_error_is_factorization() {
        let err: SolveError = LinalgError::MemoryNotCont.into();
        assert!(err.is_factorization());
    }
}
