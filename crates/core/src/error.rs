//! Errors raised by the line model
//!
//! Almost everything in this crate is plain floating-point arithmetic and lets
//! NaN/infinity flow through. The exception is the log comparison against an
//! empirical relation, which has no meaning for non-positive surface brightness.

use std::fmt;

/// Which side of a comparison produced a bad value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrightnessOrigin {
    /// Modeled [CII] surface brightness
    Model,
    /// Empirical relation
    Empirical,
}

impl fmt::Display for BrightnessOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BrightnessOrigin::Model => f.write_str("modeled"),
            BrightnessOrigin::Empirical => f.write_str("empirical"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ModelError {
    /// Logarithm of a surface brightness that is zero, negative or NaN
    NonPositiveSurfaceBrightness {
        origin: BrightnessOrigin,
        value: f64,
    },
}

impl ModelError {
    pub(crate) fn non_positive(origin: BrightnessOrigin, value: f64) -> Self {
        ModelError::NonPositiveSurfaceBrightness { origin, value }
    }
}

impl fmt::Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelError::NonPositiveSurfaceBrightness { origin, value } => write!(
                f,
                "{origin} [CII] surface brightness must be positive to take its logarithm, got {value}"
            ),
        }
    }
}

impl std::error::Error for ModelError {}

/// Result alias for fallible model operations
pub type ModelResult<T> = Result<T, ModelError>;
