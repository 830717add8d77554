//! Error types for parameter validation and boundary tag conversion.

use thiserror::Error;

/// Errors raised when finalizing [`ShallowWaterParameters`](crate::ShallowWaterParameters).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParameterError {
    /// A parameter is NaN or infinite.
    #[error("Parameter `{name}` must be finite, got {value}")]
    NonFinite { name: &'static str, value: f64 },

    #[error("Gravity must be positive, got {0}")]
    NonPositiveGravity(f64),

    #[error("Reference water depth must be positive, got {0}")]
    NonPositiveReferenceDepth(f64),

    /// The dry-state tolerance is a relative depth and must lie in (0, 1).
    #[error("Dry state tolerance must lie in (0, 1), got {0}")]
    InvalidDryStateTolerance(f64),

    #[error("Manning's friction coefficient must be non-negative, got {0}")]
    NegativeFriction(f64),
}

/// Errors raised when interpreting raw boundary ids.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundaryError {
    /// The id does not name a boundary regime handled by the resolver.
    #[error("Unknown boundary id {0}")]
    UnknownBoundaryId(u32),
}

impl ParameterError {
    /// Create a non-finite error for parameter `name`.
    pub fn non_finite(name: &'static str, value: f64) -> Self {
        Self::NonFinite { name, value }
    }
}
