//! Domain error types.
//!
//! These errors represent validation failures in reference data. They are
//! distinct from I/O and routing errors.

use super::InvalidId;

/// Domain-level validation errors.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DomainError {
    /// A station or line identifier failed validation
    #[error(transparent)]
    InvalidId(#[from] InvalidId),

    /// Latitude or longitude out of range or not finite
    #[error("invalid coordinates: ({latitude}, {longitude})")]
    InvalidCoordinates { latitude: f64, longitude: f64 },
}
