//! Error types for tint operations.

use thiserror::Error;

/// Error type for tint operations.
///
/// Every variant is raised before any destination pixel is written.
/// Cancellation is not an error; see [`crate::RenderOutcome`].
#[derive(Error, Debug, Clone, PartialEq)]
pub enum OpsError {
    /// Invalid parameter value.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Region is empty or outside the image.
    #[error("invalid region: {0}")]
    InvalidRegion(String),

    /// Source and destination have incompatible sizes.
    #[error("size mismatch: {0}")]
    SizeMismatch(String),

    /// Other validation error from a core type.
    #[error(transparent)]
    Core(tint_core::Error),
}

/// Core range and region errors keep their kind, so callers can match
/// [`OpsError::InvalidParameter`] whichever entry point they used.
impl From<tint_core::Error> for OpsError {
    fn from(e: tint_core::Error) -> Self {
        match e {
            tint_core::Error::InvalidParameter {
                name,
                value,
                expected,
            } => Self::InvalidParameter(format!("{name} = {value}, expected {expected}")),
            tint_core::Error::InvalidRegion { .. } => Self::InvalidRegion(e.to_string()),
            other => Self::Core(other),
        }
    }
}

/// Result type for tint operations.
pub type OpsResult<T> = Result<T, OpsError>;
