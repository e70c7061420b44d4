//! Error types for tint-core operations.
//!
//! Every variant is a validation failure: it is raised at an API boundary
//! before any pixel is read or written.
//!
//! # Usage
//!
//! ```rust
//! use tint_core::{Error, Result};
//!
//! fn check_hue(hue: u16) -> Result<()> {
//!     if hue > 360 {
//!         return Err(Error::invalid_parameter("hue", hue, "0..=360"));
//!     }
//!     Ok(())
//! }
//!
//! assert!(check_hue(361).is_err());
//! ```
//!
//! # Dependencies
//!
//! - [`thiserror`] - For derive macro error implementation
//!
//! # Used By
//!
//! - [`crate::color::Hsv`] - Range checks on construction
//! - [`crate::buffer::PixelBuffer`] - Buffer construction
//! - [`crate::rect::Rect`] - Edge validation
//! - `tint-ops` - Wrapped in `OpsError::Core`

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building tint inputs.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// A scalar parameter is outside its documented range.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tint_core::Error;
    ///
    /// let err = Error::invalid_parameter("saturation", 120, "0..=100");
    /// assert!(err.to_string().contains("saturation"));
    /// assert!(err.to_string().contains("120"));
    /// ```
    #[error("invalid parameter {name} = {value}: expected {expected}")]
    InvalidParameter {
        /// Parameter name
        name: &'static str,
        /// Offending value, formatted
        value: String,
        /// Accepted range or form
        expected: &'static str,
    },

    /// Region is empty, inverted, or extends beyond image bounds.
    #[error("region ({rx}, {ry}, {rw}x{rh}) invalid for image {width}x{height}")]
    InvalidRegion {
        /// Region X origin
        rx: u32,
        /// Region Y origin
        ry: u32,
        /// Region width
        rw: u32,
        /// Region height
        rh: u32,
        /// Image width
        width: u32,
        /// Image height
        height: u32,
    },

    /// Buffer dimensions do not agree with the supplied data.
    #[error("invalid dimensions: {width}x{height} ({reason})")]
    InvalidDimensions {
        /// Requested width
        width: u32,
        /// Requested height
        height: u32,
        /// Reason why dimensions are invalid
        reason: String,
    },
}

impl Error {
    /// Creates an [`Error::InvalidParameter`] error.
    #[inline]
    pub fn invalid_parameter(
        name: &'static str,
        value: impl std::fmt::Display,
        expected: &'static str,
    ) -> Self {
        Self::InvalidParameter {
            name,
            value: value.to_string(),
            expected,
        }
    }

    /// Creates an [`Error::InvalidRegion`] error.
    #[inline]
    pub fn invalid_region(rx: u32, ry: u32, rw: u32, rh: u32, width: u32, height: u32) -> Self {
        Self::InvalidRegion {
            rx,
            ry,
            rw,
            rh,
            width,
            height,
        }
    }

    /// Creates an [`Error::InvalidDimensions`] error.
    #[inline]
    pub fn invalid_dimensions(width: u32, height: u32, reason: impl Into<String>) -> Self {
        Self::InvalidDimensions {
            width,
            height,
            reason: reason.into(),
        }
    }

    /// Returns `true` if this is a region-related error.
    #[inline]
    pub fn is_region_error(&self) -> bool {
        matches!(self, Self::InvalidRegion { .. })
    }

    /// Returns `true` if this is a parameter range error.
    #[inline]
    pub fn is_parameter_error(&self) -> bool {
        matches!(self, Self::InvalidParameter { .. })
    }
}
