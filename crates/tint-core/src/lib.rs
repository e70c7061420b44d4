//! # tint-core
//!
//! Core types for the tint filter.
//!
//! This crate provides the foundational types used by `tint-ops` and the CLI:
//!
//! - [`Rgb8`], [`Rgba8`] - 8-bit color and pixel types
//! - [`Hsv`] - Hue/saturation/value color with validated ranges
//! - [`PixelBuffer`] - Owned row-major RGBA8 image buffer
//! - [`Rect`] - Region of interest, right/bottom exclusive
//!
//! ## Crate Structure
//!
//! ```text
//! tint-core (this crate)
//!    ^
//!    |
//!    +-- tint-ops (effective color, tint filter, tiling, cancellation)
//!    +-- tint-cli (command line driver)
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` - Enable serialization for color and region types

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod buffer;
pub mod color;
pub mod error;
pub mod rect;

// Re-exports for convenience
pub use buffer::PixelBuffer;
pub use color::{Hsv, Rgb8, Rgba8, HUE_MAX, SATURATION_MAX, VALUE_MAX};
pub use error::{Error, Result};
pub use rect::Rect;

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```
/// use tint_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::buffer::PixelBuffer;
    pub use crate::color::{Hsv, Rgb8, Rgba8};
    pub use crate::error::{Error, Result};
    pub use crate::rect::Rect;
}
