//! # tint-ops
//!
//! Multiplicative tint filter for RGBA8 images.
//!
//! A render pass first resolves one effective color from the parameters,
//! then multiplies every pixel of the requested region by it, channel by
//! channel. Alpha is never changed.
//!
//! # Modules
//!
//! - [`params`] - Tint parameters and color sources
//! - [`resolve`] - Effective color (blend from white toward the source)
//! - [`tint`](mod@tint) - Per-pixel filter, region and batch drivers
//! - [`cancel`] - Cooperative cancellation tokens
//! - `parallel` - Banded rendering with Rayon (feature `parallel`)
//!
//! # Example
//!
//! ```rust
//! use tint_core::{PixelBuffer, Rect, Rgb8, Rgba8};
//! use tint_ops::{tint, ColorSource, TintParams, Unstoppable};
//!
//! let src = PixelBuffer::filled(8, 8, Rgba8::new(100, 100, 100, 255));
//! let params = TintParams::new(ColorSource::Rgb(Rgb8::new(200, 100, 50)), 0.5);
//!
//! let out = tint(&src, &params, Rect::from_size(8, 8), &Unstoppable).unwrap();
//! assert_eq!(out.color, Rgb8::new(227, 177, 152));
//! assert_eq!(out.image.pixel(3, 3), Rgba8::new(89, 69, 59, 255));
//! ```
//!
//! # Host-driven tiles
//!
//! ```rust,ignore
//! use tint_ops::{apply_tint, resolve_effective_color};
//!
//! // Resolve once per pass, then hand each tile to a worker.
//! let color = resolve_effective_color(&params)?;
//! for tile in tiles {
//!     apply_tint(&src, &mut dst, tile, color, &cancel)?;
//! }
//! ```
//!
//! ## Feature Flags
//!
//! - `parallel` (default) - Rayon-backed [`render_tiled`]
//! - `serde` - Serialization for [`TintParams`] and its parts

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
pub mod cancel;
pub mod params;
pub mod resolve;
pub mod tint;

#[cfg(feature = "parallel")]
pub mod parallel;

pub use cancel::{CancelFlag, Stop, StopReason, Unstoppable};
pub use error::{OpsError, OpsResult};
pub use params::{BlendRounding, ColorSource, TintParams};
pub use resolve::{lerp_from_white, resolve_effective_color, resolve_effective_color_flat};
pub use tint::{
    apply_tint, apply_tint_in_place, apply_tint_regions, tile_rows, tint, tint_pixel,
    RenderOutcome, TintOutput,
};

#[cfg(feature = "parallel")]
pub use parallel::{apply_tint_tiled, render_tiled, DEFAULT_BAND_ROWS};
