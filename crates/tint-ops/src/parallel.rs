//! Parallel tiled rendering using Rayon.
//!
//! The region is cut into bands of whole rows ([`crate::tile_rows`]) and
//! each band is tinted on a worker. Bands write disjoint destination rows
//! and share the read-only source, so no locking is involved. All workers
//! poll the same stop token once per row; a cancelled render may leave
//! some bands complete and others partial.
//!
//! # Example
//!
//! ```rust
//! use tint_core::{PixelBuffer, Rgb8, Rgba8};
//! use tint_ops::{parallel, ColorSource, TintParams, Unstoppable};
//!
//! let src = PixelBuffer::filled(256, 256, Rgba8::new(100, 100, 100, 255));
//! let mut dst = src.clone();
//! let params = TintParams::new(ColorSource::Rgb(Rgb8::new(200, 100, 50)), 0.5);
//! let outcome = parallel::render_tiled(&src, &mut dst, &params, src.bounds(), 32, &Unstoppable)
//!     .unwrap();
//! assert!(outcome.is_completed());
//! assert_eq!(dst.pixel(255, 255), Rgba8::new(89, 69, 59, 255));
//! ```

use rayon::prelude::*;
use tint_core::{PixelBuffer, Rect, Rgb8};
use tracing::{debug, trace};

use crate::tint::{check_region, check_sizes, tint_rows};
use crate::{resolve_effective_color, OpsError, OpsResult, RenderOutcome, Stop, TintParams};

/// Default band height for [`render_tiled`] callers without a preference.
pub const DEFAULT_BAND_ROWS: u32 = 64;

/// Resolve the effective color once and tint `region` in parallel bands.
///
/// # Errors
///
/// Parameter, size and region errors as in [`crate::tint()`], plus
/// [`OpsError::InvalidParameter`] for `band_rows == 0`. Raised before any
/// worker starts.
pub fn render_tiled(
    src: &PixelBuffer,
    dst: &mut PixelBuffer,
    params: &TintParams,
    region: Rect,
    band_rows: u32,
    stop: &(dyn Stop + Sync),
) -> OpsResult<RenderOutcome> {
    let color = resolve_effective_color(params)?;
    apply_tint_tiled(src, dst, region, color, band_rows, stop)
}

/// Tint `region` in parallel bands with a precomputed effective color.
///
/// Produces the same pixels as a serial [`crate::apply_tint`] over the
/// whole region when it completes.
///
/// # Errors
///
/// See [`render_tiled`].
pub fn apply_tint_tiled(
    src: &PixelBuffer,
    dst: &mut PixelBuffer,
    region: Rect,
    color: Rgb8,
    band_rows: u32,
    stop: &(dyn Stop + Sync),
) -> OpsResult<RenderOutcome> {
    if band_rows == 0 {
        return Err(OpsError::InvalidParameter("band_rows must be > 0".into()));
    }
    check_sizes(src, dst)?;
    check_region(region, src)?;

    let width = src.width() as usize;
    let band_len = width * band_rows as usize;
    let rows = &mut dst.data_mut()[region.y as usize * width..region.bottom() as usize * width];
    debug!(%region, %color, band_rows, bands = rows.len().div_ceil(band_len), "tiled tint");

    let results: Vec<(u32, RenderOutcome)> = rows
        .par_chunks_mut(band_len)
        .enumerate()
        .map(|(i, band_rows_slice)| {
            let first_row = region.y + i as u32 * band_rows;
            let height = (band_rows_slice.len() / width) as u32;
            let band = Rect::new(region.x, first_row, region.width, height);
            trace!(band = i, %band, "tint band");
            let outcome = tint_rows(src, band_rows_slice, first_row, band, color, stop);
            (height, outcome)
        })
        .collect();

    let mut rows_done = 0u32;
    let mut cancelled = false;
    for (height, outcome) in results {
        match outcome {
            RenderOutcome::Completed => rows_done += height,
            RenderOutcome::Cancelled { rows_done: partial } => {
                cancelled = true;
                rows_done += partial;
            }
        }
    }

    if cancelled {
        debug!(%region, rows_done, "tiled tint cancelled");
        Ok(RenderOutcome::Cancelled { rows_done })
    } else {
        Ok(RenderOutcome::Completed)
    }
}
