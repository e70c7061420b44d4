//! Multiplicative tint filter.
//!
//! Each pixel's color channels are scaled by the matching channel of the
//! effective color, alpha is copied through:
//!
//! ```text
//! dst.r = src.r * color.r / 255    (integer, truncating)
//! dst.g = src.g * color.g / 255
//! dst.b = src.b * color.b / 255
//! dst.a = src.a
//! ```
//!
//! Only pixels inside the region are read or written. The loop polls the
//! stop token once per row, before writing the row; once it reports stop
//! no further pixels are written and the call returns
//! [`RenderOutcome::Cancelled`]. Rows already written stay written.
//!
//! # Example
//!
//! ```rust
//! use tint_core::{PixelBuffer, Rect, Rgb8, Rgba8};
//! use tint_ops::{apply_tint, RenderOutcome, Unstoppable};
//!
//! let src = PixelBuffer::filled(4, 4, Rgba8::new(100, 100, 100, 255));
//! let mut dst = src.clone();
//! let outcome = apply_tint(&src, &mut dst, Rect::from_size(4, 4), Rgb8::new(227, 177, 152), &Unstoppable)
//!     .unwrap();
//! assert_eq!(outcome, RenderOutcome::Completed);
//! assert_eq!(dst.pixel(0, 0), Rgba8::new(89, 69, 59, 255));
//! ```

use tint_core::{PixelBuffer, Rect, Rgb8, Rgba8};
use tracing::{debug, trace};

use crate::{resolve_effective_color, OpsError, OpsResult, Stop, TintParams};

/// How a render invocation ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderOutcome {
    /// Every row of every requested region was written.
    Completed,
    /// The stop token fired; `rows_done` full rows were written first.
    Cancelled {
        /// Rows written before the stop was observed.
        rows_done: u32,
    },
}

impl RenderOutcome {
    /// Whether the render ran to completion.
    #[inline]
    pub fn is_completed(&self) -> bool {
        matches!(self, Self::Completed)
    }

    /// Whether the render stopped early.
    #[inline]
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled { .. })
    }
}

/// Result of the combined [`tint`] call.
#[derive(Debug, Clone)]
pub struct TintOutput {
    /// Copy of the source with the region tinted.
    pub image: PixelBuffer,
    /// The effective color the region was multiplied by.
    pub color: Rgb8,
    /// Whether the region was fully written.
    pub outcome: RenderOutcome,
}

/// Tint one pixel. Alpha is unchanged.
///
/// ```rust
/// use tint_core::{Rgb8, Rgba8};
/// use tint_ops::tint_pixel;
///
/// let px = tint_pixel(Rgba8::new(255, 128, 10, 77), Rgb8::new(255, 0, 128));
/// assert_eq!(px, Rgba8::new(255, 0, 5, 77));
/// ```
#[inline]
pub fn tint_pixel(px: Rgba8, color: Rgb8) -> Rgba8 {
    Rgba8::new(
        scale(px.r, color.r),
        scale(px.g, color.g),
        scale(px.b, color.b),
        px.a,
    )
}

#[inline]
fn scale(c: u8, k: u8) -> u8 {
    (u32::from(c) * u32::from(k) / 255) as u8
}

/// Tint `region` of `src` into `dst` with a precomputed effective color.
///
/// # Errors
///
/// - [`OpsError::SizeMismatch`] if `src` and `dst` differ in size
/// - [`OpsError::InvalidRegion`] if `region` is empty or out of bounds
///
/// Both are checked before any pixel is touched.
pub fn apply_tint(
    src: &PixelBuffer,
    dst: &mut PixelBuffer,
    region: Rect,
    color: Rgb8,
    stop: &dyn Stop,
) -> OpsResult<RenderOutcome> {
    check_sizes(src, dst)?;
    check_region(region, src)?;
    debug!(%region, %color, "apply tint");

    let outcome = tint_rows(src, dst.data_mut(), 0, region, color, stop);
    if let RenderOutcome::Cancelled { rows_done } = outcome {
        debug!(%region, rows_done, "tint cancelled");
    }
    Ok(outcome)
}

/// Tint `region` of `buf` in place.
///
/// Each pixel is read and then overwritten by its own tinted value, so no
/// pixel is read after being written.
///
/// # Errors
///
/// [`OpsError::InvalidRegion`] if `region` is empty or out of bounds.
pub fn apply_tint_in_place(
    buf: &mut PixelBuffer,
    region: Rect,
    color: Rgb8,
    stop: &dyn Stop,
) -> OpsResult<RenderOutcome> {
    check_region(region, buf)?;
    debug!(%region, %color, "apply tint in place");

    let (x0, x1) = (region.x as usize, region.right() as usize);
    for (done, y) in (region.y..region.bottom()).enumerate() {
        if stop.should_stop() {
            debug!(%region, rows_done = done, "tint cancelled");
            return Ok(RenderOutcome::Cancelled {
                rows_done: done as u32,
            });
        }
        for px in &mut buf.row_mut(y)[x0..x1] {
            *px = tint_pixel(*px, color);
        }
    }
    Ok(RenderOutcome::Completed)
}

/// Tint a batch of regions in order, the way a host hands out its tiles.
///
/// Every region is validated before the first one is processed. Stops at
/// the first cancellation; `rows_done` counts rows across all regions.
///
/// # Errors
///
/// As [`apply_tint`], for the first offending region.
pub fn apply_tint_regions(
    src: &PixelBuffer,
    dst: &mut PixelBuffer,
    regions: &[Rect],
    color: Rgb8,
    stop: &dyn Stop,
) -> OpsResult<RenderOutcome> {
    check_sizes(src, dst)?;
    for region in regions {
        check_region(*region, src)?;
    }
    debug!(count = regions.len(), %color, "apply tint to regions");

    let mut rows_total = 0u32;
    for region in regions {
        match tint_rows(src, dst.data_mut(), 0, *region, color, stop) {
            RenderOutcome::Completed => rows_total += region.height,
            RenderOutcome::Cancelled { rows_done } => {
                debug!(%region, rows_done, "tint cancelled");
                return Ok(RenderOutcome::Cancelled {
                    rows_done: rows_total + rows_done,
                });
            }
        }
    }
    Ok(RenderOutcome::Completed)
}

/// Partition `region` into disjoint bands of at most `band_rows` rows, each spanning the region.
///
/// Hosts that run their own workers hand one band to each; the bands
/// cover the region exactly.
///
/// # Errors
///
/// [`OpsError::InvalidParameter`] if `band_rows` is zero,
/// [`OpsError::InvalidRegion`] if the region is empty or an edge overflows
/// `u32`.
///
/// ```rust
/// use tint_core::Rect;
/// use tint_ops::tile_rows;
///
/// let bands = tile_rows(Rect::new(2, 1, 6, 5), 2).unwrap();
/// assert_eq!(bands, vec![Rect::new(2, 1, 6, 2), Rect::new(2, 3, 6, 2), Rect::new(2, 5, 6, 1)]);
/// ```
pub fn tile_rows(region: Rect, band_rows: u32) -> OpsResult<Vec<Rect>> {
    if band_rows == 0 {
        return Err(OpsError::InvalidParameter("band_rows must be > 0".into()));
    }
    if region.is_empty() {
        return Err(OpsError::InvalidRegion(format!("{region} is empty")));
    }
    let right = region.x.checked_add(region.width);
    let bottom = region.y.checked_add(region.height);
    if right.is_none() || bottom.is_none() {
        return Err(OpsError::InvalidRegion(format!("{region} edge overflows")));
    }
    Ok(region.bands(band_rows).collect())
}

/// Validate, resolve the effective color once, and tint `region` of a copy of `src`.
///
/// Pixels outside the region keep their source values.
///
/// # Example
///
/// ```rust
/// use tint_core::{PixelBuffer, Rect, Rgb8, Rgba8};
/// use tint_ops::{tint, ColorSource, TintParams, Unstoppable};
///
/// let src = PixelBuffer::filled(2, 2, Rgba8::new(100, 100, 100, 255));
/// let params = TintParams::new(ColorSource::Rgb(Rgb8::new(200, 100, 50)), 0.5);
/// let out = tint(&src, &params, Rect::new(0, 0, 1, 2), &Unstoppable).unwrap();
/// assert_eq!(out.image.pixel(0, 1), Rgba8::new(89, 69, 59, 255));
/// assert_eq!(out.image.pixel(1, 1), Rgba8::new(100, 100, 100, 255));
/// ```
pub fn tint(
    src: &PixelBuffer,
    params: &TintParams,
    region: Rect,
    stop: &dyn Stop,
) -> OpsResult<TintOutput> {
    check_region(region, src)?;
    let color = resolve_effective_color(params)?;
    let mut image = src.clone();
    let outcome = apply_tint(src, &mut image, region, color, stop)?;
    Ok(TintOutput {
        image,
        color,
        outcome,
    })
}

/// Row loop shared by the serial and parallel drivers.
///
/// `dst_rows` holds full-width destination rows starting at image row
/// `first_row`; `region` must lie inside those rows. Already validated.
pub(crate) fn tint_rows(
    src: &PixelBuffer,
    dst_rows: &mut [Rgba8],
    first_row: u32,
    region: Rect,
    color: Rgb8,
    stop: &dyn Stop,
) -> RenderOutcome {
    let width = src.width() as usize;
    let (x0, x1) = (region.x as usize, region.right() as usize);

    for (done, y) in (region.y..region.bottom()).enumerate() {
        if stop.should_stop() {
            trace!(%region, row = y, "stop observed");
            return RenderOutcome::Cancelled {
                rows_done: done as u32,
            };
        }
        let start = (y - first_row) as usize * width;
        let src_row = &src.row(y)[x0..x1];
        let dst_row = &mut dst_rows[start + x0..start + x1];
        for (d, &s) in dst_row.iter_mut().zip(src_row) {
            *d = tint_pixel(s, color);
        }
    }
    RenderOutcome::Completed
}

pub(crate) fn check_sizes(src: &PixelBuffer, dst: &PixelBuffer) -> OpsResult<()> {
    if src.dimensions() != dst.dimensions() {
        return Err(OpsError::SizeMismatch(format!(
            "source {}x{} vs destination {}x{}",
            src.width(),
            src.height(),
            dst.width(),
            dst.height()
        )));
    }
    Ok(())
}

pub(crate) fn check_region(region: Rect, image: &PixelBuffer) -> OpsResult<()> {
    region
        .validate_within(image.width(), image.height())
        .map_err(|e| OpsError::InvalidRegion(e.to_string()))
}
