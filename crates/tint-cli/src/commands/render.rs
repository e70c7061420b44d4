//! Render command.
//!
//! Tints a synthetic RGBA gradient with the tiled renderer and reports the
//! outcome, timing and a checksum of the result. `--cancel-after` stops the
//! render after a fixed number of rows to exercise cancellation.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Args;
use tint_core::{PixelBuffer, Rect, Rgba8};
use tint_ops::{
    apply_tint, apply_tint_tiled, resolve_effective_color, RenderOutcome, Stop, StopReason,
    Unstoppable, DEFAULT_BAND_ROWS,
};
use tracing::{info, trace};

use super::ParamArgs;

/// Arguments for the `render` command.
#[derive(Args, Debug)]
pub struct RenderArgs {
    #[command(flatten)]
    pub params: ParamArgs,

    /// Image width
    #[arg(short = 'W', long, default_value = "1024")]
    pub width: u32,

    /// Image height
    #[arg(short = 'H', long, default_value = "768")]
    pub height: u32,

    /// Region to tint (default: whole image)
    #[arg(long, num_args = 4, value_names = ["X", "Y", "W", "H"])]
    pub region: Option<Vec<u32>>,

    /// Rows per parallel band
    #[arg(short, long, default_value_t = DEFAULT_BAND_ROWS)]
    pub band_rows: u32,

    /// Stop after this many rows have been started
    #[arg(long, value_name = "ROWS")]
    pub cancel_after: Option<usize>,

    /// Render on the calling thread only
    #[arg(long)]
    pub serial: bool,
}

/// Stop token that lets a fixed number of rows through.
struct RowBudget {
    rows: AtomicUsize,
    limit: usize,
}

impl Stop for RowBudget {
    fn check(&self) -> std::result::Result<(), StopReason> {
        if self.rows.fetch_add(1, Ordering::Relaxed) < self.limit {
            Ok(())
        } else {
            Err(StopReason::Cancelled)
        }
    }
}

/// Run the render command.
pub fn run(args: RenderArgs, verbose: u8) -> Result<()> {
    trace!(?args, "render::run");
    let params = args.params.to_params()?;
    let color = resolve_effective_color(&params)?;

    let src = gradient(args.width, args.height).context("Failed to build source image")?;
    let mut dst = src.clone();
    let region = match args.region.as_deref() {
        Some(&[x, y, w, h]) => Rect::new(x, y, w, h),
        Some(_) => anyhow::bail!("--region takes exactly four values"),
        None => src.bounds(),
    };

    let budget = args.cancel_after.map(|limit| RowBudget {
        rows: AtomicUsize::new(0),
        limit,
    });
    let stop: &(dyn Stop + Sync) = match &budget {
        Some(budget) => budget,
        None => &Unstoppable,
    };

    info!(%region, %color, band_rows = args.band_rows, serial = args.serial, "rendering");
    let start = Instant::now();
    let outcome = if args.serial {
        apply_tint(&src, &mut dst, region, color, stop)
    } else {
        apply_tint_tiled(&src, &mut dst, region, color, args.band_rows, stop)
    }
    .context("Render failed")?;
    let elapsed = start.elapsed();

    if verbose > 0 {
        println!(
            "{}x{} region {} color {} ({} threads)",
            args.width,
            args.height,
            region,
            color,
            if args.serial { 1 } else { rayon::current_num_threads() }
        );
    }
    match outcome {
        RenderOutcome::Completed => println!("completed: {} rows", region.height),
        RenderOutcome::Cancelled { rows_done } => {
            println!("cancelled: {rows_done} of {} rows", region.height)
        }
    }
    println!("checksum: {:016x}", checksum(&dst));
    println!("time: {:.3} ms", elapsed.as_secs_f64() * 1000.0);
    Ok(())
}

/// Horizontal red ramp, vertical green ramp, blue checker, alpha ramp.
fn gradient(width: u32, height: u32) -> tint_core::Result<PixelBuffer> {
    let mut pixels = Vec::with_capacity(width as usize * height as usize);
    for y in 0..height {
        for x in 0..width {
            pixels.push(Rgba8::new(
                ramp(x, width),
                ramp(y, height),
                if (x / 8 + y / 8) % 2 == 0 { 200 } else { 60 },
                (x.wrapping_add(y) % 256) as u8,
            ));
        }
    }
    PixelBuffer::from_pixels(width, height, pixels)
}

/// `0..len` mapped onto `0..=255`.
fn ramp(i: u32, len: u32) -> u8 {
    let span = u64::from(len.max(2) - 1);
    (u64::from(i) * 255 / span).min(255) as u8
}

/// FNV-1a over the pixel bytes.
fn checksum(image: &PixelBuffer) -> u64 {
    const OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
    const PRIME: u64 = 0x0000_0100_0000_01b3;
    image
        .data()
        .iter()
        .flat_map(|px| px.to_array())
        .fold(OFFSET, |hash, byte| (hash ^ u64::from(byte)).wrapping_mul(PRIME))
}
