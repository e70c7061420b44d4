//! Effective-color resolution.
//!
//! The effective color is the one RGB value every pixel of a render pass
//! is multiplied by: a linear blend from white to the source color.
//!
//! # Formula
//!
//! ```text
//! effective[c] = to_byte(white[c] + strength * (source[c] - white[c]))
//! ```
//!
//! `to_byte` clamps to `[0, 255]` and applies the [`BlendRounding`] mode
//! (truncation by default). Strength 0 gives white, which leaves pixels
//! unchanged; strength 1 gives the source color exactly.

use tint_core::Rgb8;
use tracing::debug;

use crate::{BlendRounding, OpsResult, TintParams};

/// Resolve the effective color for a render pass.
///
/// Validates `params` first; nothing else is touched on error.
///
/// # Example
///
/// ```rust
/// use tint_ops::{resolve_effective_color, ColorSource, TintParams};
/// use tint_core::Rgb8;
///
/// let params = TintParams::new(ColorSource::Rgb(Rgb8::new(200, 100, 50)), 0.5);
/// assert_eq!(resolve_effective_color(&params).unwrap(), Rgb8::new(227, 177, 152));
/// ```
pub fn resolve_effective_color(params: &TintParams) -> OpsResult<Rgb8> {
    params.validate()?;
    let source = params.source.to_rgb();
    let effective = lerp_from_white(source, params.strength, params.rounding);
    debug!(
        source = ?params.source,
        strength = params.strength,
        rgb = %source,
        %effective,
        "resolved effective tint color"
    );
    Ok(effective)
}

/// Resolve the effective color from the flat host parameter set.
///
/// `use_rgb_picker` selects `rgb`; otherwise `(hue, sat, val)` is used.
/// All values are range-checked.
///
/// ```rust
/// use tint_ops::resolve_effective_color_flat;
/// use tint_core::Rgb8;
///
/// let red = resolve_effective_color_flat(false, Rgb8::BLACK, 0, 100, 100, 1.0).unwrap();
/// assert_eq!(red, Rgb8::new(255, 0, 0));
/// ```
pub fn resolve_effective_color_flat(
    use_rgb_picker: bool,
    rgb: Rgb8,
    hue: i32,
    sat: i32,
    val: i32,
    strength: f64,
) -> OpsResult<Rgb8> {
    let params = TintParams::from_flat(use_rgb_picker, rgb, hue, sat, val, strength)?;
    resolve_effective_color(&params)
}

/// Blend from white toward `source` by `strength`, per channel.
///
/// No validation; callers pass a strength in `[0, 1]`.
#[inline]
pub fn lerp_from_white(source: Rgb8, strength: f64, rounding: BlendRounding) -> Rgb8 {
    let white = Rgb8::WHITE;
    Rgb8::new(
        lerp_channel(white.r, source.r, strength, rounding),
        lerp_channel(white.g, source.g, strength, rounding),
        lerp_channel(white.b, source.b, strength, rounding),
    )
}

#[inline]
fn lerp_channel(from: u8, to: u8, frac: f64, rounding: BlendRounding) -> u8 {
    let from = f64::from(from);
    let to = f64::from(to);
    rounding.to_byte(from + frac * (to - from))
}
