//! CLI command implementations

pub mod render;
pub mod resolve;

use anyhow::{Context, Result};
use clap::Args;
use tint_core::{Hsv, Rgb8};
use tint_ops::{BlendRounding, ColorSource, TintParams};

/// Tint parameters shared by every command.
#[derive(Args, Debug)]
pub struct ParamArgs {
    /// Tint color as hex (RRGGBB or #RRGGBB)
    #[arg(long, conflicts_with = "hsv")]
    pub rgb: Option<Rgb8>,

    /// Tint color as hue (0-360), saturation (0-100), value (0-100)
    #[arg(long, num_args = 3, value_names = ["H", "S", "V"])]
    pub hsv: Option<Vec<u16>>,

    /// Blend position from white (0.0) to the tint color (1.0)
    #[arg(short, long, default_value = "1.0")]
    pub strength: f64,

    /// Byte rounding of the blended color: truncate, half-up, half-even
    #[arg(long, default_value = "truncate")]
    pub rounding: BlendRounding,

    /// Full parameter set as JSON; other parameter flags are ignored
    #[arg(long, value_name = "JSON")]
    pub params: Option<String>,
}

impl ParamArgs {
    /// Build validated tint parameters from the flags or the JSON document.
    pub fn to_params(&self) -> Result<TintParams> {
        let params = match &self.params {
            Some(json) => serde_json::from_str::<TintParams>(json)
                .context("Failed to parse --params JSON")?,
            None => TintParams::new(self.source()?, self.strength).with_rounding(self.rounding),
        };
        params.validate().context("Invalid tint parameters")?;
        Ok(params)
    }

    fn source(&self) -> Result<ColorSource> {
        if let Some(hsv) = &self.hsv {
            let &[h, s, v] = hsv.as_slice() else {
                anyhow::bail!("--hsv takes exactly three values");
            };
            let s = u8::try_from(s).context("saturation out of range")?;
            let v = u8::try_from(v).context("value out of range")?;
            return Ok(ColorSource::Hsv(Hsv::new(h, s, v)?));
        }
        Ok(ColorSource::Rgb(self.rgb.unwrap_or(Rgb8::BLACK)))
    }
}
