//! Tint parameters.
//!
//! [`TintParams`] is the whole configuration of one render pass. The tint
//! color comes from exactly one [`ColorSource`], so there are no fields
//! that are present but ignored.
//!
//! # Example
//!
//! ```rust
//! use tint_ops::{ColorSource, TintParams};
//! use tint_core::{Hsv, Rgb8};
//!
//! let by_rgb = TintParams::new(ColorSource::Rgb(Rgb8::new(200, 100, 50)), 0.5);
//! assert!(by_rgb.validate().is_ok());
//!
//! let by_hsv = TintParams::new(ColorSource::Hsv(Hsv::new(30, 100, 100).unwrap()), 1.0);
//! assert_eq!(by_hsv.source.to_rgb(), Rgb8::new(255, 127, 0));
//! ```

use std::fmt;
use std::str::FromStr;

use tint_core::{Hsv, Rgb8, HUE_MAX, SATURATION_MAX, VALUE_MAX};

use crate::{OpsError, OpsResult};

/// Where the tint color comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ColorSource {
    /// Color picked directly as RGB.
    Rgb(Rgb8),
    /// Color given as hue/saturation/value.
    Hsv(Hsv),
}

impl Default for ColorSource {
    fn default() -> Self {
        Self::Rgb(Rgb8::BLACK)
    }
}

impl ColorSource {
    /// The source color in RGB. HSV sources are converted with [`Hsv::to_rgb`].
    #[inline]
    pub fn to_rgb(&self) -> Rgb8 {
        match self {
            Self::Rgb(rgb) => *rgb,
            Self::Hsv(hsv) => hsv.to_rgb(),
        }
    }

    /// Check the source's components against their ranges.
    pub fn validate(&self) -> OpsResult<()> {
        match self {
            Self::Rgb(_) => Ok(()),
            Self::Hsv(hsv) => hsv.validate().map_err(OpsError::from),
        }
    }
}

/// How the white-to-source blend is converted back to a byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum BlendRounding {
    /// Drop the fraction (`227.5 -> 227`).
    #[default]
    Truncate,
    /// Round half away from zero (`227.5 -> 228`).
    HalfUp,
    /// Round half to even (`227.5 -> 228`, `152.5 -> 152`).
    HalfEven,
}

impl BlendRounding {
    /// Clamp `v` to `[0, 255]` and convert it to a byte.
    #[inline]
    pub fn to_byte(self, v: f64) -> u8 {
        let v = v.clamp(0.0, 255.0);
        let rounded = match self {
            Self::Truncate => v.trunc(),
            Self::HalfUp => v.round(),
            Self::HalfEven => v.round_ties_even(),
        };
        rounded as u8
    }
}

impl fmt::Display for BlendRounding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Truncate => "truncate",
            Self::HalfUp => "half-up",
            Self::HalfEven => "half-even",
        })
    }
}

impl FromStr for BlendRounding {
    type Err = OpsError;

    fn from_str(s: &str) -> OpsResult<Self> {
        match s.to_ascii_lowercase().replace('_', "-").as_str() {
            "truncate" | "trunc" => Ok(Self::Truncate),
            "half-up" | "round" => Ok(Self::HalfUp),
            "half-even" | "bankers" => Ok(Self::HalfEven),
            other => Err(OpsError::InvalidParameter(format!(
                "rounding '{other}': expected truncate, half-up or half-even"
            ))),
        }
    }
}

/// Parameters for one tint render pass.
///
/// Defaults: full strength, black RGB source, truncating blend.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TintParams {
    /// Blend position between white (0.0) and the source color (1.0).
    pub strength: f64,
    /// Tint color source.
    pub source: ColorSource,
    /// Byte conversion of the blended color.
    pub rounding: BlendRounding,
}

impl Default for TintParams {
    fn default() -> Self {
        Self {
            strength: 1.0,
            source: ColorSource::default(),
            rounding: BlendRounding::default(),
        }
    }
}

impl TintParams {
    /// Create parameters with the default rounding.
    pub fn new(source: ColorSource, strength: f64) -> Self {
        Self {
            strength,
            source,
            rounding: BlendRounding::default(),
        }
    }

    /// Set the rounding mode.
    pub fn with_rounding(mut self, rounding: BlendRounding) -> Self {
        self.rounding = rounding;
        self
    }

    /// Build parameters from the flat host form, where a boolean picks RGB
    /// or HSV and the other fields are carried along.
    ///
    /// Every field is range-checked, including the ones the boolean makes
    /// irrelevant, because the host enforces slider ranges on all of them.
    ///
    /// # Errors
    ///
    /// [`OpsError::InvalidParameter`] for a value out of range.
    ///
    /// ```rust
    /// use tint_ops::{ColorSource, TintParams};
    /// use tint_core::Rgb8;
    ///
    /// let p = TintParams::from_flat(true, Rgb8::new(1, 2, 3), 0, 100, 100, 0.25).unwrap();
    /// assert_eq!(p.source, ColorSource::Rgb(Rgb8::new(1, 2, 3)));
    /// assert!(TintParams::from_flat(false, Rgb8::BLACK, -1, 0, 0, 0.0).is_err());
    /// ```
    pub fn from_flat(
        use_rgb_picker: bool,
        rgb: Rgb8,
        hue: i32,
        sat: i32,
        val: i32,
        strength: f64,
    ) -> OpsResult<Self> {
        let hue = checked_component("hue", hue, HUE_MAX.into())?;
        let sat = checked_component("saturation", sat, SATURATION_MAX.into())?;
        let val = checked_component("value", val, VALUE_MAX.into())?;
        let hsv = Hsv::new(hue as u16, sat as u8, val as u8)?;

        let source = if use_rgb_picker {
            ColorSource::Rgb(rgb)
        } else {
            ColorSource::Hsv(hsv)
        };
        let params = Self::new(source, strength);
        params.validate()?;
        Ok(params)
    }

    /// Check strength and source against their ranges.
    ///
    /// # Errors
    ///
    /// [`OpsError::InvalidParameter`] if strength is NaN or outside
    /// `[0.0, 1.0]`, or an HSV component is out of range.
    pub fn validate(&self) -> OpsResult<()> {
        if !(0.0..=1.0).contains(&self.strength) {
            return Err(OpsError::InvalidParameter(format!(
                "strength {} outside 0.0..=1.0",
                self.strength
            )));
        }
        self.source.validate()
    }
}

fn checked_component(name: &str, v: i32, max: i32) -> OpsResult<i32> {
    if !(0..=max).contains(&v) {
        return Err(OpsError::InvalidParameter(format!(
            "{name} = {v}, expected 0..={max}"
        )));
    }
    Ok(v)
}
