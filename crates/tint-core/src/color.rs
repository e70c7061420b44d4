//! 8-bit color and pixel types, and HSV to RGB conversion.
//!
//! - [`Rgb8`] - opaque color, used as the tint source and effective color
//! - [`Rgba8`] - one pixel of a [`crate::PixelBuffer`]
//! - [`Hsv`] - hue in degrees, saturation and value in percent
//!
//! # HSV Conversion
//!
//! [`Hsv::to_rgb`] uses the conventional six-sector algorithm. Channels are
//! computed in `f64` on the unit interval and scaled to bytes by truncation,
//! so `Hsv::new(0, 100, 100)` is exactly red and value 100 maps to 255.
//!
//! ```rust
//! use tint_core::{Hsv, Rgb8};
//!
//! let green = Hsv::new(120, 100, 100).unwrap();
//! assert_eq!(green.to_rgb(), Rgb8::new(0, 255, 0));
//! ```

use std::fmt;
use std::str::FromStr;

use crate::{Error, Result};

/// Largest accepted hue, in degrees. 360 wraps to 0.
pub const HUE_MAX: u16 = 360;

/// Largest accepted saturation, in percent.
pub const SATURATION_MAX: u8 = 100;

/// Largest accepted value, in percent.
pub const VALUE_MAX: u8 = 100;

/// Opaque 8-bit RGB color.
///
/// # Example
///
/// ```
/// use tint_core::Rgb8;
///
/// let c: Rgb8 = "#C86432".parse().unwrap();
/// assert_eq!(c, Rgb8::new(200, 100, 50));
/// assert_eq!(c.to_opaque_u32(), 0xC86432);
/// assert_eq!(c.to_string(), "#C86432");
/// ```
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgb8 {
    /// Red channel value.
    pub r: u8,
    /// Green channel value.
    pub g: u8,
    /// Blue channel value.
    pub b: u8,
}

impl Rgb8 {
    /// Opaque white, the identity tint.
    pub const WHITE: Rgb8 = Rgb8::new(255, 255, 255);

    /// Opaque black.
    pub const BLACK: Rgb8 = Rgb8::new(0, 0, 0);

    /// Create a new RGB color.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create a grayscale color with equal RGB values.
    #[inline]
    pub const fn gray(v: u8) -> Self {
        Self::new(v, v, v)
    }

    /// Unpack from the `0xRRGGBB` integer form.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if any bit above the low 24 is set.
    pub fn from_opaque_u32(packed: u32) -> Result<Self> {
        if packed > 0x00FF_FFFF {
            return Err(Error::invalid_parameter(
                "rgb",
                format_args!("{packed:#X}"),
                "0x000000..=0xFFFFFF",
            ));
        }
        Ok(Self::new(
            (packed >> 16) as u8,
            (packed >> 8) as u8,
            packed as u8,
        ))
    }

    /// Pack into the `0xRRGGBB` integer form.
    #[inline]
    pub const fn to_opaque_u32(self) -> u32 {
        (self.r as u32) << 16 | (self.g as u32) << 8 | self.b as u32
    }

    /// Get RGB values as an array.
    #[inline]
    pub const fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl fmt::Display for Rgb8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb8 {
    type Err = Error;

    /// Parses `#RRGGBB` or `RRGGBB` (hex digits, either case).
    fn from_str(s: &str) -> Result<Self> {
        let digits = s.trim().trim_start_matches('#');
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(Error::invalid_parameter("rgb", s, "#RRGGBB"));
        }
        let packed = u32::from_str_radix(digits, 16)
            .map_err(|_| Error::invalid_parameter("rgb", s, "#RRGGBB"))?;
        Self::from_opaque_u32(packed)
    }
}

/// One RGBA8 pixel, straight (not premultiplied) alpha.
///
/// Uses `#[repr(C)]` for predictable layout: `[R, G, B, A]`
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgba8 {
    /// Red channel value.
    pub r: u8,
    /// Green channel value.
    pub g: u8,
    /// Blue channel value.
    pub b: u8,
    /// Alpha channel value.
    pub a: u8,
}

impl Rgba8 {
    /// Create a new RGBA pixel.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create a fully opaque pixel.
    #[inline]
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Combine an RGB color with an alpha value.
    #[inline]
    pub const fn with_alpha(rgb: Rgb8, a: u8) -> Self {
        Self::new(rgb.r, rgb.g, rgb.b, a)
    }

    /// The color channels without alpha.
    #[inline]
    pub const fn rgb(self) -> Rgb8 {
        Rgb8::new(self.r, self.g, self.b)
    }

    /// Get RGBA values as an array.
    #[inline]
    pub const fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl From<[u8; 4]> for Rgba8 {
    #[inline]
    fn from(arr: [u8; 4]) -> Self {
        Self::new(arr[0], arr[1], arr[2], arr[3])
    }
}

/// Hue/saturation/value color.
///
/// Hue is in degrees `0..=360` (360 is the same hue as 0), saturation and
/// value are percentages `0..=100`. Fields are public; [`Hsv::new`] and
/// [`Hsv::validate`] enforce the ranges.
///
/// # Example
///
/// ```
/// use tint_core::{Hsv, Rgb8};
///
/// assert_eq!(Hsv::new(0, 0, 100).unwrap().to_rgb(), Rgb8::WHITE);
/// assert!(Hsv::new(361, 0, 0).is_err());
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hsv {
    /// Hue in degrees.
    pub hue: u16,
    /// Saturation in percent.
    pub saturation: u8,
    /// Value (brightness) in percent.
    pub value: u8,
}

impl Default for Hsv {
    /// Fully saturated, full-value red.
    fn default() -> Self {
        Self {
            hue: 0,
            saturation: SATURATION_MAX,
            value: VALUE_MAX,
        }
    }
}

impl Hsv {
    /// Create a validated HSV color.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] naming the first component out of range.
    pub fn new(hue: u16, saturation: u8, value: u8) -> Result<Self> {
        let hsv = Self {
            hue,
            saturation,
            value,
        };
        hsv.validate()?;
        Ok(hsv)
    }

    /// Check every component against its range.
    pub fn validate(&self) -> Result<()> {
        if self.hue > HUE_MAX {
            return Err(Error::invalid_parameter("hue", self.hue, "0..=360"));
        }
        if self.saturation > SATURATION_MAX {
            return Err(Error::invalid_parameter(
                "saturation",
                self.saturation,
                "0..=100",
            ));
        }
        if self.value > VALUE_MAX {
            return Err(Error::invalid_parameter("value", self.value, "0..=100"));
        }
        Ok(())
    }

    /// Convert to unit-range RGB, each channel in `[0.0, 1.0]`.
    ///
    /// Components are assumed valid; out-of-range saturation or value
    /// produce out-of-range channels.
    pub fn to_unit_rgb(&self) -> [f64; 3] {
        let h = f64::from(self.hue % HUE_MAX);
        let s = f64::from(self.saturation) / f64::from(SATURATION_MAX);
        let v = f64::from(self.value) / f64::from(VALUE_MAX);

        if s == 0.0 {
            return [v, v, v];
        }

        let sector_pos = h / 60.0;
        let sector = sector_pos.floor();
        let frac = sector_pos - sector;

        let p = v * (1.0 - s);
        let q = v * (1.0 - s * frac);
        let t = v * (1.0 - s * (1.0 - frac));

        match sector as u8 {
            0 => [v, t, p],
            1 => [q, v, p],
            2 => [p, v, t],
            3 => [p, q, v],
            4 => [t, p, v],
            _ => [v, p, q],
        }
    }

    /// Convert to 8-bit RGB. Each unit channel is scaled by 255 and truncated.
    pub fn to_rgb(&self) -> Rgb8 {
        let [r, g, b] = self.to_unit_rgb();
        Rgb8::new(unit_to_byte(r), unit_to_byte(g), unit_to_byte(b))
    }
}

impl From<Hsv> for Rgb8 {
    #[inline]
    fn from(hsv: Hsv) -> Self {
        hsv.to_rgb()
    }
}

/// Scale a unit value to a byte, truncating toward zero.
#[inline]
fn unit_to_byte(v: f64) -> u8 {
    (v * 255.0).clamp(0.0, 255.0) as u8
}
