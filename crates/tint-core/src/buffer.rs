//! Owned RGBA8 pixel buffer.
//!
//! # Memory Layout
//!
//! Pixels are stored in **row-major** order, top-to-bottom, one [`Rgba8`]
//! per pixel with no row padding:
//!
//! ```text
//! Memory: [RGBA RGBA RGBA ...]  ← Row 0
//!         [RGBA RGBA RGBA ...]  ← Row 1
//!         ...
//! ```
//!
//! Because rows are contiguous and unpadded, `data_mut().chunks_mut(width * n)`
//! yields disjoint bands of `n` full rows, which is how parallel drivers
//! hand out destination regions without locking.
//!
//! # Usage
//!
//! ```rust
//! use tint_core::{PixelBuffer, Rgba8};
//!
//! let mut img = PixelBuffer::new(64, 32);
//! img.set_pixel(3, 4, Rgba8::new(10, 20, 30, 40));
//! assert_eq!(img.pixel(3, 4), Rgba8::new(10, 20, 30, 40));
//! assert_eq!(img.row(4).len(), 64);
//! ```

use crate::{Error, Rect, Result, Rgba8};

/// Owned row-major RGBA8 image buffer.
#[derive(Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    /// Pixel data, `width * height` entries
    data: Vec<Rgba8>,
    /// Image width in pixels
    width: u32,
    /// Image height in pixels
    height: u32,
}

impl PixelBuffer {
    /// Creates a new buffer of transparent black pixels.
    pub fn new(width: u32, height: u32) -> Self {
        Self::filled(width, height, Rgba8::default())
    }

    /// Creates a buffer filled with one pixel value.
    ///
    /// ```rust
    /// use tint_core::{PixelBuffer, Rgba8};
    ///
    /// let white = PixelBuffer::filled(8, 8, Rgba8::opaque(255, 255, 255));
    /// assert!(white.data().iter().all(|p| p.a == 255));
    /// ```
    pub fn filled(width: u32, height: u32, pixel: Rgba8) -> Self {
        Self {
            data: vec![pixel; width as usize * height as usize],
            width,
            height,
        }
    }

    /// Creates a buffer from existing pixel data.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] if `data.len() != width * height`.
    pub fn from_pixels(width: u32, height: u32, data: Vec<Rgba8>) -> Result<Self> {
        let expected = width as usize * height as usize;
        if data.len() != expected {
            return Err(Error::invalid_dimensions(
                width,
                height,
                format!("expected {} pixels, got {}", expected, data.len()),
            ));
        }
        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Creates a buffer from interleaved `[R, G, B, A, ...]` bytes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] if the byte count is not
    /// `width * height * 4`.
    pub fn from_rgba_bytes(width: u32, height: u32, bytes: &[u8]) -> Result<Self> {
        let expected = width as usize * height as usize * 4;
        if bytes.len() != expected {
            return Err(Error::invalid_dimensions(
                width,
                height,
                format!("expected {} bytes, got {}", expected, bytes.len()),
            ));
        }
        let data = bytes
            .chunks_exact(4)
            .map(|c| Rgba8::new(c[0], c[1], c[2], c[3]))
            .collect();
        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Returns the image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns the image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns the image dimensions as (width, height).
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Returns a rectangle covering the entire image.
    #[inline]
    pub fn bounds(&self) -> Rect {
        Rect::from_size(self.width, self.height)
    }

    /// Returns `true` if the image has zero area.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Returns the pixel data.
    #[inline]
    pub fn data(&self) -> &[Rgba8] {
        &self.data
    }

    /// Returns the pixel data mutably.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [Rgba8] {
        &mut self.data
    }

    /// Returns the index of pixel (x, y) in [`data`](Self::data).
    #[inline]
    pub fn index_of(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Returns the pixel at (x, y).
    ///
    /// # Panics
    ///
    /// Panics if (x, y) is out of bounds.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> Rgba8 {
        debug_assert!(x < self.width && y < self.height, "pixel out of bounds");
        self.data[self.index_of(x, y)]
    }

    /// Returns the pixel at (x, y), or `None` if out of bounds.
    #[inline]
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<Rgba8> {
        if x < self.width && y < self.height {
            Some(self.pixel(x, y))
        } else {
            None
        }
    }

    /// Sets the pixel at (x, y).
    ///
    /// # Panics
    ///
    /// Panics if (x, y) is out of bounds.
    #[inline]
    pub fn set_pixel(&mut self, x: u32, y: u32, pixel: Rgba8) {
        debug_assert!(x < self.width && y < self.height, "pixel out of bounds");
        let idx = self.index_of(x, y);
        self.data[idx] = pixel;
    }

    /// Fills the entire image with a pixel value.
    pub fn fill(&mut self, pixel: Rgba8) {
        self.data.fill(pixel);
    }

    /// Returns a row of pixels as a slice.
    ///
    /// # Panics
    ///
    /// Panics if y >= height.
    #[inline]
    pub fn row(&self, y: u32) -> &[Rgba8] {
        debug_assert!(y < self.height, "row out of bounds");
        let start = y as usize * self.width as usize;
        &self.data[start..start + self.width as usize]
    }

    /// Returns a mutable row of pixels.
    ///
    /// # Panics
    ///
    /// Panics if y >= height.
    #[inline]
    pub fn row_mut(&mut self, y: u32) -> &mut [Rgba8] {
        debug_assert!(y < self.height, "row out of bounds");
        let start = y as usize * self.width as usize;
        let end = start + self.width as usize;
        &mut self.data[start..end]
    }

    /// Iterates over all pixels with their coordinates.
    pub fn pixels(&self) -> impl Iterator<Item = (u32, u32, Rgba8)> + '_ {
        let width = self.width.max(1);
        self.data
            .iter()
            .enumerate()
            .map(move |(i, &p)| ((i as u32) % width, (i as u32) / width, p))
    }

}

impl std::fmt::Debug for PixelBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PixelBuffer")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish()
    }
}
