//! Rectangular regions of interest.
//!
//! A [`Rect`] restricts which pixels one filter invocation touches. Hosts
//! split an image into disjoint rects and hand them to workers.
//!
//! # Coordinate System
//!
//! - Origin (0, 0) is at the **top-left** corner
//! - X increases to the right, Y increases downward
//! - Left/top edges are inclusive, right/bottom edges are exclusive
//!
//! ```text
//! (0,0) ────────► X
//!   │
//!   │   ┌──────────┐
//!   │   │  Region  │
//!   │   └──────────┘
//!   ▼
//!   Y
//! ```
//!
//! # Usage
//!
//! ```rust
//! use tint_core::Rect;
//!
//! let rect = Rect::new(10, 20, 100, 50);
//! assert!(rect.contains(15, 25));
//! assert!(!rect.contains(110, 25));
//!
//! let same = Rect::from_ltrb(10, 20, 110, 70).unwrap();
//! assert_eq!(rect, same);
//! ```

use crate::{Error, Result};

/// A rectangle defined by origin (x, y) and dimensions (width, height).
///
/// A rectangle with zero width or height is empty; filters reject empty
/// regions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Rect {
    /// X coordinate of the left edge (inclusive)
    pub x: u32,
    /// Y coordinate of the top edge (inclusive)
    pub y: u32,
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

impl Rect {
    /// Creates a new rectangle with the given origin and dimensions.
    #[inline]
    pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Creates a rectangle from origin (0, 0) with given dimensions.
    ///
    /// ```rust
    /// use tint_core::Rect;
    ///
    /// let rect = Rect::from_size(1920, 1080);
    /// assert_eq!((rect.x, rect.y), (0, 0));
    /// ```
    #[inline]
    pub const fn from_size(width: u32, height: u32) -> Self {
        Self::new(0, 0, width, height)
    }

    /// Creates a rectangle from its edges, right/bottom exclusive.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if `right < left` or
    /// `bottom < top`. Equal edges give an empty rectangle.
    ///
    /// ```rust
    /// use tint_core::Rect;
    ///
    /// let rect = Rect::from_ltrb(10, 20, 110, 70).unwrap();
    /// assert_eq!(rect.width, 100);
    /// assert_eq!(rect.height, 50);
    /// assert!(Rect::from_ltrb(10, 0, 5, 10).is_err());
    /// ```
    pub fn from_ltrb(left: u32, top: u32, right: u32, bottom: u32) -> Result<Self> {
        if right < left {
            return Err(Error::invalid_parameter("right", right, ">= left"));
        }
        if bottom < top {
            return Err(Error::invalid_parameter("bottom", bottom, ">= top"));
        }
        Ok(Self::new(left, top, right - left, bottom - top))
    }

    /// Returns the X coordinate of the left edge (inclusive).
    #[inline]
    pub const fn left(&self) -> u32 {
        self.x
    }

    /// Returns the Y coordinate of the top edge (inclusive).
    #[inline]
    pub const fn top(&self) -> u32 {
        self.y
    }

    /// Returns the X coordinate of the right edge (exclusive).
    ///
    /// This is `x + width`, the first column NOT in the rectangle.
    #[inline]
    pub const fn right(&self) -> u32 {
        self.x + self.width
    }

    /// Returns the Y coordinate of the bottom edge (exclusive).
    ///
    /// This is `y + height`, the first row NOT in the rectangle.
    #[inline]
    pub const fn bottom(&self) -> u32 {
        self.y + self.height
    }

    /// Returns the area of the rectangle in pixels.
    #[inline]
    pub const fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    /// Returns `true` if the rectangle has zero area.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Returns `true` if the point (px, py) is inside this rectangle.
    ///
    /// ```rust
    /// use tint_core::Rect;
    ///
    /// let rect = Rect::new(10, 10, 100, 100);
    /// assert!(rect.contains(10, 10));
    /// assert!(rect.contains(109, 109));
    /// assert!(!rect.contains(110, 110));
    /// ```
    #[inline]
    pub const fn contains(&self, px: u32, py: u32) -> bool {
        px >= self.x && px < self.right() && py >= self.y && py < self.bottom()
    }

    /// Returns `true` if this rectangle shares at least one pixel with another.
    ///
    /// Empty rectangles never overlap.
    #[inline]
    pub const fn overlaps(&self, other: &Rect) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }
        self.x < other.right()
            && self.right() > other.x
            && self.y < other.bottom()
            && self.bottom() > other.y
    }

    /// Checks that this rectangle is non-empty and fits in a `width`x`height` image.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRegion`] otherwise. Edge overflow counts as
    /// out of bounds.
    pub fn validate_within(&self, width: u32, height: u32) -> Result<()> {
        let fits = match (self.x.checked_add(self.width), self.y.checked_add(self.height)) {
            (Some(r), Some(b)) => r <= width && b <= height,
            _ => false,
        };
        if self.is_empty() || !fits {
            return Err(Error::invalid_region(
                self.x,
                self.y,
                self.width,
                self.height,
                width,
                height,
            ));
        }
        Ok(())
    }

    /// Splits this rectangle into full-width horizontal bands of at most `rows` rows.
    ///
    /// The bands are disjoint and cover the rectangle exactly. Yields nothing
    /// when `rows == 0`, the rectangle is empty, or its bottom edge does not
    /// fit in `u32`.
    ///
    /// ```rust
    /// use tint_core::Rect;
    ///
    /// let bands: Vec<_> = Rect::new(0, 0, 8, 5).bands(2).collect();
    /// assert_eq!(bands, vec![
    ///     Rect::new(0, 0, 8, 2),
    ///     Rect::new(0, 2, 8, 2),
    ///     Rect::new(0, 4, 8, 1),
    /// ]);
    /// ```
    pub fn bands(&self, rows: u32) -> impl Iterator<Item = Rect> + '_ {
        let bottom = self.y.checked_add(self.height);
        let count = match bottom {
            Some(_) if rows > 0 && !self.is_empty() => self.height.div_ceil(rows),
            _ => 0,
        };
        let bottom = bottom.unwrap_or(self.y);
        let (x, y, width) = (self.x, self.y, self.width);
        (0..count).map(move |i| {
            let top = y + i * rows;
            Rect::new(x, top, width, rows.min(bottom - top))
        })
    }
}

impl std::fmt::Display for Rect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Rect({}, {}, {}x{})",
            self.x, self.y, self.width, self.height
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_edges() {
        let r = Rect::new(10, 20, 100, 50);
        assert_eq!(r.left(), 10);
        assert_eq!(r.top(), 20);
        assert_eq!(r.right(), 110);
        assert_eq!(r.bottom(), 70);
        assert_eq!(r.area(), 5000);
    }

    #[test]
    fn test_from_ltrb() {
        let r = Rect::from_ltrb(3, 4, 3, 9).unwrap();
        assert!(r.is_empty());

        let err = Rect::from_ltrb(0, 10, 5, 2).unwrap_err();
        assert!(err.is_parameter_error());
    }

    #[test]
    fn test_rect_overlaps() {
        let a = Rect::new(0, 0, 100, 100);
        assert!(!a.overlaps(&Rect::new(200, 200, 50, 50)));
        assert!(!a.overlaps(&Rect::new(100, 0, 10, 10)));
        assert!(a.overlaps(&Rect::new(99, 99, 10, 10)));
        assert!(!a.overlaps(&Rect::new(10, 10, 0, 5)));
    }

    #[test]
    fn test_validate_within() {
        assert!(Rect::new(0, 0, 4, 4).validate_within(4, 4).is_ok());
        assert!(Rect::new(1, 0, 4, 4).validate_within(4, 4).is_err());
        assert!(Rect::new(0, 0, 0, 4).validate_within(4, 4).is_err());
        assert!(Rect::new(u32::MAX, 0, 2, 1).validate_within(4, 4).is_err());
    }

    #[test]
    fn test_bands_cover_exactly() {
        let r = Rect::new(3, 7, 10, 11);
        let bands: Vec<_> = r.bands(4).collect();
        assert_eq!(bands.len(), 3);
        assert_eq!(bands.iter().map(|b| b.area()).sum::<u64>(), r.area());
        for pair in bands.windows(2) {
            assert!(!pair[0].overlaps(&pair[1]));
            assert_eq!(pair[0].bottom(), pair[1].y);
        }
        assert_eq!(bands.last().unwrap().bottom(), r.bottom());
    }

    #[test]
    fn test_bands_degenerate() {
        assert_eq!(Rect::new(0, 0, 4, 4).bands(0).count(), 0);
        assert_eq!(Rect::new(0, 0, 0, 4).bands(2).count(), 0);
        assert_eq!(Rect::new(0, 0, 4, 4).bands(100).count(), 1);
    }

    #[test]
    fn test_bands_overflowing_edge() {
        assert_eq!(Rect::new(0, u32::MAX - 1, 4, 4).bands(2).count(), 0);

        let last: Vec<_> = Rect::new(0, u32::MAX - 3, 4, 3).bands(2).collect();
        assert_eq!(last, vec![Rect::new(0, u32::MAX - 3, 4, 2), Rect::new(0, u32::MAX - 1, 4, 1)]);
    }
}
