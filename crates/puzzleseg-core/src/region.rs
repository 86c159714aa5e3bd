//! Region - Inclusive pixel rectangle
//!
//! Unlike a width/height box, a `Region` stores both corners inclusively:
//! a one-pixel region has `x0 == x1` and `y0 == y1`. Every segmentation
//! stage consumes and produces regions in this form.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// An inclusive pixel rectangle `(x0, y0)-(x1, y1)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Region {
    /// Left column
    pub x0: i32,
    /// Top row
    pub y0: i32,
    /// Right column (inclusive)
    pub x1: i32,
    /// Bottom row (inclusive)
    pub y1: i32,
}

impl Region {
    /// Create a new region.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DegenerateRegion`] if `x0 > x1` or `y0 > y1`.
    pub fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Result<Self> {
        if x0 > x1 || y0 > y1 {
            return Err(Error::DegenerateRegion { x0, y0, x1, y1 });
        }
        Ok(Self { x0, y0, x1, y1 })
    }

    /// Create a region without validation
    pub const fn new_unchecked(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// The region covering a whole `width` x `height` image.
    pub fn full(width: u32, height: u32) -> Self {
        Self {
            x0: 0,
            y0: 0,
            x1: width as i32 - 1,
            y1: height as i32 - 1,
        }
    }

    /// Width in pixels (`x1 - x0 + 1`)
    #[inline]
    pub fn width(&self) -> i32 {
        self.x1 - self.x0 + 1
    }

    /// Height in pixels (`y1 - y0 + 1`)
    #[inline]
    pub fn height(&self) -> i32 {
        self.y1 - self.y0 + 1
    }

    #[inline]
    pub fn area(&self) -> i64 {
        self.width() as i64 * self.height() as i64
    }

    /// Check that the corners are ordered
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.x0 <= self.x1 && self.y0 <= self.y1
    }

    #[inline]
    pub fn contains_point(&self, x: i32, y: i32) -> bool {
        x >= self.x0 && x <= self.x1 && y >= self.y0 && y <= self.y1
    }

    /// Check if this region fully contains another
    pub fn contains_region(&self, other: &Region) -> bool {
        other.x0 >= self.x0 && other.y0 >= self.y0 && other.x1 <= self.x1 && other.y1 <= self.y1
    }

    /// Clamp the region to a `width` x `height` image.
    ///
    /// Returns `None` if the region is inverted or lies entirely outside.
    pub fn clamp_to(&self, width: u32, height: u32) -> Option<Region> {
        if !self.is_valid() || width == 0 || height == 0 {
            return None;
        }
        let x0 = self.x0.max(0);
        let y0 = self.y0.max(0);
        let x1 = self.x1.min(width as i32 - 1);
        let y1 = self.y1.min(height as i32 - 1);
        if x0 > x1 || y0 > y1 {
            return None;
        }
        Some(Region { x0, y0, x1, y1 })
    }

    /// Grow the region by `margin` on every side (may leave the image;
    /// follow with [`Region::clamp_to`]).
    pub fn expand(&self, margin: i32) -> Region {
        Region {
            x0: self.x0 - margin,
            y0: self.y0 - margin,
            x1: self.x1 + margin,
            y1: self.y1 + margin,
        }
    }

    /// Shrink the region by `margin` on every side.
    ///
    /// Returns `None` if nothing is left.
    pub fn shrink(&self, margin: i32) -> Option<Region> {
        let r = self.expand(-margin);
        r.is_valid().then_some(r)
    }

    /// Same horizontal span, rows `y0..=y1`
    pub fn with_rows(&self, y0: i32, y1: i32) -> Region {
        Region { y0, y1, ..*self }
    }

    /// Same vertical span, columns `x0..=x1`
    pub fn with_columns(&self, x0: i32, x1: i32) -> Region {
        Region { x0, x1, ..*self }
    }

    /// Smallest region containing both
    pub fn union(&self, other: &Region) -> Region {
        Region {
            x0: self.x0.min(other.x0),
            y0: self.y0.min(other.y0),
            x1: self.x1.max(other.x1),
            y1: self.y1.max(other.y1),
        }
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})-({}, {})", self.x0, self.y0, self.x1, self.y1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_creation() {
        let r = Region::new(10, 20, 19, 24).unwrap();
        assert_eq!(r.width(), 10);
        assert_eq!(r.height(), 5);
        assert_eq!(r.area(), 50);
        assert!(Region::new(5, 0, 4, 0).is_err());
        assert!(Region::new(0, 0, 0, 0).is_ok());
    }

    #[test]
    fn test_region_clamp() {
        let r = Region::new_unchecked(-5, -5, 200, 30);
        let c = r.clamp_to(100, 50).unwrap();
        assert_eq!(c, Region::new_unchecked(0, 0, 99, 30));

        let outside = Region::new_unchecked(120, 0, 130, 10);
        assert!(outside.clamp_to(100, 50).is_none());

        let inverted = Region::new_unchecked(10, 0, 5, 10);
        assert!(inverted.clamp_to(100, 50).is_none());
    }

    #[test]
    fn test_region_shrink_expand() {
        let r = Region::new_unchecked(10, 10, 19, 19);
        assert_eq!(r.shrink(2), Some(Region::new_unchecked(12, 12, 17, 17)));
        assert_eq!(r.shrink(5), None);
        assert_eq!(r.expand(1), Region::new_unchecked(9, 9, 20, 20));
    }

    #[test]
    fn test_region_contains() {
        let r = Region::full(10, 10);
        assert!(r.contains_point(0, 0));
        assert!(r.contains_point(9, 9));
        assert!(!r.contains_point(10, 9));
        assert!(r.contains_region(&Region::new_unchecked(2, 2, 9, 9)));
    }

    #[test]
    fn test_region_union() {
        let a = Region::new_unchecked(0, 0, 4, 4);
        let b = Region::new_unchecked(8, 2, 10, 12);
        assert_eq!(a.union(&b), Region::new_unchecked(0, 0, 10, 12));
    }
}
