//! Pixel capability traits
//!
//! Every segmentation stage reads through [`PixelSource`] and every
//! annotation writes through [`PixelSink`]. One implementation exists per
//! raster representation; callers with their own buffers implement the
//! traits instead of converting into a [`Pix`].

use crate::pix::access::sample_to_gray;
use crate::pix::{Pix, PixMut, PixelDepth};
use crate::{Region, color};

/// Read-only grayscale access to a rectangular raster.
pub trait PixelSource {
    fn width(&self) -> u32;

    fn height(&self) -> u32;

    /// Gray level at `(x, y)`, 0 (black) to 255 (white).
    ///
    /// Callers guarantee `x < width()` and `y < height()`.
    fn get_gray(&self, x: u32, y: u32) -> u8;

    /// The region covering the whole raster
    fn bounds(&self) -> Region {
        Region::full(self.width(), self.height())
    }
}

/// RGB write access to a destination raster.
pub trait PixelSink {
    fn width(&self) -> u32;

    fn height(&self) -> u32;

    /// Write `(r, g, b)` at `(x, y)`; out-of-range coordinates are ignored.
    fn put_rgb(&mut self, x: u32, y: u32, r: u8, g: u8, b: u8);
}

impl PixelSource for Pix {
    fn width(&self) -> u32 {
        Pix::width(self)
    }

    fn height(&self) -> u32 {
        Pix::height(self)
    }

    #[inline]
    fn get_gray(&self, x: u32, y: u32) -> u8 {
        sample_to_gray(self.depth(), self.get_pixel_unchecked(x, y))
    }
}

impl PixelSource for PixMut {
    fn width(&self) -> u32 {
        PixMut::width(self)
    }

    fn height(&self) -> u32 {
        PixMut::height(self)
    }

    #[inline]
    fn get_gray(&self, x: u32, y: u32) -> u8 {
        sample_to_gray(self.depth(), self.get_pixel_unchecked(x, y))
    }
}

impl PixelSink for PixMut {
    fn width(&self) -> u32 {
        PixMut::width(self)
    }

    fn height(&self) -> u32 {
        PixMut::height(self)
    }

    fn put_rgb(&mut self, x: u32, y: u32, r: u8, g: u8, b: u8) {
        if x >= PixMut::width(self) || y >= PixMut::height(self) {
            return;
        }
        let val = match self.depth() {
            PixelDepth::Bit32 => color::compose_rgb(r, g, b),
            PixelDepth::Bit8 => color::luminance(r, g, b) as u32,
            PixelDepth::Bit1 => (color::luminance(r, g, b) < 128) as u32,
        };
        self.set_pixel_unchecked(x, y, val);
    }
}
