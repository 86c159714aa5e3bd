//! Pixel access functions
//!
//! Samples are stored unpacked, one `u32` per pixel, so access is a plain
//! index computation. Gray conversion for each depth lives in
//! [`sample_to_gray`] and backs the [`PixelSource`](crate::PixelSource)
//! implementations.

use super::{Pix, PixMut, PixelDepth};
use crate::color;
use crate::error::{Error, Result};

/// Convert a raw sample to an 8-bit gray level.
///
/// 1 bpp ink maps to 0 and background to 255; 32 bpp uses luminance.
#[inline]
pub fn sample_to_gray(depth: PixelDepth, val: u32) -> u8 {
    match depth {
        PixelDepth::Bit1 => {
            if val != 0 {
                0
            } else {
                255
            }
        }
        PixelDepth::Bit8 => val as u8,
        PixelDepth::Bit32 => {
            let (r, g, b) = color::extract_rgb(val);
            color::luminance(r, g, b)
        }
    }
}

impl Pix {
    /// Get a pixel value at (x, y).
    ///
    /// Returns `None` if coordinates are out of bounds.
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<u32> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        Some(self.get_pixel_unchecked(x, y))
    }

    /// Get a pixel value without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if the index falls outside the sample buffer.
    #[inline]
    pub fn get_pixel_unchecked(&self, x: u32, y: u32) -> u32 {
        self.data()[y as usize * self.width() as usize + x as usize]
    }

    /// Get RGB values at (x, y). Only valid for 32-bit images.
    pub fn get_rgb(&self, x: u32, y: u32) -> Option<(u8, u8, u8)> {
        if self.depth() != PixelDepth::Bit32 {
            return None;
        }
        self.get_pixel(x, y).map(color::extract_rgb)
    }
}

impl PixMut {
    /// Get a pixel value at (x, y).
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<u32> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        Some(self.get_pixel_unchecked(x, y))
    }

    /// Get a pixel value without bounds checking.
    #[inline]
    pub fn get_pixel_unchecked(&self, x: u32, y: u32) -> u32 {
        self.data()[y as usize * self.width() as usize + x as usize]
    }

    /// Set a pixel value at (x, y).
    ///
    /// The value is masked to the image depth.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if coordinates are out of bounds.
    pub fn set_pixel(&mut self, x: u32, y: u32, val: u32) -> Result<()> {
        if x >= self.width() || y >= self.height() {
            return Err(Error::IndexOutOfBounds {
                x,
                y,
                width: self.width(),
                height: self.height(),
            });
        }
        self.set_pixel_unchecked(x, y, val);
        Ok(())
    }

    /// Set a pixel value without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if the index falls outside the sample buffer.
    #[inline]
    pub fn set_pixel_unchecked(&mut self, x: u32, y: u32, val: u32) {
        let idx = y as usize * self.width() as usize + x as usize;
        let max = self.depth().max_value();
        self.data_mut()[idx] = val & max;
    }

    /// Set an RGB pixel at (x, y). Only valid for 32-bit images.
    pub fn set_rgb(&mut self, x: u32, y: u32, r: u8, g: u8, b: u8) -> Result<()> {
        if self.depth() != PixelDepth::Bit32 {
            return Err(Error::UnsupportedDepth(self.depth().bits()));
        }
        self.set_pixel(x, y, color::compose_rgb(r, g, b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_set_roundtrip_gray() {
        let mut pm = Pix::new(10, 10, PixelDepth::Bit8).unwrap().to_mut();
        pm.set_pixel(3, 4, 200).unwrap();
        let pix: Pix = pm.into();
        assert_eq!(pix.get_pixel(3, 4), Some(200));
        assert_eq!(pix.get_pixel(10, 0), None);
    }

    #[test]
    fn test_set_pixel_out_of_bounds() {
        let mut pm = Pix::new(5, 5, PixelDepth::Bit8).unwrap().to_mut();
        assert!(matches!(
            pm.set_pixel(5, 0, 1),
            Err(Error::IndexOutOfBounds { x: 5, .. })
        ));
    }

    #[test]
    fn test_set_rgb_requires_32bpp() {
        let mut pm = Pix::new(2, 2, PixelDepth::Bit8).unwrap().to_mut();
        assert!(pm.set_rgb(0, 0, 1, 2, 3).is_err());
        let mut pm = Pix::new(2, 2, PixelDepth::Bit32).unwrap().to_mut();
        pm.set_rgb(1, 1, 1, 2, 3).unwrap();
        let pix: Pix = pm.into();
        assert_eq!(pix.get_rgb(1, 1), Some((1, 2, 3)));
    }

    #[test]
    fn test_sample_to_gray() {
        assert_eq!(sample_to_gray(PixelDepth::Bit1, 1), 0);
        assert_eq!(sample_to_gray(PixelDepth::Bit1, 0), 255);
        assert_eq!(sample_to_gray(PixelDepth::Bit8, 77), 77);
        assert_eq!(
            sample_to_gray(PixelDepth::Bit32, color::compose_rgb(255, 255, 255)),
            255
        );
    }
}
