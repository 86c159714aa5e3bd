//! Depth conversion
//!
//! Only the two conversions the pipeline needs: a grayscale view for
//! analysis and an RGB copy for annotation.

use super::access::sample_to_gray;
use super::{Pix, PixelDepth};
use crate::color;
use crate::error::Result;

impl Pix {
    /// Convert to 8 bpp grayscale.
    ///
    /// Returns a cheap clone if the image is already 8 bpp.
    pub fn convert_to_8(&self) -> Result<Pix> {
        if self.depth() == PixelDepth::Bit8 {
            return Ok(self.clone());
        }
        let depth = self.depth();
        let mut pm = Pix::new(self.width(), self.height(), PixelDepth::Bit8)?.to_mut();
        for (dst, &src) in pm.data_mut().iter_mut().zip(self.data()) {
            *dst = sample_to_gray(depth, src) as u32;
        }
        pm.set_informat(self.informat());
        Ok(pm.into())
    }

    /// Convert to a 32 bpp RGB copy.
    ///
    /// Always allocates new sample data, even for 32 bpp input, so the
    /// result can be drawn on without affecting `self`.
    pub fn convert_to_32(&self) -> Result<Pix> {
        let depth = self.depth();
        let mut pm = Pix::new(self.width(), self.height(), PixelDepth::Bit32)?.to_mut();
        for (dst, &src) in pm.data_mut().iter_mut().zip(self.data()) {
            *dst = match depth {
                PixelDepth::Bit32 => src,
                _ => {
                    let g = sample_to_gray(depth, src);
                    color::compose_rgb(g, g, g)
                }
            };
        }
        Ok(pm.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binary_to_gray() {
        let mut pm = Pix::new(4, 1, PixelDepth::Bit1).unwrap().to_mut();
        pm.set_pixel(1, 0, 1).unwrap();
        let gray = Pix::from(pm).convert_to_8().unwrap();
        assert_eq!(gray.depth(), PixelDepth::Bit8);
        assert_eq!(gray.row_data(0), &[255, 0, 255, 255]);
    }

    #[test]
    fn test_convert_to_32_is_independent_copy() {
        let gray = Pix::new_filled(3, 3, PixelDepth::Bit8, 90).unwrap();
        let rgb = gray.convert_to_32().unwrap();
        assert_eq!(rgb.get_rgb(2, 2), Some((90, 90, 90)));

        let rgb2 = rgb.convert_to_32().unwrap();
        let mut pm = rgb2.try_into_mut().unwrap();
        pm.set_rgb(0, 0, 255, 0, 0).unwrap();
        assert_eq!(rgb.get_rgb(0, 0), Some((90, 90, 90)));
    }
}
