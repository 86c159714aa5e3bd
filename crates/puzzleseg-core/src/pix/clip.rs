//! Rectangular crops

use super::Pix;
use crate::error::{Error, Result};
use crate::region::Region;

impl Pix {
    /// Copy the pixels inside `region` into a new image of the same depth.
    ///
    /// The region is clamped to the image first.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DegenerateRegion`] if nothing of the region lies
    /// inside the image.
    ///
    /// # Examples
    ///
    /// ```
    /// use puzzleseg_core::{Pix, PixelDepth, Region};
    ///
    /// let pix = Pix::new(100, 80, PixelDepth::Bit8).unwrap();
    /// let crop = pix.clip_region(&Region::new_unchecked(90, 70, 120, 90)).unwrap();
    /// assert_eq!(crop.width(), 10);
    /// assert_eq!(crop.height(), 10);
    /// ```
    pub fn clip_region(&self, region: &Region) -> Result<Pix> {
        let r = region
            .clamp_to(self.width(), self.height())
            .ok_or(Error::DegenerateRegion {
                x0: region.x0,
                y0: region.y0,
                x1: region.x1,
                y1: region.y1,
            })?;

        let w = r.width() as u32;
        let h = r.height() as u32;
        let mut pm = Pix::new(w, h, self.depth())?.to_mut();
        pm.set_informat(self.informat());
        for dy in 0..h {
            let src = &self.row_data(r.y0 as u32 + dy)[r.x0 as usize..=r.x1 as usize];
            let start = (dy * w) as usize;
            pm.data_mut()[start..start + w as usize].copy_from_slice(src);
        }
        Ok(pm.into())
    }
}
