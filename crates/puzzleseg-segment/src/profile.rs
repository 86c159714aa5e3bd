//! Ink ratio profiles
//!
//! [`ink_profile`] is the projection every later stage is built on: for
//! each row (or column) of a region, the fraction of pixels darker than the
//! black threshold. [`smooth_profile`] stabilizes a profile before coarse
//! thresholding; the per-letter scans use raw profiles so letter edges
//! stay sharp.

use log::{debug, warn};
use puzzleseg_core::{Axis, PixelSource, Profile, Region};

/// Compute the ink ratio of every row or column of `region`.
///
/// A pixel counts as ink when its gray level is strictly below
/// `black_threshold`. The region is clamped to the image first; if nothing
/// is left, or the buffer cannot be allocated, an empty profile is
/// returned and the caller treats the stage as "nothing detected".
///
/// # Example
/// ```
/// use puzzleseg_core::{Axis, Pix, PixelDepth, Region};
/// use puzzleseg_segment::profile::ink_profile;
///
/// let pix = Pix::new_filled(20, 10, PixelDepth::Bit8, 255).unwrap();
/// let p = ink_profile(&pix, &Region::full(20, 10), 128, Axis::Columns);
/// assert_eq!(p.len(), 20);
/// assert!(p.values().iter().all(|&v| v == 0.0));
/// ```
pub fn ink_profile<S: PixelSource + ?Sized>(
    src: &S,
    region: &Region,
    black_threshold: u8,
    axis: Axis,
) -> Profile {
    let Some(r) = region.clamp_to(src.width(), src.height()) else {
        debug!("ink_profile: degenerate region {region}, nothing to scan");
        return Profile::empty();
    };

    let (len, origin) = match axis {
        Axis::Rows => (r.height() as usize, r.y0 as u32),
        Axis::Columns => (r.width() as usize, r.x0 as u32),
    };

    let mut values = Vec::new();
    if values.try_reserve_exact(len).is_err() {
        warn!("ink_profile: cannot allocate {len} samples");
        return Profile::empty();
    }

    let is_ink = |x: i32, y: i32| src.get_gray(x as u32, y as u32) < black_threshold;
    match axis {
        Axis::Rows => {
            let across = r.width() as f64;
            for y in r.y0..=r.y1 {
                let count = (r.x0..=r.x1).filter(|&x| is_ink(x, y)).count();
                values.push(count as f64 / across);
            }
        }
        Axis::Columns => {
            let across = r.height() as f64;
            for x in r.x0..=r.x1 {
                let count = (r.y0..=r.y1).filter(|&y| is_ink(x, y)).count();
                values.push(count as f64 / across);
            }
        }
    }

    Profile::new(axis, origin, values)
}

/// Centered moving average with a `window`-sample window.
///
/// Even windows grow to the next odd size; boundary windows average only
/// in-range samples. See [`Profile::moving_average`].
pub fn smooth_profile(profile: &Profile, window: usize) -> Profile {
    profile.moving_average(window)
}

#[cfg(test)]
mod tests {
    use super::*;
    use puzzleseg_core::{Pix, PixelDepth};

    fn page_with_block(w: u32, h: u32, block: Region) -> Pix {
        let mut pm = Pix::new_filled(w, h, PixelDepth::Bit8, 255).unwrap().to_mut();
        for y in block.y0..=block.y1 {
            for x in block.x0..=block.x1 {
                pm.set_pixel(x as u32, y as u32, 0).unwrap();
            }
        }
        pm.into()
    }

    #[test]
    fn test_column_ratios() {
        // 10 rows tall, block covers rows 0..=4 of columns 2..=3
        let pix = page_with_block(6, 10, Region::new_unchecked(2, 0, 3, 4));
        let p = ink_profile(&pix, &Region::full(6, 10), 128, Axis::Columns);
        assert_eq!(p.values(), &[0.0, 0.0, 0.5, 0.5, 0.0, 0.0]);
        assert_eq!(p.origin(), 0);
    }

    #[test]
    fn test_row_ratios_in_subregion() {
        let pix = page_with_block(10, 10, Region::new_unchecked(4, 5, 5, 6));
        let sub = Region::new_unchecked(4, 4, 7, 7);
        let p = ink_profile(&pix, &sub, 128, Axis::Rows);
        assert_eq!(p.origin(), 4);
        assert_eq!(p.values(), &[0.0, 0.5, 0.5, 0.0]);
    }

    #[test]
    fn test_threshold_is_strict() {
        let pix = Pix::new_filled(4, 4, PixelDepth::Bit8, 100).unwrap();
        let full = Region::full(4, 4);
        assert!(ink_profile(&pix, &full, 100, Axis::Rows).values().iter().all(|&v| v == 0.0));
        assert!(ink_profile(&pix, &full, 101, Axis::Rows).values().iter().all(|&v| v == 1.0));
    }

    #[test]
    fn test_degenerate_region_is_empty() {
        let pix = Pix::new(10, 10, PixelDepth::Bit8).unwrap();
        let outside = Region::new_unchecked(20, 20, 30, 30);
        assert!(ink_profile(&pix, &outside, 128, Axis::Rows).is_empty());
        let inverted = Region::new_unchecked(5, 5, 2, 2);
        assert!(ink_profile(&pix, &inverted, 128, Axis::Columns).is_empty());
    }

    #[test]
    fn test_values_stay_in_unit_range() {
        let pix = page_with_block(30, 20, Region::new_unchecked(0, 0, 29, 19));
        let p = ink_profile(&pix, &Region::new_unchecked(-5, -5, 40, 40), 128, Axis::Columns);
        assert_eq!(p.len(), 30);
        assert!(p.values().iter().all(|&v| (0.0..=1.0).contains(&v)));
    }
}
