//! Ink bounding boxes
//!
//! Loose boxes from profile runs include blank margins on the cross axis.
//! [`find_ink_box`] tightens a box to the pixels that actually carry ink.

use puzzleseg_core::{PixelSource, Region};

/// Smallest region inside `region` containing every pixel with gray level
/// below `black_threshold`.
///
/// Returns `None` if the clamped region holds no ink.
///
/// # Example
/// ```
/// use puzzleseg_core::{Pix, PixelDepth, Region};
/// use puzzleseg_segment::refine::find_ink_box;
///
/// let mut pm = Pix::new_filled(10, 10, PixelDepth::Bit8, 255).unwrap().to_mut();
/// pm.set_pixel(4, 6, 0).unwrap();
/// let pix: Pix = pm.into();
/// assert_eq!(find_ink_box(&pix, &Region::full(10, 10), 128), Some(Region::new_unchecked(4, 6, 4, 6)));
/// ```
pub fn find_ink_box<S: PixelSource + ?Sized>(
    src: &S,
    region: &Region,
    black_threshold: u8,
) -> Option<Region> {
    let r = region.clamp_to(src.width(), src.height())?;
    let mut bounds: Option<Region> = None;
    for y in r.y0..=r.y1 {
        for x in r.x0..=r.x1 {
            if src.get_gray(x as u32, y as u32) >= black_threshold {
                continue;
            }
            bounds = Some(match bounds {
                None => Region::new_unchecked(x, y, x, y),
                Some(b) => Region::new_unchecked(b.x0.min(x), b.y0, b.x1.max(x), y),
            });
        }
    }
    bounds
}

/// [`find_ink_box`], or `region` unchanged when it holds no ink.
pub fn refine_or_keep<S: PixelSource + ?Sized>(
    src: &S,
    region: &Region,
    black_threshold: u8,
) -> Region {
    find_ink_box(src, region, black_threshold).unwrap_or(*region)
}
