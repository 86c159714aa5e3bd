//! Outline drawing
//!
//! Rectangle outlines are rendered through [`PixelSink`], so any
//! destination raster can receive annotations.

use crate::region::Region;
use crate::source::PixelSink;

/// RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// Create a new color
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const BLACK: Color = Color::new(0, 0, 0);
    pub const WHITE: Color = Color::new(255, 255, 255);
    pub const RED: Color = Color::new(255, 0, 0);
    pub const GREEN: Color = Color::new(0, 200, 0);
    pub const BLUE: Color = Color::new(0, 0, 255);
    pub const ORANGE: Color = Color::new(255, 128, 0);
}

/// Draw the outline of `region` with lines `width` pixels thick, growing
/// inward. Parts outside the sink are skipped.
pub fn render_region<S: PixelSink + ?Sized>(
    sink: &mut S,
    region: &Region,
    width: u32,
    color: Color,
) {
    let Some(r) = region.clamp_to(sink.width(), sink.height()) else {
        return;
    };
    let t = width.max(1) as i32;
    for k in 0..t {
        let Some(ring) = r.shrink(k) else {
            break;
        };
        for x in ring.x0..=ring.x1 {
            sink.put_rgb(x as u32, ring.y0 as u32, color.r, color.g, color.b);
            sink.put_rgb(x as u32, ring.y1 as u32, color.r, color.g, color.b);
        }
        for y in ring.y0..=ring.y1 {
            sink.put_rgb(ring.x0 as u32, y as u32, color.r, color.g, color.b);
            sink.put_rgb(ring.x1 as u32, y as u32, color.r, color.g, color.b);
        }
    }
}

/// Draw the outlines of all `regions`.
pub fn render_regions<'a, S, I>(sink: &mut S, regions: I, width: u32, color: Color)
where
    S: PixelSink + ?Sized,
    I: IntoIterator<Item = &'a Region>,
{
    for region in regions {
        render_region(sink, region, width, color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Pix, PixelDepth};

    #[test]
    fn test_render_region_outline_only() {
        let mut pm = Pix::new_filled(10, 10, PixelDepth::Bit32, 0xffffffff)
            .unwrap()
            .to_mut();
        render_region(&mut pm, &Region::new_unchecked(2, 2, 7, 7), 1, Color::RED);
        let pix: Pix = pm.into();
        assert_eq!(pix.get_rgb(2, 2), Some((255, 0, 0)));
        assert_eq!(pix.get_rgb(7, 4), Some((255, 0, 0)));
        assert_eq!(pix.get_rgb(4, 4), Some((255, 255, 255)));
        assert_eq!(pix.get_rgb(1, 1), Some((255, 255, 255)));
    }

    #[test]
    fn test_render_region_clipped() {
        let mut pm = Pix::new(5, 5, PixelDepth::Bit32).unwrap().to_mut();
        render_region(&mut pm, &Region::new_unchecked(-3, -3, 20, 20), 2, Color::BLUE);
        let pix: Pix = pm.into();
        assert_eq!(pix.get_rgb(0, 0), Some((0, 0, 255)));
        assert_eq!(pix.get_rgb(1, 1), Some((0, 0, 255)));
        assert_eq!(pix.get_rgb(2, 2), Some((0, 0, 0)));
    }
}
