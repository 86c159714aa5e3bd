//! puzzleseg-core - Basic data structures for puzzle page segmentation
//!
//! This crate provides the types shared by every segmentation stage:
//!
//! - [`Pix`] / [`PixMut`] - Raster container (immutable / mutable)
//! - [`PixelSource`] / [`PixelSink`] - Read and draw capabilities over a raster
//! - [`Region`] - Inclusive pixel rectangle
//! - [`Profile`] - Per-row or per-column ink ratio sequence
//! - [`Interval`] / [`WordBand`] - Runs along one axis
//! - [`LetterBox`] - A located letter or grid cell
//!
//! Segmentation only ever borrows a [`PixelSource`]; drawing happens on a
//! separate [`PixMut`] obtained from [`Pix::convert_to_32`].

pub mod error;
pub mod letter;
pub mod pix;
pub mod profile;
pub mod region;
pub mod source;

pub use error::{Error, Result};
pub use letter::{BoxPosition, Interval, LetterBox, WordBand};
pub use pix::graphics::{render_region, render_regions};
pub use pix::{Color, ImageFormat, Pix, PixMut, PixelDepth};
pub use profile::{Axis, Profile};
pub use region::Region;
pub use source::{PixelSink, PixelSource};

/// Helpers for 32-bit `0xRRGGBBAA` pixels.
pub mod color {
    pub const RED_SHIFT: u32 = 24;
    pub const GREEN_SHIFT: u32 = 16;
    pub const BLUE_SHIFT: u32 = 8;

    /// Compose a 32-bit RGB pixel (alpha = 255).
    #[inline]
    pub fn compose_rgb(r: u8, g: u8, b: u8) -> u32 {
        ((r as u32) << RED_SHIFT) | ((g as u32) << GREEN_SHIFT) | ((b as u32) << BLUE_SHIFT) | 0xff
    }

    /// Extract RGB values from a 32-bit pixel.
    #[inline]
    pub fn extract_rgb(pixel: u32) -> (u8, u8, u8) {
        (
            ((pixel >> RED_SHIFT) & 0xff) as u8,
            ((pixel >> GREEN_SHIFT) & 0xff) as u8,
            ((pixel >> BLUE_SHIFT) & 0xff) as u8,
        )
    }

    /// Luminance of an RGB triple using integer Rec. 601 weights.
    #[inline]
    pub fn luminance(r: u8, g: u8, b: u8) -> u8 {
        ((299 * r as u32 + 587 * g as u32 + 114 * b as u32 + 500) / 1000) as u8
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_compose_extract() {
            let p = compose_rgb(10, 20, 30);
            assert_eq!(extract_rgb(p), (10, 20, 30));
            assert_eq!(p & 0xff, 0xff);
        }

        #[test]
        fn test_luminance_extremes() {
            assert_eq!(luminance(0, 0, 0), 0);
            assert_eq!(luminance(255, 255, 255), 255);
            assert_eq!(luminance(128, 128, 128), 128);
        }
    }
}
