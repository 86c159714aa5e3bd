//! PIX - The raster container
//!
//! `Pix` holds one sample per pixel in a `Vec<u32>`:
//!
//! - 1 bpp: `1` is ink (black), `0` is background
//! - 8 bpp: grayscale, `0` black to `255` white
//! - 32 bpp: `0xRRGGBBAA`
//!
//! # Ownership model
//!
//! `Pix` uses `Arc` for cheap cloning (shared ownership). To modify pixel
//! data, convert to `PixMut` via [`Pix::try_into_mut`] or [`Pix::to_mut`],
//! then convert back with `Into<Pix>`. The segmentation engine only ever
//! sees `&Pix`, so annotations can never leak into the analysis.

pub(crate) mod access;
mod clip;
mod convert;
pub mod graphics;

pub use graphics::Color;

use crate::error::{Error, Result};
use std::sync::Arc;

/// Sample depths a page raster can have
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum PixelDepth {
    /// 1-bit binarized image
    Bit1 = 1,
    /// 8-bit grayscale
    Bit8 = 8,
    /// 32-bit RGB
    Bit32 = 32,
}

impl PixelDepth {
    /// Depth for a decoder's bit count; only 1, 8 and 32 are accepted.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedDepth`] if `bits` is not 1, 8, or 32.
    pub fn from_bits(bits: u32) -> Result<Self> {
        match bits {
            1 => Ok(PixelDepth::Bit1),
            8 => Ok(PixelDepth::Bit8),
            32 => Ok(PixelDepth::Bit32),
            _ => Err(Error::UnsupportedDepth(bits)),
        }
    }

    /// Bits per sample
    pub fn bits(self) -> u32 {
        self as u32
    }

    /// Get the maximum sample value representable at this depth.
    pub fn max_value(self) -> u32 {
        match self {
            PixelDepth::Bit32 => u32::MAX,
            _ => (1u32 << self.bits()) - 1,
        }
    }
}

/// Image file format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ImageFormat {
    /// Unknown format
    #[default]
    Unknown,
    /// PNG format
    Png,
    /// JFIF JPEG format
    Jpeg,
}

impl ImageFormat {
    /// Extension used when writing crops in this format
    pub fn extension(self) -> &'static str {
        match self {
            Self::Unknown => "dat",
            Self::Png => "png",
            Self::Jpeg => "jpg",
        }
    }
}

#[derive(Debug)]
struct PixData {
    width: u32,
    height: u32,
    depth: PixelDepth,
    /// Format the image was decoded from
    informat: ImageFormat,
    /// One sample per pixel, row-major
    data: Vec<u32>,
}

/// PIX - Raster container
///
/// # Examples
///
/// ```
/// use puzzleseg_core::{Pix, PixelDepth};
///
/// let pix = Pix::new(400, 300, PixelDepth::Bit8).unwrap();
/// assert_eq!((pix.width(), pix.height()), (400, 300));
/// ```
#[derive(Debug, Clone)]
pub struct Pix {
    inner: Arc<PixData>,
}

impl Pix {
    /// Create a new PIX with all samples set to zero.
    ///
    /// Note that a zeroed 8 bpp image is black; use [`Pix::new_filled`]
    /// for a white page.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0.
    pub fn new(width: u32, height: u32, depth: PixelDepth) -> Result<Self> {
        Self::new_filled(width, height, depth, 0)
    }

    /// Create a new PIX with every sample set to `val`.
    pub fn new_filled(width: u32, height: u32, depth: PixelDepth, val: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        let size = width as usize * height as usize;
        Ok(Pix {
            inner: Arc::new(PixData {
                width,
                height,
                depth,
                informat: ImageFormat::Unknown,
                data: vec![val & depth.max_value(); size],
            }),
        })
    }

    /// Create an 8 bpp PIX from row-major gray bytes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BufferLength`] if `bytes.len() != width * height`.
    pub fn from_gray_bytes(width: u32, height: u32, bytes: &[u8]) -> Result<Self> {
        let expected = width as usize * height as usize;
        if bytes.len() != expected {
            return Err(Error::BufferLength {
                expected,
                actual: bytes.len(),
            });
        }
        let mut pm = Self::new(width, height, PixelDepth::Bit8)?.to_mut();
        for (dst, &src) in pm.data_mut().iter_mut().zip(bytes) {
            *dst = src as u32;
        }
        Ok(pm.into())
    }

    /// Page width in pixels
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Page height in pixels
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Get the pixel depth.
    #[inline]
    pub fn depth(&self) -> PixelDepth {
        self.inner.depth
    }

    /// Format the page was decoded from
    #[inline]
    pub fn informat(&self) -> ImageFormat {
        self.inner.informat
    }

    /// Get raw access to the samples.
    #[inline]
    pub fn data(&self) -> &[u32] {
        &self.inner.data
    }

    /// Get the samples of row `y`.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row_data(&self, y: u32) -> &[u32] {
        let w = self.inner.width as usize;
        let start = y as usize * w;
        &self.inner.data[start..start + w]
    }

    /// Check if two images have the same width and height.
    pub fn sizes_equal(&self, other: &Pix) -> bool {
        self.width() == other.width() && self.height() == other.height()
    }

    /// Create a deep copy that does not share data.
    pub fn deep_clone(&self) -> Self {
        Pix {
            inner: Arc::new(PixData {
                width: self.inner.width,
                height: self.inner.height,
                depth: self.inner.depth,
                informat: self.inner.informat,
                data: self.inner.data.clone(),
            }),
        }
    }

    /// Try to take exclusive ownership for mutation.
    ///
    /// Fails (returning `self`) if the data is shared.
    pub fn try_into_mut(self) -> std::result::Result<PixMut, Self> {
        match Arc::try_unwrap(self.inner) {
            Ok(inner) => Ok(PixMut { inner }),
            Err(inner) => Err(Pix { inner }),
        }
    }

    /// Get a mutable copy, cloning the data only if it is shared.
    pub fn to_mut(&self) -> PixMut {
        match self.clone().try_into_mut() {
            Ok(pm) => pm,
            Err(shared) => PixMut {
                inner: PixData {
                    width: shared.inner.width,
                    height: shared.inner.height,
                    depth: shared.inner.depth,
                    informat: shared.inner.informat,
                    data: shared.inner.data.clone(),
                },
            },
        }
    }
}

/// Mutable PIX
#[derive(Debug)]
pub struct PixMut {
    inner: PixData,
}

impl PixMut {
    /// Page width in pixels
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Page height in pixels
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Get the pixel depth.
    #[inline]
    pub fn depth(&self) -> PixelDepth {
        self.inner.depth
    }

    /// Set the input file format.
    pub fn set_informat(&mut self, format: ImageFormat) {
        self.inner.informat = format;
    }

    /// Get raw access to the samples.
    #[inline]
    pub fn data(&self) -> &[u32] {
        &self.inner.data
    }

    /// Get mutable access to the samples.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [u32] {
        &mut self.inner.data
    }
}

impl From<PixMut> for Pix {
    fn from(pm: PixMut) -> Self {
        Pix {
            inner: Arc::new(pm.inner),
        }
    }
}
