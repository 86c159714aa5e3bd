//! JPEG image format support
//!
//! Decoding uses `jpeg-decoder`, encoding `jpeg-encoder`. Gray JPEGs map
//! to 8 bpp, color JPEGs to 32 bpp.

use crate::{IoError, IoResult};
use puzzleseg_core::{ImageFormat, Pix, PixelDepth, color};
use std::io::{Read, Write};

/// Default quality for [`write_jpeg`]
pub const DEFAULT_QUALITY: u8 = 90;

/// Read a JPEG image from a reader.
pub fn read_jpeg<R: Read>(reader: R) -> IoResult<Pix> {
    let mut decoder = jpeg_decoder::Decoder::new(reader);
    let pixels = decoder
        .decode()
        .map_err(|e| IoError::DecodeError(format!("JPEG decode error: {}", e)))?;
    let info = decoder
        .info()
        .ok_or_else(|| IoError::DecodeError("JPEG header missing".to_string()))?;

    let width = info.width as u32;
    let height = info.height as u32;

    let (depth, channels) = match info.pixel_format {
        jpeg_decoder::PixelFormat::L8 => (PixelDepth::Bit8, 1usize),
        jpeg_decoder::PixelFormat::L16 => (PixelDepth::Bit8, 2usize),
        jpeg_decoder::PixelFormat::RGB24 => (PixelDepth::Bit32, 3usize),
        jpeg_decoder::PixelFormat::CMYK32 => {
            return Err(IoError::UnsupportedFormat("CMYK JPEG".to_string()));
        }
    };

    let expected = width as usize * height as usize * channels;
    if pixels.len() < expected {
        return Err(IoError::InvalidData(format!(
            "JPEG data too short: {} < {}",
            pixels.len(),
            expected
        )));
    }

    let mut pm = Pix::new(width, height, depth)?.to_mut();
    pm.set_informat(ImageFormat::Jpeg);
    for (dst, px) in pm.data_mut().iter_mut().zip(pixels.chunks_exact(channels)) {
        *dst = match channels {
            1 => px[0] as u32,
            // L16 is big-endian; keep the high byte
            2 => px[0] as u32,
            _ => color::compose_rgb(px[0], px[1], px[2]),
        };
    }
    Ok(pm.into())
}

/// Write a `Pix` as JPEG with the given quality (1-100).
pub fn write_jpeg<W: Write>(pix: &Pix, writer: W, quality: u8) -> IoResult<()> {
    let (w, h) = (pix.width(), pix.height());
    if w > u16::MAX as u32 || h > u16::MAX as u32 {
        return Err(IoError::InvalidData(format!(
            "{}x{} exceeds JPEG size limit",
            w, h
        )));
    }

    let (data, color_type) = match pix.depth() {
        PixelDepth::Bit1 => (
            pix.data()
                .iter()
                .map(|&v| if v != 0 { 0u8 } else { 255u8 })
                .collect::<Vec<u8>>(),
            jpeg_encoder::ColorType::Luma,
        ),
        PixelDepth::Bit8 => (
            pix.data().iter().map(|&v| v as u8).collect(),
            jpeg_encoder::ColorType::Luma,
        ),
        PixelDepth::Bit32 => (
            pix.data()
                .iter()
                .flat_map(|&v| {
                    let (r, g, b) = color::extract_rgb(v);
                    [r, g, b]
                })
                .collect(),
            jpeg_encoder::ColorType::Rgb,
        ),
    };

    let encoder = jpeg_encoder::Encoder::new(writer, quality.clamp(1, 100));
    encoder
        .encode(&data, w as u16, h as u16, color_type)
        .map_err(|e| IoError::EncodeError(format!("JPEG encode error: {}", e)))
}
