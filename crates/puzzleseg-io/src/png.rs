//! PNG image format support
//!
//! Decoding normalizes every PNG flavour (palette, 1/2/4/16-bit) to 8-bit
//! samples: gray images become 8 bpp `Pix`, color images 32 bpp.

use crate::{IoError, IoResult};
use puzzleseg_core::{ImageFormat, Pix, PixelDepth, color};
use png::{BitDepth, ColorType, Decoder, Encoder, Transformations};
use std::io::{BufRead, Seek, Write};

/// Read a PNG image
pub fn read_png<R: BufRead + Seek>(reader: R) -> IoResult<Pix> {
    let mut decoder = Decoder::new(reader);
    decoder.set_transformations(Transformations::normalize_to_color8());
    let mut reader = decoder
        .read_info()
        .map_err(|e| IoError::DecodeError(format!("PNG decode error: {}", e)))?;

    let buf_size = reader
        .output_buffer_size()
        .ok_or_else(|| IoError::DecodeError("failed to get output buffer size".to_string()))?;
    let mut buf = vec![0; buf_size];
    let output_info = reader
        .next_frame(&mut buf)
        .map_err(|e| IoError::DecodeError(format!("PNG frame error: {}", e)))?;

    let width = output_info.width;
    let height = output_info.height;
    let (color_type, _) = reader.output_color_type();
    let channels = match color_type {
        ColorType::Grayscale => 1,
        ColorType::GrayscaleAlpha => 2,
        ColorType::Rgb => 3,
        ColorType::Rgba => 4,
        ColorType::Indexed => {
            return Err(IoError::UnsupportedFormat(
                "palette was not expanded".to_string(),
            ));
        }
    };
    let depth = if channels <= 2 {
        PixelDepth::Bit8
    } else {
        PixelDepth::Bit32
    };

    let bytes_per_row = output_info.line_size;
    let data = &buf[..output_info.buffer_size()];

    let mut pix_mut = Pix::new(width, height, depth)?.to_mut();
    pix_mut.set_informat(ImageFormat::Png);
    for y in 0..height {
        let row = &data[y as usize * bytes_per_row..][..width as usize * channels];
        for (x, px) in row.chunks_exact(channels).enumerate() {
            let val = match channels {
                1 | 2 => px[0] as u32,
                _ => color::compose_rgb(px[0], px[1], px[2]),
            };
            pix_mut.set_pixel_unchecked(x as u32, y, val);
        }
    }

    Ok(pix_mut.into())
}

/// Write a PNG image
///
/// 1 and 8 bpp images are written as 8-bit grayscale (1 bpp ink becomes
/// black), 32 bpp images as 8-bit RGB.
pub fn write_png<W: Write>(pix: &Pix, writer: W) -> IoResult<()> {
    let width = pix.width();
    let height = pix.height();

    let (color_type, channels) = match pix.depth() {
        PixelDepth::Bit1 | PixelDepth::Bit8 => (ColorType::Grayscale, 1usize),
        PixelDepth::Bit32 => (ColorType::Rgb, 3usize),
    };

    let mut encoder = Encoder::new(writer, width, height);
    encoder.set_color(color_type);
    encoder.set_depth(BitDepth::Eight);

    let mut writer = encoder
        .write_header()
        .map_err(|e| IoError::EncodeError(format!("PNG header error: {}", e)))?;

    let mut data = Vec::with_capacity(width as usize * height as usize * channels);
    for &val in pix.data() {
        match pix.depth() {
            PixelDepth::Bit1 => data.push(if val != 0 { 0 } else { 255 }),
            PixelDepth::Bit8 => data.push(val as u8),
            PixelDepth::Bit32 => {
                let (r, g, b) = color::extract_rgb(val);
                data.extend_from_slice(&[r, g, b]);
            }
        }
    }

    writer
        .write_image_data(&data)
        .map_err(|e| IoError::EncodeError(format!("PNG write error: {}", e)))?;
    writer
        .finish()
        .map_err(|e| IoError::EncodeError(format!("PNG finish error: {}", e)))?;
    Ok(())
}
