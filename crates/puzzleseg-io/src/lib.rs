//! puzzleseg-io - Image loading and writing
//!
//! The segmentation engine never decodes files itself; this crate is the
//! loader and exporter boundary. Supported formats are PNG
//! (`png-format` feature) and JPEG (`jpeg` feature), both on by default.

mod error;
pub mod format;
#[cfg(feature = "jpeg")]
pub mod jpeg;
#[cfg(feature = "png-format")]
pub mod png;

pub use error::{IoError, IoResult};
pub use format::{detect_format, detect_format_from_bytes, format_from_extension};
pub use puzzleseg_core::ImageFormat;

use puzzleseg_core::Pix;
use std::fs::File;
use std::io::{BufWriter, Cursor, Write};
use std::path::Path;

/// Read an image file, detecting the format from its header.
pub fn read_image<P: AsRef<Path>>(path: P) -> IoResult<Pix> {
    let data = std::fs::read(path)?;
    read_image_mem(&data)
}

/// Decode an in-memory image, detecting the format from its header.
pub fn read_image_mem(data: &[u8]) -> IoResult<Pix> {
    match detect_format_from_bytes(data)? {
        #[cfg(feature = "png-format")]
        ImageFormat::Png => png::read_png(Cursor::new(data)),
        #[cfg(feature = "jpeg")]
        ImageFormat::Jpeg => jpeg::read_jpeg(Cursor::new(data)),
        other => Err(IoError::UnsupportedFormat(format!(
            "{:?} support not enabled",
            other
        ))),
    }
}

/// Write an image file in `format`.
///
/// `ImageFormat::Unknown` picks the format from the path's extension and
/// falls back to PNG.
pub fn write_image<P: AsRef<Path>>(pix: &Pix, path: P, format: ImageFormat) -> IoResult<()> {
    let format = match format {
        ImageFormat::Unknown => match format_from_extension(&path) {
            ImageFormat::Unknown => ImageFormat::Png,
            f => f,
        },
        f => f,
    };
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_image_to(pix, &mut writer, format)?;
    writer.flush()?;
    Ok(())
}

/// Encode an image into any writer.
pub fn write_image_to<W: Write>(pix: &Pix, writer: W, format: ImageFormat) -> IoResult<()> {
    match format {
        #[cfg(feature = "png-format")]
        ImageFormat::Png => png::write_png(pix, writer),
        #[cfg(feature = "jpeg")]
        ImageFormat::Jpeg => jpeg::write_jpeg(pix, writer, jpeg::DEFAULT_QUALITY),
        other => Err(IoError::UnsupportedFormat(format!(
            "cannot write {:?}",
            other
        ))),
    }
}
