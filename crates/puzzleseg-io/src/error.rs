//! Errors at the image file boundary

use thiserror::Error;

/// Why a page could not be loaded or a crop could not be written
#[derive(Error, Debug)]
pub enum IoError {
    #[error("file access failed: {0}")]
    Io(#[from] std::io::Error),

    /// Recognized but not compiled in, or not an image at all
    #[error("format not handled: {0}")]
    UnsupportedFormat(String),

    /// Header or sample layout that cannot become a `Pix`
    #[error("bad image data: {0}")]
    InvalidData(String),

    /// Message from the png or jpeg-decoder crate
    #[error("cannot decode page: {0}")]
    DecodeError(String),

    /// Message from the png or jpeg-encoder crate
    #[error("cannot encode image: {0}")]
    EncodeError(String),

    #[error(transparent)]
    Core(#[from] puzzleseg_core::Error),
}

pub type IoResult<T> = Result<T, IoError>;
