//! Failures of the harness itself, as opposed to failed checks

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TestError {
    /// A display-mode image could not be saved
    #[error("cannot save '{path}': {message}")]
    ImageWrite { path: String, message: String },

    /// A synthetic page could not be allocated
    #[error("cannot build fixture: {0}")]
    Fixture(#[from] puzzleseg_core::Error),

    #[error("regout directory: {0}")]
    Io(#[from] std::io::Error),
}

pub type TestResult<T> = Result<T, TestError>;
