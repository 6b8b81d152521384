//! Error types for undocx library.

use std::io;
use thiserror::Error;

/// Result type alias for undocx operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during DOCX processing.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The file is not an OOXML (ZIP) package.
    #[error("Unknown file format: not a valid DOCX package")]
    UnknownFormat,

    /// The package could not be read as a Word document.
    #[error("DOCX parsing error: {0}")]
    DocxParse(String),

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}

impl From<docx_rs::ReaderError> for Error {
    fn from(err: docx_rs::ReaderError) -> Self {
        Error::DocxParse(err.to_string())
    }
}

/// The single failure reported by [`crate::extract`].
///
/// Open, traversal and write failures are all folded into this one kind;
/// only the description of the underlying cause is kept.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{cause}")]
pub struct ExtractionError {
    /// Description of what went wrong.
    pub cause: String,
}

impl ExtractionError {
    /// Create an extraction error from any cause description.
    pub fn new(cause: impl Into<String>) -> Self {
        Self {
            cause: cause.into(),
        }
    }
}

impl From<Error> for ExtractionError {
    fn from(err: Error) -> Self {
        Self::new(err.to_string())
    }
}

impl From<io::Error> for ExtractionError {
    fn from(err: io::Error) -> Self {
        Error::Io(err).into()
    }
}
