//! DOCX container detection.
//!
//! A `.docx` file is an OOXML package, i.e. a ZIP archive. Only the
//! container signature is checked here; whether the archive actually holds
//! a Word document is left to the parser.

use crate::error::{Error, Result};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Container information for a detected package.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocxFormat {
    /// Office Open XML package (ZIP container).
    Ooxml,
}

impl std::fmt::Display for DocxFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DocxFormat::Ooxml => write!(f, "OOXML (ZIP)"),
        }
    }
}

/// ZIP local file header signature.
const ZIP_MAGIC: &[u8] = b"PK\x03\x04";

/// Detect the container format from a file path.
///
/// # Example
/// ```no_run
/// use undocx::detect::detect_format_from_path;
///
/// let format = detect_format_from_path("report.docx").unwrap();
/// println!("Container: {}", format);
/// ```
pub fn detect_format_from_path<P: AsRef<Path>>(path: P) -> Result<DocxFormat> {
    let file = File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut header = [0u8; 4];
    let mut read = 0;
    // Short files are reported as unknown, not as an I/O error
    while read < header.len() {
        let n = reader.read(&mut header[read..])?;
        if n == 0 {
            break;
        }
        read += n;
    }
    detect_format_from_bytes(&header[..read])
}

/// Detect the container format from the leading bytes of a file.
///
/// # Returns
/// * `Ok(DocxFormat::Ooxml)` if the data starts with a ZIP signature
/// * `Err(Error::UnknownFormat)` otherwise
pub fn detect_format_from_bytes(data: &[u8]) -> Result<DocxFormat> {
    if data.starts_with(ZIP_MAGIC) {
        Ok(DocxFormat::Ooxml)
    } else {
        log::debug!("rejected input: missing ZIP signature");
        Err(Error::UnknownFormat)
    }
}

/// Check if a file looks like a DOCX package.
pub fn is_docx<P: AsRef<Path>>(path: P) -> bool {
    detect_format_from_path(path).is_ok()
}

/// Check if bytes look like a DOCX package.
pub fn is_docx_bytes(data: &[u8]) -> bool {
    detect_format_from_bytes(data).is_ok()
}
