//! # undocx
//!
//! Paragraph text extraction for Word (`.docx`) documents.
//!
//! A document is read as an ordered list of body paragraphs. Paragraphs
//! whose text is blank after trimming are dropped, and every other
//! paragraph is written, untrimmed, as one line of plain text.
//!
//! ## Quick Start
//!
//! ```no_run
//! fn main() -> Result<(), undocx::ExtractionError> {
//!     undocx::extract("report.docx", "report.txt")?;
//!     Ok(())
//! }
//! ```
//!
//! Working with the parsed document directly:
//!
//! ```no_run
//! use undocx::{parse_file, render};
//!
//! fn main() -> undocx::Result<()> {
//!     let doc = parse_file("report.docx")?;
//!     print!("{}", render::to_text(&doc));
//!     Ok(())
//! }
//! ```

pub mod detect;
pub mod error;
pub mod model;
pub mod parser;
pub mod render;

// Re-export commonly used types
pub use detect::{detect_format_from_bytes, detect_format_from_path, is_docx, DocxFormat};
pub use error::{Error, ExtractionError, Result};
pub use model::{Document, Paragraph};
pub use parser::DocxParser;

use std::fs::File;
use std::io::{BufWriter, Read};
use std::path::Path;

/// Parse a DOCX file and return its paragraphs.
///
/// # Example
///
/// ```no_run
/// use undocx::parse_file;
///
/// let doc = parse_file("report.docx").unwrap();
/// println!("Paragraphs: {}", doc.paragraph_count());
/// ```
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Document> {
    let parser = DocxParser::open(path)?;
    parser.parse()
}

/// Parse a DOCX package from bytes.
///
/// # Example
///
/// ```no_run
/// use undocx::parse_bytes;
///
/// let data = std::fs::read("report.docx").unwrap();
/// let doc = parse_bytes(&data).unwrap();
/// ```
pub fn parse_bytes(data: &[u8]) -> Result<Document> {
    let parser = DocxParser::from_bytes(data)?;
    parser.parse()
}

/// Parse a DOCX package from a reader.
pub fn parse_reader<R: Read>(reader: R) -> Result<Document> {
    let parser = DocxParser::from_reader(reader)?;
    parser.parse()
}

/// Extract the non-blank paragraphs of a DOCX file as text, one per line.
///
/// # Example
///
/// ```no_run
/// use undocx::extract_text;
///
/// let text = extract_text("report.docx").unwrap();
/// print!("{}", text);
/// ```
pub fn extract_text<P: AsRef<Path>>(path: P) -> Result<String> {
    let doc = parse_file(path)?;
    Ok(render::to_text(&doc))
}

/// Extract the non-blank paragraphs of `source` into the text file `dest`.
///
/// The source is parsed completely before `dest` is opened, so a missing
/// or unreadable source leaves `dest` untouched. `dest` is created or
/// truncated, then written in document order.
///
/// Every failure is reported as a single [`ExtractionError`] carrying the
/// description of its cause.
pub fn extract<P, Q>(source: P, dest: Q) -> std::result::Result<(), ExtractionError>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let source = source.as_ref();
    let dest = dest.as_ref();

    let doc = parse_file(source)?;

    let file = File::create(dest)?;
    let lines = render::write_text(&doc, BufWriter::new(file))?;

    log::info!(
        "extracted {} lines from {} to {}",
        lines,
        source.display(),
        dest.display()
    );
    Ok(())
}
