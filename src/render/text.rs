//! Plain text rendering for DOCX documents.

use std::io::Write;

use crate::error::Result;
use crate::model::Document;

/// Write every non-blank paragraph as one line.
///
/// The paragraph text is written untrimmed and followed by `\n`; the trim
/// only decides whether the paragraph is written at all. Returns the number
/// of lines written.
pub fn write_text<W: Write>(doc: &Document, mut writer: W) -> Result<usize> {
    let mut lines = 0;
    for paragraph in doc.non_blank_paragraphs() {
        writer.write_all(paragraph.text.as_bytes())?;
        writer.write_all(b"\n")?;
        lines += 1;
    }
    writer.flush()?;

    log::debug!("wrote {} of {} paragraphs", lines, doc.paragraph_count());
    Ok(lines)
}

/// Convert a document to plain text.
pub fn to_text(doc: &Document) -> String {
    let mut output = String::new();
    for paragraph in doc.non_blank_paragraphs() {
        output.push_str(&paragraph.text);
        output.push('\n');
    }
    output
}
