//! DOCX document parser using docx-rs.

use std::fs;
use std::io::Read;
use std::path::Path;

use docx_rs::{Break, BreakType, DocumentChild, Docx, ParagraphChild, RunChild};

use crate::detect::{detect_format_from_bytes, detect_format_from_path};
use crate::error::{Error, Result};
use crate::model::{Document, Paragraph};

/// DOCX document parser.
pub struct DocxParser {
    docx: Docx,
}

impl DocxParser {
    /// Open a DOCX file.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        // Verify it's a ZIP package before reading the whole file
        detect_format_from_path(path).map_err(|e| {
            if matches!(e, Error::UnknownFormat) {
                log::warn!("{} is not a DOCX package", path.display());
            }
            e
        })?;

        let data = fs::read(path)?;
        Self::load(&data)
    }

    /// Parse a DOCX package from bytes.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        if let Err(e) = detect_format_from_bytes(data) {
            log::warn!("input is not a DOCX package");
            return Err(e);
        }
        Self::load(data)
    }

    /// Parse a DOCX package from a reader.
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        Self::from_bytes(&data)
    }

    fn load(data: &[u8]) -> Result<Self> {
        let docx = docx_rs::read_docx(data)?;
        Ok(Self { docx })
    }

    /// Parse the document body into its ordered paragraphs.
    ///
    /// Only top-level body paragraphs are collected; tables and other
    /// block content are skipped.
    pub fn parse(&self) -> Result<Document> {
        let document = body_paragraphs(&self.docx.document);
        log::debug!("parsed {} paragraphs", document.paragraph_count());
        Ok(document)
    }
}

fn body_paragraphs(body: &docx_rs::Document) -> Document {
    let mut document = Document::new();
    for child in &body.children {
        if let DocumentChild::Paragraph(p) = child {
            let mut paragraph = Paragraph::new();
            collect_paragraph_text(&p.children, &mut paragraph);
            document.add_paragraph(paragraph);
        }
    }
    document
}

/// Append the text of runs and hyperlinked runs, in order.
fn collect_paragraph_text(children: &[ParagraphChild], out: &mut Paragraph) {
    for child in children {
        match child {
            ParagraphChild::Run(run) => {
                for run_child in &run.children {
                    match run_child {
                        RunChild::Text(t) => out.push_str(&t.text),
                        RunChild::Tab(_) | RunChild::PTab(_) => out.push('\t'),
                        RunChild::CarriageReturn(_) => out.push('\n'),
                        RunChild::Break(b) if is_line_break(b) => out.push('\n'),
                        _ => {}
                    }
                }
            }
            ParagraphChild::Hyperlink(link) => collect_paragraph_text(&link.children, out),
            _ => {}
        }
    }
}

/// Page and column breaks carry no text; every other break is a newline.
fn is_line_break(b: &Break) -> bool {
    *b != Break::new(BreakType::Page) && *b != Break::new(BreakType::Column)
}
