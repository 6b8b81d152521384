//! Document model types for DOCX content representation.
//!
//! The model keeps only what text extraction needs: the body's
//! paragraphs, in document order, each with its text.

mod document;
mod paragraph;

pub use document::Document;
pub use paragraph::Paragraph;
