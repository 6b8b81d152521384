//! DOCX parsing module.

mod docx_parser;

pub use docx_parser::DocxParser;
