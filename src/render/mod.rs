//! Rendering module for writing extracted paragraphs as plain text.

mod text;

pub use text::{to_text, write_text};
