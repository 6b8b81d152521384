//! Document-level types.

use super::Paragraph;

/// A parsed Word document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    /// Body paragraphs in document order
    pub paragraphs: Vec<Paragraph>,
}

impl Document {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a document from paragraph texts, in order.
    pub fn from_texts<I, S>(texts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            paragraphs: texts.into_iter().map(Paragraph::with_text).collect(),
        }
    }

    /// Add a paragraph to the end of the document.
    pub fn add_paragraph(&mut self, paragraph: Paragraph) {
        self.paragraphs.push(paragraph);
    }

    /// Get the number of paragraphs, blank ones included.
    pub fn paragraph_count(&self) -> usize {
        self.paragraphs.len()
    }

    /// Check if the document has no paragraphs at all.
    pub fn is_empty(&self) -> bool {
        self.paragraphs.is_empty()
    }

    /// Paragraphs that survive the blank check, in document order.
    pub fn non_blank_paragraphs(&self) -> impl Iterator<Item = &Paragraph> {
        self.paragraphs.iter().filter(|p| !p.is_blank())
    }
}
