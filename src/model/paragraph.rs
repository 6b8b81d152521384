//! Paragraph type.

/// A paragraph of text content.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Paragraph {
    /// Text as it appears in the document, untrimmed
    pub text: String,
}

impl Paragraph {
    /// Create a new empty paragraph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a paragraph with plain text.
    pub fn with_text(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Append text to the paragraph.
    pub fn push_str(&mut self, text: &str) {
        self.text.push_str(text);
    }

    /// Append a single character (tab, line break).
    pub fn push(&mut self, ch: char) {
        self.text.push(ch);
    }

    /// True when the text is empty after trimming surrounding whitespace.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}
