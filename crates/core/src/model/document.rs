use std::fmt;

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DocumentTextError {
    #[error("no readable text found in the document")]
    Empty,
}

/// Raw text extracted from the currently loaded document.
///
/// Replaced wholesale on each upload and never persisted.
#[derive(Clone, PartialEq, Eq)]
pub struct DocumentText(String);

impl DocumentText {
    /// Wrap extracted text, trimming surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns `DocumentTextError::Empty` if nothing but whitespace was extracted.
    pub fn parse(s: impl Into<String>) -> Result<Self, DocumentTextError> {
        let s = s.into();
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(DocumentTextError::Empty);
        }
        Ok(Self(trimmed.to_owned()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length in characters.
    #[must_use]
    pub fn char_len(&self) -> usize {
        self.0.chars().count()
    }
}

impl fmt::Debug for DocumentText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DocumentText")
            .field("chars", &self.char_len())
            .finish()
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TopicError {
    #[error("enter a topic first")]
    Empty,
}

/// A search query, trimmed and lower-cased.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Topic(String);

impl Topic {
    /// Normalize a raw user query.
    ///
    /// # Errors
    ///
    /// Returns `TopicError::Empty` if the query is blank after trimming.
    pub fn parse(raw: &str) -> Result<Self, TopicError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(TopicError::Empty);
        }
        Ok(Self(lowercase_chars(trimmed)))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Per-character lower-casing, kept in step with the search index so the
/// same input always lowers to the same bytes.
pub(crate) fn lowercase_chars(s: &str) -> String {
    s.chars().flat_map(char::to_lowercase).collect()
}
