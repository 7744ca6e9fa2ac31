use std::path::Path;

use edubot_core::model::{DocumentText, QuizItem, Topic};
use edubot_core::quiz;
use edubot_core::search::{self, Snippet};
use tracing::{debug, info};

use crate::document_service::extract_pdf_text;
use crate::error::{DocumentError, StudyError};

/// Holds the one document currently being studied.
///
/// Each successful load replaces the previous document wholesale; a failed
/// load leaves the slot untouched.
#[derive(Debug, Default)]
pub struct StudySession {
    document: Option<DocumentText>,
}

impl StudySession {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the current document with already-extracted text.
    ///
    /// # Errors
    ///
    /// Returns `DocumentError::Empty` if the text is blank.
    pub fn load_text(&mut self, raw: impl Into<String>) -> Result<&DocumentText, DocumentError> {
        let text = DocumentText::parse(raw)?;
        Ok(self.replace(text))
    }

    /// Extract a PDF and make it the current document.
    ///
    /// # Errors
    ///
    /// Returns `DocumentError` if extraction fails.
    pub fn load_pdf(&mut self, path: &Path) -> Result<&DocumentText, DocumentError> {
        let text = extract_pdf_text(path)?;
        info!(path = %path.display(), chars = text.char_len(), "loaded document");
        Ok(self.replace(text))
    }

    /// Find a snippet about `raw_topic` in the current document.
    ///
    /// # Errors
    ///
    /// Returns `StudyError::Topic` for a blank topic, `NoDocument` when nothing
    /// is loaded, and `NotFound` on a miss.
    pub fn explain(&self, raw_topic: &str) -> Result<Snippet, StudyError> {
        let topic = Topic::parse(raw_topic)?;
        let document = self.document.as_ref().ok_or(StudyError::NoDocument)?;
        let snippet = search::search(document.as_str(), &topic)?;
        debug!(topic = %topic, offset = snippet.offset(), "topic found");
        Ok(snippet)
    }

    /// Generate up to `wanted` quiz items from the current document.
    ///
    /// # Errors
    ///
    /// Returns `StudyError::NoDocument` when nothing is loaded and
    /// `InsufficientContent` when the document is too thin.
    pub fn quiz(&self, wanted: usize) -> Result<Vec<QuizItem>, StudyError> {
        let document = self.document.as_ref().ok_or(StudyError::NoDocument)?;
        let items = quiz::generate(document.as_str(), wanted)?;
        debug!(wanted, produced = items.len(), "quiz generated");
        Ok(items)
    }

    fn replace(&mut self, text: DocumentText) -> &DocumentText {
        self.document.insert(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOTES: &str = "Photosynthesis converts light into energy. Plants use chlorophyll for this process. It occurs in chloroplasts. This is vital for ecosystems. Energy flows through food chains. Producers form the base of food webs.";

    #[test]
    fn lookups_require_a_document() {
        let session = StudySession::new();
        assert!(matches!(session.explain("energy"), Err(StudyError::NoDocument)));
        assert!(matches!(session.quiz(5), Err(StudyError::NoDocument)));
    }

    #[test]
    fn blank_topic_is_a_usage_error_before_document_check() {
        let session = StudySession::new();
        assert!(matches!(session.explain("   "), Err(StudyError::Topic(_))));
    }

    #[test]
    fn explain_and_quiz_use_the_loaded_document() {
        let mut session = StudySession::new();
        session.load_text(NOTES).unwrap();

        let snippet = session.explain("CHLOROPHYLL").unwrap();
        assert!(snippet.text().starts_with("chlorophyll for this process."));

        let quiz = session.quiz(5).unwrap();
        assert_eq!(quiz.len(), 3);
        assert_eq!(quiz[0].question(), "Photosynthesis converts light into energy?");
    }

    #[test]
    fn miss_and_thin_documents_are_recoverable() {
        let mut session = StudySession::new();
        session.load_text("Too short. Really.").unwrap();
        assert!(matches!(session.explain("mitosis"), Err(StudyError::NotFound(_))));
        assert!(matches!(
            session.quiz(5),
            Err(StudyError::InsufficientContent(_))
        ));
    }

    #[test]
    fn new_upload_replaces_and_failed_upload_keeps_document() {
        let mut session = StudySession::new();
        session.load_text("first document about cells").unwrap();
        session.load_text("second document about stars").unwrap();
        assert!(matches!(session.explain("cells"), Err(StudyError::NotFound(_))));

        assert!(session.load_text("  ").is_err());
        let kept = session.explain("stars").unwrap();
        assert_eq!(kept.text(), "stars");
    }
}
