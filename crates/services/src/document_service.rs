use std::fs;
use std::path::Path;

use edubot_core::model::DocumentText;
use tracing::debug;

use crate::error::DocumentError;

/// Extract the text of every page of the PDF at `path`.
///
/// # Errors
///
/// Returns `DocumentError` if the file can't be read, isn't a parsable PDF,
/// or yields no text.
pub fn extract_pdf_text(path: &Path) -> Result<DocumentText, DocumentError> {
    let bytes = fs::read(path).map_err(|source| DocumentError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let text = pdf_extract::extract_text_from_mem(&bytes)
        .map_err(|err| DocumentError::Unreadable(err.to_string()))?;
    debug!(path = %path.display(), bytes = bytes.len(), chars = text.len(), "extracted pdf text");
    Ok(DocumentText::parse(text)?)
}
