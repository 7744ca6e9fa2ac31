//! Case-insensitive topic lookup over document text.

use thiserror::Error;

use crate::model::Topic;

/// Maximum snippet length, in characters.
pub const SNIPPET_CHARS: usize = 500;

/// The topic does not occur anywhere in the text.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("couldn't find information about {topic:?}")]
pub struct SearchMiss {
    pub topic: String,
}

/// A window of the original-case text starting at the first match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snippet {
    offset: usize,
    text: String,
}

impl Snippet {
    /// Character offset of the match in the searched text.
    #[must_use]
    pub fn offset(&self) -> usize {
        self.offset
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Find the first case-insensitive occurrence of `topic` in `text`.
///
/// Returns up to [`SNIPPET_CHARS`] characters of the original text starting at
/// the match, or fewer if the text ends first.
///
/// # Errors
///
/// Returns `SearchMiss` if the topic never occurs.
pub fn search(text: &str, topic: &Topic) -> Result<Snippet, SearchMiss> {
    let (lowered, origins) = lowercase_with_origins(text);
    let found = lowered.find(topic.as_str()).ok_or_else(|| SearchMiss {
        topic: topic.to_string(),
    })?;

    // `found` sits on a char boundary of `lowered`, so some entry starts at or before it.
    let idx = origins
        .partition_point(|&(lowered_at, _)| lowered_at <= found)
        .saturating_sub(1);
    let start = origins.get(idx).map_or(0, |&(_, original_at)| original_at);

    let tail = &text[start..];
    Ok(Snippet {
        offset: text[..start].chars().count(),
        text: tail.chars().take(SNIPPET_CHARS).collect(),
    })
}

/// Lower-case `text` char by char, recording for each produced char the byte
/// offset it starts at in the lowered string and in the original.
///
/// Some characters lower to a different byte length (or to several chars), so
/// offsets in the lowered string can't be reused on the original directly.
fn lowercase_with_origins(text: &str) -> (String, Vec<(usize, usize)>) {
    let mut lowered = String::with_capacity(text.len());
    let mut origins = Vec::with_capacity(text.len());
    for (original_at, ch) in text.char_indices() {
        for lower in ch.to_lowercase() {
            origins.push((lowered.len(), original_at));
            lowered.push(lower);
        }
    }
    (lowered, origins)
}
