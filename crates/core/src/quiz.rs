//! Quiz generation from sentence-like fragments of document text.

use thiserror::Error;

use crate::model::QuizItem;

/// Fragments must be longer than this (in characters, after trimming).
pub const MIN_FRAGMENT_CHARS: usize = 20;
/// Fewer candidate fragments than this is not enough to build a quiz.
pub const MIN_CANDIDATES: usize = 5;
/// Number of leading words kept for a question.
pub const QUESTION_WORDS: usize = 6;
/// Number of questions requested when the caller does not say.
pub const DEFAULT_QUESTION_COUNT: usize = 5;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("not enough content to create a quiz ({found} usable sentences, need {MIN_CANDIDATES})")]
pub struct InsufficientContent {
    pub found: usize,
}

/// Split `text` on `.` and keep the trimmed pieces long enough to quiz on.
#[must_use]
pub fn candidate_fragments(text: &str) -> Vec<&str> {
    text.split('.')
        .map(str::trim)
        .filter(|piece| piece.chars().count() > MIN_FRAGMENT_CHARS)
        .collect()
}

/// Build up to `wanted` question/answer pairs from adjacent fragments.
///
/// Output is deterministic and never exceeds half the candidate count.
///
/// # Errors
///
/// Returns `InsufficientContent` if fewer than [`MIN_CANDIDATES`] fragments qualify.
pub fn generate(text: &str, wanted: usize) -> Result<Vec<QuizItem>, InsufficientContent> {
    let candidates = candidate_fragments(text);
    if candidates.len() < MIN_CANDIDATES {
        return Err(InsufficientContent {
            found: candidates.len(),
        });
    }

    let n = wanted.min(candidates.len() / 2);
    Ok((0..n)
        .map(|i| QuizItem::new(question_stub(candidates[i]), candidates[i + 1]))
        .collect())
}

/// Fragments shorter than [`QUESTION_WORDS`] keep every word they have.
fn question_stub(fragment: &str) -> String {
    let lead: Vec<&str> = fragment.split_whitespace().take(QUESTION_WORDS).collect();
    format!("{}?", lead.join(" "))
}
