//! Turns service results into the lines shown to the user.

use edubot_core::model::{AlarmTime, QuizItem, Receipt};
use edubot_core::search::Snippet;
use services::{DocumentError, StudyError};

pub const GREETING: &str = "🤖 EduBot: Hello! Upload a study PDF to begin.";

pub fn snippet(snippet: &Snippet) -> String {
    format!(
        "🤖 EduBot: 📘 Explanation snippet:\n\n{}...",
        snippet.text()
    )
}

pub fn quiz(items: &[QuizItem]) -> Vec<String> {
    items
        .iter()
        .map(|item| format!("❓ {}\n✅ {}", item.question(), item.answer()))
        .collect()
}

pub fn study_error(err: &StudyError) -> String {
    match err {
        StudyError::NoDocument => "⚠️ Upload a PDF first.".into(),
        StudyError::Topic(_) => "ℹ️ Enter a topic first.".into(),
        StudyError::NotFound(miss) => format!(
            "🤖 EduBot: Sorry, I couldn’t find information about '{}'. Try another topic.",
            miss.topic
        ),
        StudyError::InsufficientContent(_) => {
            "⚠️ Not enough content in PDF to create a quiz.".into()
        }
        other => format!("⚠️ {other}"),
    }
}

pub fn document_loaded() -> String {
    "✅ PDF loaded successfully!".into()
}

pub fn document_error(err: &DocumentError) -> String {
    match err {
        DocumentError::Empty(_) => "⚠️ No readable text found in the PDF.".into(),
        other => format!("⚠️ Error reading PDF: {other}"),
    }
}

pub fn receipt(_receipt: &Receipt) -> String {
    "✅ Reminder saved.".into()
}

pub fn reminders(lines: &[String]) -> String {
    if lines.is_empty() {
        return "🗒️ No reminders found.".into();
    }
    lines.join("\n")
}

pub fn headlines(titles: &[String]) -> String {
    let bullets: Vec<String> = titles.iter().map(|title| format!("• {title}")).collect();
    format!("📰 Top Headlines:\n{}", bullets.join("\n"))
}

pub fn alarm(at: AlarmTime) -> String {
    format!("⏰ Alarm set for {at}. (Note: Runs only while EduBot is open)")
}
