use std::fs;

use edubot_core::time::fixed_clock;
use services::{AppServices, StudyError, StudySession};

const NOTES: &str = "The cat sat. THE DOG RAN. Photosynthesis converts light into energy. \
                     Plants use chlorophyll for this process. It occurs in chloroplasts. \
                     This is vital for ecosystems. Energy flows through food chains. \
                     Producers form the base of food webs.";

fn services_in(dir: &tempfile::TempDir) -> AppServices {
    let reminders = dir.path().join("reminders.txt");
    let config = dir.path().join("config.json");
    fs::write(
        &config,
        serde_json::json!({
            "OPENWEATHER_API_KEY": "",
            "CITY": "Delhi",
            "REMINDERS_FILE": reminders.to_string_lossy(),
        })
        .to_string(),
    )
    .expect("write config");
    AppServices::bootstrap(&config, fixed_clock()).expect("bootstrap")
}

#[test]
fn reminders_round_trip_through_the_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let services = services_in(&dir);
    let reminders = services.reminders();

    assert!(reminders.list_all().expect("list").is_empty());

    let receipt = reminders.append("Finish homework").expect("append");
    assert_eq!(receipt.entry().to_line(), "2024-01-01 09:00 - Finish homework");
    assert_eq!(
        reminders.list_all().expect("list"),
        vec!["2024-01-01 09:00 - Finish homework"]
    );

    let raw = fs::read_to_string(dir.path().join("reminders.txt")).expect("read");
    assert_eq!(raw, "2024-01-01 09:00 - Finish homework\n");
}

#[test]
fn bootstrap_creates_default_config() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = dir.path().join("config.json");

    let services = AppServices::bootstrap(&config, fixed_clock()).expect("bootstrap");
    assert!(config.exists());
    assert_eq!(services.config().city(), "Delhi");
    assert!(services.config().weather_api_key().is_none());
}

#[test]
fn study_session_explains_and_quizzes() {
    let mut session = StudySession::new();
    session.load_text(NOTES).expect("load");

    let snippet = session.explain("dog").expect("explain");
    assert!(snippet.text().starts_with("DOG RAN. Photosynthesis"));

    let quiz = session.quiz(2).expect("quiz");
    assert_eq!(quiz.len(), 2);
    assert_eq!(quiz[0].question(), "Photosynthesis converts light into energy?");
    assert_eq!(quiz[0].answer(), "Plants use chlorophyll for this process");

    assert!(matches!(
        session.explain("volcano"),
        Err(StudyError::NotFound(_))
    ));
}
