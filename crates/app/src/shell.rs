//! Line-oriented front end: one request, one response.

use std::fmt;
use std::path::{Path, PathBuf};

use edubot_core::model::AlarmTime;
use edubot_core::quiz::DEFAULT_QUESTION_COUNT;
use services::{AppServices, DocumentError, ReminderServiceError, StudySession};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, error};

use crate::render;

const PROMPT: &str = "edubot> ";

pub const HELP: &str = "\
Commands:
  load <pdf>        load a study PDF (replaces the current one)
  explain <topic>   show the passage where <topic> first appears
  quiz [n]          build up to n questions (default 5)
  remind <text>     save a reminder
  reminders         list saved reminders
  weather           current weather for the configured city
  news              top headlines
  quote             a motivational quote
  alarm <HH:MM>     acknowledge an alarm time
  help              show this list
  quit              leave";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Load(PathBuf),
    Explain(String),
    Quiz(usize),
    Remind(String),
    Reminders,
    Weather,
    News,
    Quote,
    Alarm(String),
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellParseError {
    Blank,
    Unknown(String),
    MissingArgument { usage: &'static str },
    InvalidCount(String),
}

impl fmt::Display for ShellParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShellParseError::Blank => write!(f, "empty command"),
            ShellParseError::Unknown(cmd) => write!(f, "unknown command: {cmd} (try `help`)"),
            ShellParseError::MissingArgument { usage } => write!(f, "usage: {usage}"),
            ShellParseError::InvalidCount(raw) => write!(f, "invalid question count: {raw}"),
        }
    }
}

impl std::error::Error for ShellParseError {}

impl ShellCommand {
    /// Parse one input line. The command word is case-insensitive; the rest
    /// of the line is passed through as typed.
    pub fn parse(line: &str) -> Result<Self, ShellParseError> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        match word.to_ascii_lowercase().as_str() {
            "" => Err(ShellParseError::Blank),
            "load" | "upload" => non_empty(rest, "load <pdf>").map(|p| Self::Load(p.into())),
            "explain" => Ok(Self::Explain(rest.to_string())),
            "quiz" => parse_count(rest).map(Self::Quiz),
            "remind" => non_empty(rest, "remind <text>").map(|t| Self::Remind(t.to_string())),
            "reminders" => Ok(Self::Reminders),
            "weather" => Ok(Self::Weather),
            "news" => Ok(Self::News),
            "quote" => Ok(Self::Quote),
            "alarm" => non_empty(rest, "alarm <HH:MM>").map(|t| Self::Alarm(t.to_string())),
            "help" | "?" => Ok(Self::Help),
            "quit" | "exit" => Ok(Self::Quit),
            _ => Err(ShellParseError::Unknown(word.to_string())),
        }
    }
}

fn non_empty<'a>(rest: &'a str, usage: &'static str) -> Result<&'a str, ShellParseError> {
    if rest.is_empty() {
        Err(ShellParseError::MissingArgument { usage })
    } else {
        Ok(rest)
    }
}

fn parse_count(rest: &str) -> Result<usize, ShellParseError> {
    if rest.is_empty() {
        return Ok(DEFAULT_QUESTION_COUNT);
    }
    rest.parse()
        .map_err(|_| ShellParseError::InvalidCount(rest.to_string()))
}

/// Result of running one command.
#[derive(Debug, Default)]
pub struct Outcome {
    pub lines: Vec<String>,
    pub quit: bool,
}

impl Outcome {
    fn say(line: impl Into<String>) -> Self {
        Self {
            lines: vec![line.into()],
            quit: false,
        }
    }
}

/// Owns the study session and dispatches commands to services.
pub struct Shell {
    services: AppServices,
    session: StudySession,
}

impl Shell {
    #[must_use]
    pub fn new(services: AppServices) -> Self {
        Self {
            services,
            session: StudySession::new(),
        }
    }

    /// Load a PDF into the session.
    ///
    /// # Errors
    ///
    /// Returns `DocumentError` if extraction fails; the previous document stays loaded.
    pub fn load_document(&mut self, path: &Path) -> Result<(), DocumentError> {
        self.session.load_pdf(path).map(|_| ())
    }

    /// Run one command.
    ///
    /// Recoverable failures come back as display lines. Only a reminder log
    /// fault is returned as an error.
    pub async fn execute(&mut self, command: ShellCommand) -> Result<Outcome, ReminderServiceError> {
        debug!(?command, "executing");
        let outcome = match command {
            ShellCommand::Load(path) => match self.load_document(&path) {
                Ok(()) => Outcome::say(render::document_loaded()),
                Err(err) => Outcome::say(render::document_error(&err)),
            },
            ShellCommand::Explain(topic) => match self.session.explain(&topic) {
                Ok(snippet) => Outcome::say(render::snippet(&snippet)),
                Err(err) => Outcome::say(render::study_error(&err)),
            },
            ShellCommand::Quiz(wanted) => match self.session.quiz(wanted) {
                Ok(items) => Outcome {
                    lines: render::quiz(&items),
                    quit: false,
                },
                Err(err) => Outcome::say(render::study_error(&err)),
            },
            ShellCommand::Remind(body) => {
                let receipt = self.services.reminders().append(&body)?;
                Outcome::say(render::receipt(&receipt))
            }
            ShellCommand::Reminders => {
                let lines = self.services.reminders().list_all()?;
                Outcome::say(render::reminders(&lines))
            }
            ShellCommand::Weather => Outcome::say(self.services.weather().display().await),
            ShellCommand::News => {
                Outcome::say(render::headlines(&self.services.news().display().await))
            }
            ShellCommand::Quote => Outcome::say(self.services.quotes().display().await),
            ShellCommand::Alarm(raw) => match AlarmTime::parse(&raw) {
                Ok(at) => Outcome::say(render::alarm(at)),
                Err(err) => Outcome::say(format!("⚠️ {err}")),
            },
            ShellCommand::Help => Outcome::say(HELP),
            ShellCommand::Quit => Outcome {
                lines: Vec::new(),
                quit: true,
            },
        };
        Ok(outcome)
    }

    /// Read commands from `input` until EOF or `quit`, writing replies to `output`.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if reading input or writing output fails.
    pub async fn run<R, W>(&mut self, mut input: R, mut output: W) -> std::io::Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut buf = Vec::new();
        write_block(&mut output, render::GREETING).await?;

        loop {
            output.write_all(PROMPT.as_bytes()).await?;
            output.flush().await?;

            buf.clear();
            if input.read_until(b'\n', &mut buf).await? == 0 {
                break;
            }
            // Invalid UTF-8 is replaced rather than ending the session.
            let line = String::from_utf8_lossy(&buf);

            let command = match ShellCommand::parse(&line) {
                Ok(command) => command,
                Err(ShellParseError::Blank) => continue,
                Err(err) => {
                    write_block(&mut output, &format!("⚠️ {err}")).await?;
                    continue;
                }
            };

            match self.execute(command).await {
                Ok(outcome) => {
                    for line in &outcome.lines {
                        write_block(&mut output, line).await?;
                    }
                    if outcome.quit {
                        break;
                    }
                }
                Err(err) => {
                    error!(error = %err, "reminder log unavailable");
                    write_block(&mut output, &format!("❌ Reminder log unavailable: {err}"))
                        .await?;
                }
            }
        }

        output.flush().await
    }
}

async fn write_block<W: AsyncWrite + Unpin>(output: &mut W, text: &str) -> std::io::Result<()> {
    output.write_all(text.as_bytes()).await?;
    output.write_all(b"\n\n").await
}

#[cfg(test)]
mod tests {
    use super::*;
    use edubot_core::model::AppConfig;
    use edubot_core::time::fixed_clock;
    use storage::repository::Storage;

    fn shell() -> Shell {
        Shell::new(AppServices::new(
            AppConfig::default(),
            fixed_clock(),
            Storage::in_memory(),
        ))
    }

    #[test]
    fn parses_commands_and_arguments() {
        assert_eq!(
            ShellCommand::parse("  EXPLAIN  Cell Wall "),
            Ok(ShellCommand::Explain("Cell Wall".into()))
        );
        assert_eq!(ShellCommand::parse("explain"), Ok(ShellCommand::Explain(String::new())));
        assert_eq!(ShellCommand::parse("quiz"), Ok(ShellCommand::Quiz(5)));
        assert_eq!(ShellCommand::parse("quiz 2"), Ok(ShellCommand::Quiz(2)));
        assert_eq!(
            ShellCommand::parse("load notes/bio.pdf"),
            Ok(ShellCommand::Load(PathBuf::from("notes/bio.pdf")))
        );
        assert_eq!(ShellCommand::parse("exit"), Ok(ShellCommand::Quit));
    }

    #[test]
    fn rejects_bad_input() {
        assert_eq!(ShellCommand::parse("   "), Err(ShellParseError::Blank));
        assert_eq!(
            ShellCommand::parse("dance"),
            Err(ShellParseError::Unknown("dance".into()))
        );
        assert_eq!(
            ShellCommand::parse("remind"),
            Err(ShellParseError::MissingArgument {
                usage: "remind <text>"
            })
        );
        assert_eq!(
            ShellCommand::parse("quiz -1"),
            Err(ShellParseError::InvalidCount("-1".into()))
        );
    }

    #[tokio::test]
    async fn lookups_before_upload_ask_for_a_pdf() {
        let mut shell = shell();
        let outcome = shell.execute(ShellCommand::Quiz(5)).await.unwrap();
        assert_eq!(outcome.lines, vec!["⚠️ Upload a PDF first."]);

        let outcome = shell
            .execute(ShellCommand::Explain("  ".into()))
            .await
            .unwrap();
        assert_eq!(outcome.lines, vec!["ℹ️ Enter a topic first."]);
    }

    #[tokio::test]
    async fn reminders_and_alarm_round_trip() {
        let mut shell = shell();
        let outcome = shell.execute(ShellCommand::Reminders).await.unwrap();
        assert_eq!(outcome.lines, vec!["🗒️ No reminders found."]);

        shell
            .execute(ShellCommand::Remind("Finish homework".into()))
            .await
            .unwrap();
        let outcome = shell.execute(ShellCommand::Reminders).await.unwrap();
        assert_eq!(outcome.lines, vec!["2024-01-01 09:00 - Finish homework"]);

        let outcome = shell
            .execute(ShellCommand::Alarm("6:30".into()))
            .await
            .unwrap();
        assert_eq!(
            outcome.lines,
            vec!["⏰ Alarm set for 06:30. (Note: Runs only while EduBot is open)"]
        );
    }

    #[tokio::test]
    async fn run_loop_answers_until_quit() {
        let mut shell = shell();
        let input: &[u8] = b"remind water plants\n\nbogus\nreminders\nquit\nreminders\n";
        let mut output = Vec::new();

        shell.run(input, &mut output).await.unwrap();

        let text = String::from_utf8(output).unwrap();
        assert!(text.starts_with(render::GREETING));
        assert!(text.contains("✅ Reminder saved."));
        assert!(text.contains("⚠️ unknown command: bogus"));
        assert_eq!(text.matches("2024-01-01 09:00 - water plants").count(), 1);
    }

    #[tokio::test]
    async fn invalid_utf8_line_does_not_end_the_session() {
        let mut shell = shell();
        let input: &[u8] = b"remind caf\xff\nreminders\nquit\n";
        let mut output = Vec::new();

        shell.run(input, &mut output).await.unwrap();

        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("✅ Reminder saved."));
        assert!(text.contains("2024-01-01 09:00 - caf\u{FFFD}"));
    }

    #[tokio::test]
    async fn last_line_without_newline_is_still_handled() {
        let mut shell = shell();
        let input: &[u8] = b"remind no newline\r\nreminders";
        let mut output = Vec::new();

        shell.run(input, &mut output).await.unwrap();

        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("2024-01-01 09:00 - no newline\n"));
    }

    #[tokio::test]
    async fn missing_pdf_keeps_shell_running() {
        let mut shell = shell();
        let outcome = shell
            .execute(ShellCommand::Load(PathBuf::from("/definitely/not/here.pdf")))
            .await
            .unwrap();
        assert!(outcome.lines[0].starts_with("⚠️ Error reading PDF"));
        assert!(!outcome.quit);
    }
}
