use std::fmt;
use std::path::PathBuf;

use edubot_core::quiz::DEFAULT_QUESTION_COUNT;
use services::{AppServices, Clock};
use tracing::info;

mod render;
mod shell;

use shell::{Shell, ShellCommand};

const DEFAULT_CONFIG_PATH: &str = "config.json";

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    MissingPdf { command: &'static str },
    MissingText { command: &'static str },
    UnexpectedText { command: &'static str },
    UnknownArg(String),
    InvalidCount { raw: String },
    InvalidPath { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::MissingPdf { command } => write!(f, "{command} requires --pdf <path>"),
            ArgsError::MissingText { command } => write!(f, "{command} requires an argument"),
            ArgsError::UnexpectedText { command } => {
                write!(f, "{command} does not take an argument")
            }
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidCount { raw } => write!(f, "invalid --count value: {raw}"),
            ArgsError::InvalidPath { raw } => write!(f, "invalid path: {raw:?}"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

fn require_path(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<PathBuf, ArgsError> {
    let value = require_value(args, flag)?;
    if value.trim().is_empty() {
        return Err(ArgsError::InvalidPath { raw: value });
    }
    Ok(PathBuf::from(value))
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  edubot [shell]                          interactive session (default)");
    eprintln!("  edubot explain --pdf <path> <topic>     passage where <topic> first appears");
    eprintln!("  edubot quiz --pdf <path> [--count <n>]  questions from the PDF (default 5)");
    eprintln!("  edubot remind <text>                    save a reminder");
    eprintln!("  edubot reminders                        list saved reminders");
    eprintln!("  edubot weather | news | quote           web feeds");
    eprintln!("  edubot alarm <HH:MM>                    acknowledge an alarm time");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --config <path>   config file (default: config.json, created if missing)");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  RUST_LOG   log filter (default: edubot=info,services=info)");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Shell,
    Explain,
    Quiz,
    Remind,
    Reminders,
    Weather,
    News,
    Quote,
    Alarm,
}

impl Command {
    fn from_arg(arg: &str) -> Option<Self> {
        match arg {
            "shell" => Some(Self::Shell),
            "explain" => Some(Self::Explain),
            "quiz" => Some(Self::Quiz),
            "remind" => Some(Self::Remind),
            "reminders" => Some(Self::Reminders),
            "weather" => Some(Self::Weather),
            "news" => Some(Self::News),
            "quote" => Some(Self::Quote),
            "alarm" => Some(Self::Alarm),
            _ => None,
        }
    }

    fn name(self) -> &'static str {
        match self {
            Self::Shell => "shell",
            Self::Explain => "explain",
            Self::Quiz => "quiz",
            Self::Remind => "remind",
            Self::Reminders => "reminders",
            Self::Weather => "weather",
            Self::News => "news",
            Self::Quote => "quote",
            Self::Alarm => "alarm",
        }
    }
}

#[derive(Debug)]
struct Args {
    config_path: PathBuf,
    pdf: Option<PathBuf>,
    count: usize,
    text: Vec<String>,
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut parsed = Self {
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
            pdf: None,
            count: DEFAULT_QUESTION_COUNT,
            text: Vec::new(),
        };

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--config" => parsed.config_path = require_path(args, "--config")?,
                "--pdf" => parsed.pdf = Some(require_path(args, "--pdf")?),
                "--count" => {
                    let value = require_value(args, "--count")?;
                    parsed.count = value
                        .parse()
                        .map_err(|_| ArgsError::InvalidCount { raw: value.clone() })?;
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                "--" => parsed.text.extend(args.by_ref()),
                _ if arg.starts_with("--") => return Err(ArgsError::UnknownArg(arg)),
                _ => parsed.text.push(arg),
            }
        }

        Ok(parsed)
    }

    fn joined_text(&self) -> String {
        self.text.join(" ")
    }

    /// Commands to run for a one-shot invocation. `None` means the interactive shell.
    fn plan(&self, cmd: Command) -> Result<Option<ShellCommand>, ArgsError> {
        let command = cmd.name();
        let text = self.joined_text();
        let takes_text = matches!(cmd, Command::Explain | Command::Remind | Command::Alarm);
        if !takes_text && !text.trim().is_empty() {
            return Err(ArgsError::UnexpectedText { command });
        }
        if matches!(cmd, Command::Explain | Command::Quiz) && self.pdf.is_none() {
            return Err(ArgsError::MissingPdf { command });
        }
        if matches!(cmd, Command::Remind | Command::Alarm) && text.trim().is_empty() {
            return Err(ArgsError::MissingText { command });
        }

        let planned = match cmd {
            Command::Shell => return Ok(None),
            Command::Explain => ShellCommand::Explain(text),
            Command::Quiz => ShellCommand::Quiz(self.count),
            Command::Remind => ShellCommand::Remind(text),
            Command::Reminders => ShellCommand::Reminders,
            Command::Weather => ShellCommand::Weather,
            Command::News => ShellCommand::News,
            Command::Quote => ShellCommand::Quote,
            Command::Alarm => ShellCommand::Alarm(text),
        };
        Ok(Some(planned))
    }
}

fn init_logging() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("edubot=info,services=info"));

    // Logs go to stderr so replies on stdout stay clean.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .init();
}

/// Flags whose next argument is their value, not a subcommand.
const VALUE_FLAGS: [&str; 3] = ["--config", "--pdf", "--count"];

/// Pull the subcommand out of `argv`, wherever global flags put it.
///
/// The first word that is neither a flag nor a flag's value names the
/// command; with no such word the shell runs. Returns the unknown word on error.
fn take_command(argv: &mut Vec<String>) -> Result<Command, String> {
    let mut i = 0;
    while i < argv.len() {
        let arg = argv[i].as_str();
        if arg == "--" {
            break;
        }
        if VALUE_FLAGS.contains(&arg) {
            i += 2;
            continue;
        }
        if arg.starts_with('-') {
            i += 1;
            continue;
        }
        let word = argv.remove(i);
        return Command::from_arg(&word).ok_or(word);
    }
    Ok(Command::Shell)
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv: Vec<String> = std::env::args().skip(1).collect();

    if argv.first().is_some_and(|first| first == "help") {
        print_usage();
        return Ok(());
    }

    let cmd = take_command(&mut argv).map_err(|word| {
        eprintln!("unknown subcommand: {word}");
        print_usage();
        std::io::Error::new(std::io::ErrorKind::InvalidInput, "unknown subcommand")
    })?;

    let mut iter = argv.into_iter();
    let (parsed, planned) = Args::parse(&mut iter)
        .and_then(|parsed| parsed.plan(cmd).map(|planned| (parsed, planned)))
        .map_err(|e| {
            eprintln!("{e}");
            print_usage();
            e
        })?;

    // Config is read exactly once here and handed down explicitly.
    let services = AppServices::bootstrap(&parsed.config_path, Clock::default_clock())?;
    let mut shell = Shell::new(services);

    let Some(command) = planned else {
        info!(command = cmd.name(), "starting interactive shell");
        let stdin = tokio::io::BufReader::new(tokio::io::stdin());
        shell.run(stdin, tokio::io::stdout()).await?;
        return Ok(());
    };

    if let Some(pdf) = parsed.pdf.as_deref() {
        shell.load_document(pdf)?;
    }

    let outcome = shell.execute(command).await?;
    for line in outcome.lines {
        println!("{line}");
    }
    Ok(())
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("edubot: {err}");
        std::process::exit(2);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn to_argv(args: &[&str]) -> Vec<String> {
        args.iter().map(|s| (*s).to_string()).collect()
    }

    fn parse(args: &[&str]) -> Result<Args, ArgsError> {
        let mut iter = args.iter().map(|s| (*s).to_string());
        Args::parse(&mut iter)
    }

    #[test]
    fn explain_collects_topic_words_and_pdf() {
        let args = parse(&["--pdf", "bio.pdf", "cell", "wall"]).unwrap();
        assert_eq!(args.pdf, Some(PathBuf::from("bio.pdf")));
        assert_eq!(
            args.plan(Command::Explain).unwrap(),
            Some(ShellCommand::Explain("cell wall".into()))
        );
    }

    #[test]
    fn quiz_requires_pdf_and_honors_count() {
        let args = parse(&["--count", "3"]).unwrap();
        assert!(matches!(
            args.plan(Command::Quiz),
            Err(ArgsError::MissingPdf { command: "quiz" })
        ));

        let args = parse(&["--pdf", "a.pdf", "--count", "3"]).unwrap();
        assert_eq!(args.plan(Command::Quiz).unwrap(), Some(ShellCommand::Quiz(3)));
    }

    #[test]
    fn flag_errors_are_reported() {
        assert!(matches!(
            parse(&["--count", "many"]),
            Err(ArgsError::InvalidCount { .. })
        ));
        assert!(matches!(
            parse(&["--config"]),
            Err(ArgsError::MissingValue { flag: "--config" })
        ));
        assert!(matches!(parse(&["--loud"]), Err(ArgsError::UnknownArg(_))));
    }

    #[test]
    fn text_commands_need_text_and_others_refuse_it() {
        let empty = parse(&[]).unwrap();
        assert!(matches!(
            empty.plan(Command::Remind),
            Err(ArgsError::MissingText { command: "remind" })
        ));
        assert_eq!(empty.plan(Command::Shell).unwrap(), None);
        assert_eq!(empty.config_path, PathBuf::from("config.json"));

        let stray = parse(&["hello"]).unwrap();
        assert!(matches!(
            stray.plan(Command::Weather),
            Err(ArgsError::UnexpectedText { command: "weather" })
        ));
    }

    #[test]
    fn double_dash_passes_flags_through_as_text() {
        let args = parse(&["--", "--not-a-flag", "today"]).unwrap();
        assert_eq!(
            args.plan(Command::Remind).unwrap(),
            Some(ShellCommand::Remind("--not-a-flag today".into()))
        );
    }

    #[test]
    fn global_config_may_precede_the_subcommand() {
        let mut argv = to_argv(&["--config", "c.json", "remind", "hi"]);
        let cmd = take_command(&mut argv).unwrap();
        assert_eq!(cmd, Command::Remind);

        let args = Args::parse(&mut argv.into_iter()).unwrap();
        assert_eq!(args.config_path, PathBuf::from("c.json"));
        assert_eq!(
            args.plan(cmd).unwrap(),
            Some(ShellCommand::Remind("hi".into()))
        );
    }

    #[test]
    fn command_is_found_after_flag_values() {
        let mut argv = to_argv(&["--pdf", "quiz.pdf", "--count", "2", "quiz"]);
        assert_eq!(take_command(&mut argv).unwrap(), Command::Quiz);
        assert_eq!(argv, ["--pdf", "quiz.pdf", "--count", "2"]);

        let mut argv = to_argv(&["remind", "quiz", "tomorrow"]);
        assert_eq!(take_command(&mut argv).unwrap(), Command::Remind);
        assert_eq!(argv, ["quiz", "tomorrow"]);
    }

    #[test]
    fn flags_alone_start_the_shell() {
        let mut argv = to_argv(&["--config", "c.json"]);
        assert_eq!(take_command(&mut argv).unwrap(), Command::Shell);

        let mut argv = to_argv(&["--", "weather"]);
        assert_eq!(take_command(&mut argv).unwrap(), Command::Shell);
    }

    #[test]
    fn unknown_subcommand_is_reported() {
        let mut argv = to_argv(&["--config", "c.json", "dance"]);
        assert_eq!(take_command(&mut argv).unwrap_err(), "dance");
    }
}
