use std::fmt;

use chrono::NaiveTime;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AlarmError {
    #[error("invalid alarm time {raw:?}, expected HH:MM (24h)")]
    Invalid { raw: String },
}

/// A 24-hour `HH:MM` alarm time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlarmTime(NaiveTime);

impl AlarmTime {
    /// Parse a user-supplied `HH:MM` string.
    ///
    /// # Errors
    ///
    /// Returns `AlarmError::Invalid` if the input is not a valid 24-hour time.
    pub fn parse(raw: &str) -> Result<Self, AlarmError> {
        NaiveTime::parse_from_str(raw.trim(), "%H:%M")
            .map(Self)
            .map_err(|_| AlarmError::Invalid {
                raw: raw.to_string(),
            })
    }
}

impl fmt::Display for AlarmTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%H:%M"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_and_normalizes() {
        let alarm = AlarmTime::parse(" 7:05 ").unwrap();
        assert_eq!(alarm.to_string(), "07:05");
    }

    #[test]
    fn rejects_out_of_range() {
        assert!(matches!(
            AlarmTime::parse("25:00"),
            Err(AlarmError::Invalid { .. })
        ));
        assert!(AlarmTime::parse("noon").is_err());
    }
}
