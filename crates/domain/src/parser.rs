use crate::reminder::truncate_to_minute;
use chrono::NaiveDateTime;
use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

/// Command a chat sends when it opens the bot for the first time
pub const START_COMMAND: &str = "/start";

/// `dd.mm.yyyy HH:MM`, the only date time format understood by the bot
pub const DATE_TIME_FORMAT: &str = "%d.%m.%Y %H:%M";

/// A 16 character date time token, one whitespace separator and the reminder text
static REMINDER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)^([0-9.:\s]{16})\s(.+)$").expect("reminder pattern is a valid regex")
});

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    #[error("Message does not match `<dd.mm.yyyy HH:MM> <text>`")]
    Malformed,
    #[error("Invalid date and time: `{0}`")]
    InvalidDateTime(String),
    #[error("Reminder text is empty")]
    EmptyText,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParsedReminder {
    pub due_at: NaiveDateTime,
    pub text: String,
}

pub fn parse_reminder(message: &str) -> Result<ParsedReminder, ParseError> {
    let captures = REMINDER_PATTERN
        .captures(message)
        .ok_or(ParseError::Malformed)?;
    let token = &captures[1];
    let text = &captures[2];

    let due_at = parse_date_time(token)?;
    if text.trim().is_empty() {
        return Err(ParseError::EmptyText);
    }

    Ok(ParsedReminder {
        due_at: truncate_to_minute(due_at),
        text: text.to_string(),
    })
}

fn parse_date_time(token: &str) -> Result<NaiveDateTime, ParseError> {
    let datetime = NaiveDateTime::parse_from_str(token, DATE_TIME_FORMAT)
        .map_err(|_| ParseError::InvalidDateTime(token.to_string()))?;
    // chrono accepts unpadded fields and lenient whitespace, the token has to be
    // exactly `dd.mm.yyyy HH:MM`
    if datetime.format(DATE_TIME_FORMAT).to_string() != token {
        return Err(ParseError::InvalidDateTime(token.to_string()));
    }
    Ok(datetime)
}

#[cfg(test)]
mod test {
    use super::*;
    use chrono::NaiveDate;

    fn datetime(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, mo, d)
            .unwrap()
            .and_hms_opt(h, mi, 0)
            .unwrap()
    }

    #[test]
    fn parses_valid_reminders() {
        let cases = vec![
            (
                "01.01.2022 20:00 Сделать домашнюю работу",
                datetime(2022, 1, 1, 20, 0),
                "Сделать домашнюю работу",
            ),
            (
                "31.12.2023 23:59 Happy new year",
                datetime(2023, 12, 31, 23, 59),
                "Happy new year",
            ),
            ("29.02.2024 00:00 leap", datetime(2024, 2, 29, 0, 0), "leap"),
            (
                "15.06.2022 07:05 buy milk\nand bread",
                datetime(2022, 6, 15, 7, 5),
                "buy milk\nand bread",
            ),
            ("15.06.2022 07:05 !!!", datetime(2022, 6, 15, 7, 5), "!!!"),
        ];

        for (message, due_at, text) in cases {
            let parsed = parse_reminder(message).unwrap();
            assert_eq!(parsed.due_at, due_at, "{}", message);
            assert_eq!(parsed.text, text);
        }
    }

    #[test]
    fn keeps_text_verbatim() {
        let parsed = parse_reminder("01.01.2022 20:00  indented text ").unwrap();
        assert_eq!(parsed.text, " indented text ");
    }

    #[test]
    fn rejects_messages_without_date_time() {
        for message in &[
            "hello world",
            "",
            "/start",
            "01.01.2022 20:00",
            "01.01.2022 20:00 ",
            "01.01.2022 20:00Do it",
            "2022.01.01 20:00:00 Do it",
            "tomorrow 20:00 do it",
        ] {
            assert!(parse_reminder(message).is_err(), "{:?}", message);
        }
        assert_eq!(parse_reminder("hello world"), Err(ParseError::Malformed));
    }

    #[test]
    fn rejects_invalid_calendar_date_times() {
        for message in &[
            "01.13.2022 20:00 month 13",
            "32.01.2022 20:00 day 32",
            "29.02.2023 20:00 not a leap year",
            "01.01.2022 24:00 hour 24",
            "01.01.2022 20:60 minute 60",
            "1.1.2022   20:00 unpadded",
            "01.01.2022 2000. no colon",
        ] {
            match parse_reminder(message) {
                Err(ParseError::InvalidDateTime(_)) => {}
                res => panic!("Expected invalid date time for {:?}, got {:?}", message, res),
            }
        }
    }

    #[test]
    fn rejects_blank_text() {
        assert_eq!(
            parse_reminder("01.01.2022 20:00    "),
            Err(ParseError::EmptyText)
        );
    }

    #[test]
    fn parsing_is_idempotent() {
        for message in &["01.01.2022 20:00 X", "garbage", "30.02.2022 10:00 nope"] {
            assert_eq!(parse_reminder(message), parse_reminder(message));
        }
    }
}
