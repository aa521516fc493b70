//! Texts the bot sends back to chats

use crate::parser::DATE_TIME_FORMAT;
use chrono::NaiveDateTime;

const EXAMPLE_REQUEST: &str = "\"01.01.2022 20:00 Do the homework\"";
const REQUEST_SHAPE: &str = "<dd.mm.yyyy HH:MM> <text>";

pub fn greeting() -> String {
    format!(
        "Hi! This bot makes sure you do not forget about your important tasks ;)\n\
         To create a reminder send a message in the form {}, for example {}: \
         the date and time you want to be reminded at followed by the text of the reminder.",
        REQUEST_SHAPE, EXAMPLE_REQUEST
    )
}

pub fn confirmation(text: &str, due_at: &NaiveDateTime) -> String {
    format!(
        "I will remind you of \"{}\" {}",
        text,
        due_at.format(DATE_TIME_FORMAT)
    )
}

pub fn parse_failure() -> String {
    format!(
        "Oops, I could not understand what you wrote :) Please send a message in the form {}, for example {}.",
        REQUEST_SHAPE, EXAMPLE_REQUEST
    )
}

pub fn delivery(text: &str) -> String {
    format!("You asked to be reminded of: {}", text)
}
