use crate::shared::entity::ID;
use chrono::{NaiveDateTime, Timelike};

/// A `Reminder` is a text that should be sent back to the chat it
/// came from at `due_at`.
#[derive(Debug, Clone, PartialEq)]
pub struct Reminder {
    /// Assigned by the store on creation
    pub id: ID,
    /// The chat that asked for the `Reminder` and which will receive it
    pub chat_id: i64,
    /// Body of the reminder exactly as it was parsed from the message
    pub text: String,
    /// Local wall clock minute at which the `Reminder` is delivered.
    /// Always truncated to the minute so that it can be compared with the
    /// minute the scheduler is currently running for.
    pub due_at: NaiveDateTime,
}

impl Reminder {
    pub fn new(id: ID, chat_id: i64, text: String, due_at: NaiveDateTime) -> Self {
        Self {
            id,
            chat_id,
            text,
            due_at: truncate_to_minute(due_at),
        }
    }
}

/// Drops seconds and sub-second precision
pub fn truncate_to_minute(datetime: NaiveDateTime) -> NaiveDateTime {
    datetime
        .with_second(0)
        .and_then(|dt| dt.with_nanosecond(0))
        .unwrap_or(datetime)
}
