pub mod parser;
pub mod replies;
mod reminder;
mod shared;
mod update;

pub use parser::{parse_reminder, ParseError, ParsedReminder, DATE_TIME_FORMAT, START_COMMAND};
pub use reminder::{truncate_to_minute, Reminder};
pub use shared::entity::ID;
pub use update::{IncomingMessage, IncomingUpdate};
