mod inmemory;
mod telegram;
mod transport;

pub use inmemory::{InMemoryMessenger, InMemoryUpdatesSource, SentMessage};
pub use telegram::TelegramBotApi;
pub use transport::{IMessenger, IUpdatesSource};
