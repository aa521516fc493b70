mod inmemory;
mod postgres;

use chrono::NaiveDateTime;
pub use inmemory::InMemoryReminderRepo;
pub use postgres::PostgresReminderRepo;
use remindme_bot_domain::{Reminder, ID};

#[async_trait::async_trait]
pub trait IReminderRepo: Send + Sync {
    /// Stores a new `Reminder` and returns the identifier it was given
    async fn create(&self, chat_id: i64, text: &str, due_at: NaiveDateTime) -> anyhow::Result<ID>;
    /// All `Reminder`s whose `due_at` equals the given minute, ordered by identifier
    async fn find_due_at(&self, due_at: NaiveDateTime) -> anyhow::Result<Vec<Reminder>>;
}
