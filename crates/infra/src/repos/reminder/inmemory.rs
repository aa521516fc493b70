use super::IReminderRepo;
use crate::repos::shared::inmemory_repo::*;
use chrono::NaiveDateTime;
use remindme_bot_domain::{Reminder, ID};
use std::sync::atomic::{AtomicI64, Ordering};

pub struct InMemoryReminderRepo {
    reminders: std::sync::Mutex<Vec<Reminder>>,
    next_id: AtomicI64,
}

impl InMemoryReminderRepo {
    pub fn new() -> Self {
        Self {
            reminders: std::sync::Mutex::new(Vec::new()),
            next_id: AtomicI64::new(1),
        }
    }
}

impl Default for InMemoryReminderRepo {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl IReminderRepo for InMemoryReminderRepo {
    async fn create(&self, chat_id: i64, text: &str, due_at: NaiveDateTime) -> anyhow::Result<ID> {
        let id = ID::from(self.next_id.fetch_add(1, Ordering::SeqCst));
        let reminder = Reminder::new(id, chat_id, text.to_string(), due_at);
        insert(&reminder, &self.reminders);
        Ok(id)
    }

    async fn find_due_at(&self, due_at: NaiveDateTime) -> anyhow::Result<Vec<Reminder>> {
        let mut reminders = find_by(&self.reminders, |r| r.due_at == due_at);
        reminders.sort_by_key(|r| r.id);
        Ok(reminders)
    }
}
