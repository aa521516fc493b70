use super::transport::{IMessenger, IUpdatesSource};
use remindme_bot_domain::IncomingUpdate;
use std::sync::{Mutex, MutexGuard};
use std::time::Duration;

fn lock<T>(m: &Mutex<T>) -> MutexGuard<'_, T> {
    m.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[derive(Debug, Clone, PartialEq)]
pub struct SentMessage {
    pub chat_id: i64,
    pub text: String,
}

/// Records every message instead of sending it.
/// Sending to one of the `failing_chats` returns an error.
pub struct InMemoryMessenger {
    sent: Mutex<Vec<SentMessage>>,
    failing_chats: Mutex<Vec<i64>>,
}

impl InMemoryMessenger {
    pub fn new() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            failing_chats: Mutex::new(Vec::new()),
        }
    }

    pub fn fail_for_chat(&self, chat_id: i64) {
        lock(&self.failing_chats).push(chat_id);
    }

    pub fn sent_messages(&self) -> Vec<SentMessage> {
        lock(&self.sent).clone()
    }
}

impl Default for InMemoryMessenger {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl IMessenger for InMemoryMessenger {
    async fn send_message(&self, chat_id: i64, text: &str) -> anyhow::Result<()> {
        if lock(&self.failing_chats).contains(&chat_id) {
            anyhow::bail!("Chat {} is unreachable", chat_id);
        }
        lock(&self.sent).push(SentMessage {
            chat_id,
            text: text.to_string(),
        });
        Ok(())
    }
}

/// Queue of updates pushed by tests. Behaves like long polling:
/// waits a little when there is nothing new to return.
pub struct InMemoryUpdatesSource {
    pending: Mutex<Vec<IncomingUpdate>>,
    poll_wait: Duration,
}

impl InMemoryUpdatesSource {
    pub fn new() -> Self {
        Self {
            pending: Mutex::new(Vec::new()),
            poll_wait: Duration::from_millis(50),
        }
    }

    pub fn push(&self, update: IncomingUpdate) {
        lock(&self.pending).push(update);
    }

    /// Updates that have not been acknowledged yet
    pub fn unconfirmed(&self) -> Vec<IncomingUpdate> {
        lock(&self.pending).clone()
    }
}

impl Default for InMemoryUpdatesSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl IUpdatesSource for InMemoryUpdatesSource {
    async fn get_updates(&self, offset: i64) -> anyhow::Result<Vec<IncomingUpdate>> {
        let updates = {
            let mut pending = lock(&self.pending);
            pending.retain(|u| u.update_id >= offset);
            pending.clone()
        };
        if updates.is_empty() {
            tokio::time::sleep(self.poll_wait).await;
        }
        Ok(updates)
    }
}
