use remindme_bot_domain::IncomingUpdate;

/// Outbound side of the messaging transport
#[async_trait::async_trait]
pub trait IMessenger: Send + Sync {
    async fn send_message(&self, chat_id: i64, text: &str) -> anyhow::Result<()>;
}

/// Inbound side of the messaging transport
#[async_trait::async_trait]
pub trait IUpdatesSource: Send + Sync {
    /// Waits for the next batch of updates. Every update with an id lower
    /// than `offset` is considered consumed and is never returned again.
    async fn get_updates(&self, offset: i64) -> anyhow::Result<Vec<IncomingUpdate>>;
}
