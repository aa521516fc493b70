use crate::reminder::CreateReminderUseCase;
use crate::shared::usecase::execute;
use remindme_bot_domain::{
    parse_reminder, replies, IncomingMessage, IncomingUpdate, START_COMMAND,
};
use remindme_bot_infra::BotContext;
use tracing::{debug, error, info, warn};

/// Which of the received updates may be acknowledged to the transport
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfirmedUpdates {
    None,
    UpTo(i64),
}

impl ConfirmedUpdates {
    /// Offset to ask the transport for on the next poll
    pub fn next_offset(self, current: i64) -> i64 {
        match self {
            Self::None => current,
            Self::UpTo(update_id) => current.max(update_id + 1),
        }
    }
}

/// Routes inbound chat messages to the greeting or the reminder pipeline
pub struct UpdateDispatcher {
    ctx: BotContext,
}

impl UpdateDispatcher {
    pub fn new(ctx: BotContext) -> Self {
        Self { ctx }
    }

    /// Handles a batch of updates one by one. Failures are logged per message,
    /// the whole batch is always reported as consumed.
    pub async fn process(&self, updates: &[IncomingUpdate]) -> ConfirmedUpdates {
        for update in updates {
            info!("Processing update: {}", update.update_id);
            match &update.message {
                Some(IncomingMessage {
                    chat_id,
                    text: Some(text),
                }) => self.handle_message(*chat_id, text).await,
                _ => debug!("Update {} has no text message, skipping", update.update_id),
            }
        }

        updates
            .iter()
            .map(|u| u.update_id)
            .max()
            .map(ConfirmedUpdates::UpTo)
            .unwrap_or(ConfirmedUpdates::None)
    }

    async fn handle_message(&self, chat_id: i64, text: &str) {
        if text == START_COMMAND {
            info!("Chat {} sent {}", chat_id, START_COMMAND);
            self.reply(chat_id, &replies::greeting()).await;
            return;
        }

        match parse_reminder(text) {
            Ok(parsed) => {
                let usecase = CreateReminderUseCase {
                    chat_id,
                    text: parsed.text,
                    due_at: parsed.due_at,
                };
                // Confirmation is sent by the usecase subscriber
                if let Err(e) = execute(usecase, &self.ctx).await {
                    error!("Reminder from chat {} was not saved: {:?}", chat_id, e);
                }
            }
            Err(e) => {
                warn!("Can not parse reminder message from chat {}: {}", chat_id, e);
                self.reply(chat_id, &replies::parse_failure()).await;
            }
        }
    }

    async fn reply(&self, chat_id: i64, text: &str) {
        if let Err(e) = self.ctx.messenger.send_message(chat_id, text).await {
            error!("Unable to reply to chat {}: {:?}", chat_id, e);
        }
    }
}
