use crate::shared::usecase::UseCase;
use chrono::NaiveDateTime;
use remindme_bot_domain::{replies, truncate_to_minute, ID};
use remindme_bot_infra::{BotContext, ISys};
use tracing::{debug, error, info};

/// Delivers every reminder that is due at the given minute
#[derive(Debug)]
pub struct SendDueRemindersUseCase {
    /// Minute truncated, compared for equality with the stored `due_at`s
    pub due_at: NaiveDateTime,
}

impl SendDueRemindersUseCase {
    pub fn for_current_minute(sys: &dyn ISys) -> Self {
        Self {
            due_at: truncate_to_minute(sys.local_now()),
        }
    }
}

#[derive(Debug, PartialEq)]
pub struct DeliveryReport {
    pub due_at: NaiveDateTime,
    pub delivered: Vec<ID>,
    pub failed: Vec<ID>,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseErrors {
    StorageError,
}

#[async_trait::async_trait(?Send)]
impl UseCase for SendDueRemindersUseCase {
    type Response = DeliveryReport;

    type Errors = UseCaseErrors;

    const NAME: &'static str = "SendDueReminders";

    /// This will run every minute
    async fn execute(&mut self, ctx: &BotContext) -> Result<Self::Response, Self::Errors> {
        let reminders = ctx
            .repos
            .reminders
            .find_due_at(self.due_at)
            .await
            .map_err(|_| UseCaseErrors::StorageError)?;

        let mut report = DeliveryReport {
            due_at: self.due_at,
            delivered: Vec::with_capacity(reminders.len()),
            failed: Vec::new(),
        };
        if reminders.is_empty() {
            debug!("No reminders due at {}", self.due_at);
            return Ok(report);
        }

        // Every reminder is attempted, one unreachable chat must not
        // hold back the rest of the due set
        for reminder in reminders {
            let text = replies::delivery(&reminder.text);
            match ctx.messenger.send_message(reminder.chat_id, &text).await {
                Ok(_) => report.delivered.push(reminder.id),
                Err(e) => {
                    error!(
                        "Error delivering reminder {} to chat {}: {:?}",
                        reminder.id, reminder.chat_id, e
                    );
                    report.failed.push(reminder.id);
                }
            }
        }

        info!(
            "Reminders due at {}: {} delivered, {} failed",
            self.due_at,
            report.delivered.len(),
            report.failed.len()
        );
        Ok(report)
    }
}
