use crate::shared::usecase::{Subscriber, UseCase};
use chrono::NaiveDateTime;
use remindme_bot_domain::{replies, Reminder};
use remindme_bot_infra::BotContext;
use tracing::{error, info};

/// Stores a parsed reminder for a chat
#[derive(Debug)]
pub struct CreateReminderUseCase {
    pub chat_id: i64,
    pub text: String,
    pub due_at: NaiveDateTime,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseErrors {
    StorageError,
}

#[async_trait::async_trait(?Send)]
impl UseCase for CreateReminderUseCase {
    type Response = Reminder;

    type Errors = UseCaseErrors;

    const NAME: &'static str = "CreateReminder";

    async fn execute(&mut self, ctx: &BotContext) -> Result<Self::Response, Self::Errors> {
        let id = ctx
            .repos
            .reminders
            .create(self.chat_id, &self.text, self.due_at)
            .await
            .map_err(|_| UseCaseErrors::StorageError)?;

        info!("Created reminder {} for chat {} due at {}", id, self.chat_id, self.due_at);
        Ok(Reminder::new(id, self.chat_id, self.text.clone(), self.due_at))
    }

    fn subscribers() -> Vec<Box<dyn Subscriber<Self>>>
    where
        Self: Sized,
    {
        vec![Box::new(ConfirmReminderCreated)]
    }
}

/// Tells the chat when it is going to be reminded
pub struct ConfirmReminderCreated;

#[async_trait::async_trait(?Send)]
impl Subscriber<CreateReminderUseCase> for ConfirmReminderCreated {
    async fn notify(&self, reminder: &Reminder, ctx: &BotContext) {
        let text = replies::confirmation(&reminder.text, &reminder.due_at);
        if let Err(e) = ctx.messenger.send_message(reminder.chat_id, &text).await {
            error!(
                "Unable to confirm reminder {} to chat {}: {:?}",
                reminder.id, reminder.chat_id, e
            );
        }
    }
}
