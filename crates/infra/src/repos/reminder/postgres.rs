use super::IReminderRepo;
use chrono::NaiveDateTime;
use remindme_bot_domain::{Reminder, ID};
use sqlx::{FromRow, PgPool};
use tracing::error;

pub struct PostgresReminderRepo {
    pool: PgPool,
}

impl PostgresReminderRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ReminderRaw {
    reminder_id: i64,
    chat_id: i64,
    text: String,
    due_at: NaiveDateTime,
}

impl From<ReminderRaw> for Reminder {
    fn from(e: ReminderRaw) -> Self {
        Reminder::new(e.reminder_id.into(), e.chat_id, e.text, e.due_at)
    }
}

#[async_trait::async_trait]
impl IReminderRepo for PostgresReminderRepo {
    async fn create(&self, chat_id: i64, text: &str, due_at: NaiveDateTime) -> anyhow::Result<ID> {
        let reminder_id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO reminders(chat_id, text, due_at)
            VALUES($1, $2, $3)
            RETURNING reminder_id
            "#,
        )
        .bind(chat_id)
        .bind(text)
        .bind(due_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Unable to insert reminder for chat: {} due at: {}. DB returned error: {:?}",
                chat_id, due_at, e
            );
            e
        })?;

        Ok(reminder_id.into())
    }

    async fn find_due_at(&self, due_at: NaiveDateTime) -> anyhow::Result<Vec<Reminder>> {
        let reminders: Vec<ReminderRaw> = sqlx::query_as(
            r#"
            SELECT reminder_id, chat_id, text, due_at FROM reminders
            WHERE due_at = $1
            ORDER BY reminder_id
            "#,
        )
        .bind(due_at)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Find reminders due at: {} failed. DB returned error: {:?}",
                due_at, e
            );
            e
        })?;

        Ok(reminders.into_iter().map(|r| r.into()).collect())
    }
}
