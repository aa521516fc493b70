use remindme_bot_domain::{IncomingMessage, IncomingUpdate};
use serde::{Deserialize, Serialize};

/// Every Bot API response is wrapped in this envelope
#[derive(Debug, Deserialize)]
pub struct TelegramResponse<T> {
    pub ok: bool,
    pub result: Option<T>,
    #[serde(default)]
    pub description: Option<String>,
}

impl<T> TelegramResponse<T> {
    pub fn into_result(self) -> anyhow::Result<T> {
        match (self.ok, self.result) {
            (true, Some(result)) => Ok(result),
            (_, _) => Err(anyhow::Error::msg(
                self.description
                    .unwrap_or_else(|| "Telegram Bot API returned no result".into()),
            )),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct GetUpdatesRequest {
    pub offset: i64,
    pub timeout: u64,
    pub allowed_updates: Vec<&'static str>,
}

#[derive(Debug, Serialize)]
pub struct SendMessageRequest<'a> {
    pub chat_id: i64,
    pub text: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct TelegramUpdate {
    pub update_id: i64,
    #[serde(default)]
    pub message: Option<TelegramMessage>,
}

#[derive(Debug, Deserialize)]
pub struct TelegramMessage {
    pub chat: TelegramChat,
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct TelegramChat {
    pub id: i64,
}

impl From<TelegramUpdate> for IncomingUpdate {
    fn from(u: TelegramUpdate) -> Self {
        Self {
            update_id: u.update_id,
            message: u.message.map(|m| IncomingMessage {
                chat_id: m.chat.id,
                text: m.text,
            }),
        }
    }
}
