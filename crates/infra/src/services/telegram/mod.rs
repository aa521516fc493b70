mod types;

use super::transport::{IMessenger, IUpdatesSource};
use remindme_bot_domain::IncomingUpdate;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, error};
use types::*;

/// Extra time on top of the long polling timeout before the
/// http client gives up on a `getUpdates` request
const REQUEST_TIMEOUT_MARGIN_SECS: u64 = 10;

/// Client of the Telegram Bot API using long polling for updates
pub struct TelegramBotApi {
    client: Client,
    /// `<api url>/bot<token>`
    base_url: String,
    poll_timeout_secs: u64,
}

impl TelegramBotApi {
    pub fn new(api_url: &str, token: &str, poll_timeout_secs: u64) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(
                poll_timeout_secs + REQUEST_TIMEOUT_MARGIN_SECS,
            ))
            .build()?;

        Ok(Self {
            client,
            base_url: format!("{}/bot{}", api_url, token),
            poll_timeout_secs,
        })
    }

    fn method_url(&self, method: &str) -> String {
        format!("{}/{}", self.base_url, method)
    }
}

#[async_trait::async_trait]
impl IUpdatesSource for TelegramBotApi {
    async fn get_updates(&self, offset: i64) -> anyhow::Result<Vec<IncomingUpdate>> {
        let body = GetUpdatesRequest {
            offset,
            timeout: self.poll_timeout_secs,
            allowed_updates: vec!["message"],
        };
        let res = self
            .client
            .post(self.method_url("getUpdates"))
            .json(&body)
            .send()
            .await?
            .json::<TelegramResponse<Vec<TelegramUpdate>>>()
            .await?;

        let updates = res.into_result()?;
        debug!("Received {} updates from offset {}", updates.len(), offset);
        Ok(updates.into_iter().map(|u| u.into()).collect())
    }
}

#[async_trait::async_trait]
impl IMessenger for TelegramBotApi {
    async fn send_message(&self, chat_id: i64, text: &str) -> anyhow::Result<()> {
        let body = SendMessageRequest { chat_id, text };
        let res = self
            .client
            .post(self.method_url("sendMessage"))
            .json(&body)
            .send()
            .await?
            .json::<TelegramResponse<serde_json::Value>>()
            .await?;

        res.into_result().map(|_| ()).map_err(|e| {
            error!("Telegram rejected message to chat {}: {:?}", chat_id, e);
            e
        })
    }
}
