mod config;
mod repos;
mod services;
mod system;

pub use config::Config;
pub use repos::{IReminderRepo, InMemoryReminderRepo, PostgresReminderRepo, Repos};
pub use services::*;
use std::sync::Arc;
pub use system::{ISys, RealSys, StaticTimeSys};
use tracing::warn;

#[derive(Clone)]
pub struct BotContext {
    pub repos: Repos,
    pub config: Config,
    pub sys: Arc<dyn ISys>,
    pub messenger: Arc<dyn IMessenger>,
    pub updates: Arc<dyn IUpdatesSource>,
}

impl BotContext {
    /// Context where nothing leaves the process: inmemory store and transport
    pub fn create_inmemory() -> Self {
        Self {
            repos: Repos::create_inmemory(),
            config: Config::new(),
            sys: Arc::new(RealSys {}),
            messenger: Arc::new(InMemoryMessenger::new()),
            updates: Arc::new(InMemoryUpdatesSource::new()),
        }
    }
}

/// Will setup the infrastructure context given the environment
pub async fn setup_context() -> anyhow::Result<BotContext> {
    let config = Config::new();

    let token = match &config.telegram_bot_token {
        Some(token) => token.clone(),
        None => anyhow::bail!("TELEGRAM_BOT_TOKEN env var to be present."),
    };
    let telegram = Arc::new(TelegramBotApi::new(
        &config.telegram_api_url,
        &token,
        config.poll_timeout_secs,
    )?);

    let repos = match get_psql_connection_string() {
        Some(connection_string) => Repos::create_postgres(&connection_string).await?,
        None => {
            warn!("DATABASE_URL is not set, reminders are only kept in memory and are lost on restart.");
            Repos::create_inmemory()
        }
    };

    Ok(BotContext {
        repos,
        config,
        sys: Arc::new(RealSys {}),
        messenger: telegram.clone(),
        updates: telegram,
    })
}

fn get_psql_connection_string() -> Option<String> {
    const PSQL_CONNECTION_STRING: &str = "DATABASE_URL";

    std::env::var(PSQL_CONNECTION_STRING).ok()
}
