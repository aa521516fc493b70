use std::str::FromStr;
use tracing::{info, warn};

const DEFAULT_PORT: u16 = 5000;
const DEFAULT_TELEGRAM_API_URL: &str = "https://api.telegram.org";
const DEFAULT_POLL_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone)]
pub struct Config {
    /// Token of the bot issued by Telegram. Only needed when talking
    /// to the real Telegram Bot API, tests run without it.
    pub telegram_bot_token: Option<String>,
    /// Base url of the Telegram Bot API, can be pointed to a local
    /// Bot API server
    pub telegram_api_url: String,
    /// How long a single `getUpdates` long polling request is allowed
    /// to wait for new updates
    pub poll_timeout_secs: u64,
    /// Port for the health check server to run on
    pub port: u16,
}

impl Config {
    pub fn new() -> Self {
        let telegram_bot_token = std::env::var("TELEGRAM_BOT_TOKEN")
            .ok()
            .filter(|token| !token.trim().is_empty());
        if telegram_bot_token.is_none() {
            info!("Did not find TELEGRAM_BOT_TOKEN environment variable.");
        }
        let telegram_api_url = std::env::var("TELEGRAM_API_URL")
            .unwrap_or_else(|_| DEFAULT_TELEGRAM_API_URL.into())
            .trim_end_matches('/')
            .to_string();

        Self {
            telegram_bot_token,
            telegram_api_url,
            poll_timeout_secs: parse_env_or("TELEGRAM_POLL_TIMEOUT_SECS", DEFAULT_POLL_TIMEOUT_SECS),
            port: parse_env_or("PORT", DEFAULT_PORT),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_env_or<T: FromStr + std::fmt::Display>(name: &str, default: T) -> T {
    let value = match std::env::var(name) {
        Ok(value) => value,
        Err(_) => return default,
    };
    match value.parse::<T>() {
        Ok(parsed) => parsed,
        Err(_) => {
            warn!(
                "The given {}: {} is not valid, falling back to the default: {}.",
                name, value, default
            );
            default
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn falls_back_to_default_on_invalid_values() {
        std::env::set_var("REMINDME_TEST_INVALID_PORT", "not-a-port");
        assert_eq!(parse_env_or("REMINDME_TEST_INVALID_PORT", 5000_u16), 5000);
        std::env::set_var("REMINDME_TEST_VALID_PORT", "8080");
        assert_eq!(parse_env_or("REMINDME_TEST_VALID_PORT", 5000_u16), 8080);
        assert_eq!(parse_env_or("REMINDME_TEST_MISSING_PORT", 5000_u16), 5000);
    }
}
