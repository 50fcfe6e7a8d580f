//! Runtime configuration: credential, endpoint and reveal delay

use std::time::Duration;

pub const API_KEY_ENV: &str = "OPENWEATHER_API_KEY";
pub const DEFAULT_ENDPOINT: &str = "https://api.openweathermap.org/data/2.5/weather";
pub const DEFAULT_REVEAL_DELAY_MS: u64 = 1000;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing OpenWeather API key (set OPENWEATHER_API_KEY or pass --api-key)")]
    MissingApiKey,
    #[error("invalid endpoint URL: {0}")]
    InvalidEndpoint(String),
}

#[derive(Clone, Debug)]
pub struct Config {
    pub api_key: String,
    pub endpoint: String,
    /// Pause between knowing a lookup outcome and showing it
    pub reveal_delay: Duration,
}

impl Config {
    /// Validate raw settings. A blank key counts as missing.
    pub fn new(
        api_key: Option<String>,
        endpoint: impl Into<String>,
        reveal_delay: Duration,
    ) -> Result<Self, ConfigError> {
        let api_key = api_key
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty())
            .ok_or(ConfigError::MissingApiKey)?;

        let endpoint = endpoint.into();
        match reqwest::Url::parse(&endpoint) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => {}
            _ => return Err(ConfigError::InvalidEndpoint(endpoint)),
        }

        Ok(Self {
            api_key,
            endpoint,
            reveal_delay,
        })
    }
}
