//! services/client/src/config.rs
//!
//! Defines the application's configuration structure and loading logic.
//!
//! All configuration is loaded from environment variables at startup. The `.env`
//! file is used for local development.

use std::time::Duration;
use tracing::Level;

/// A custom error type for configuration loading failures.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for the environment variable {0}: {1}")]
    InvalidValue(String, String),
}

/// Holds all configuration loaded from the environment at startup.
#[derive(Clone, Debug)]
pub struct Config {
    pub log_level: Level,
    /// Latency of the simulated bot reply.
    pub bot_reply_delay: Duration,
    /// Latency of every other simulated remote call.
    pub simulated_latency: Duration,
    pub max_file_size: u64,
    pub chat_simulation: bool,
    pub seed_demo_data: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: Level::INFO,
            bot_reply_delay: Duration::from_millis(1000),
            simulated_latency: Duration::from_millis(300),
            max_file_size: 10 * 1024 * 1024,
            chat_simulation: true,
            seed_demo_data: true,
        }
    }
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// It will look for a `.env` file in the current directory for development,
    /// but this is skipped in test environments to ensure tests are hermetic.
    pub fn from_env() -> Result<Self, ConfigError> {
        if !cfg!(test) {
            dotenvy::dotenv().ok();
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup. Unset keys fall
    /// back to the defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let log_level = match lookup("RUST_LOG") {
            Some(raw) => raw.parse::<Level>().map_err(|_| {
                ConfigError::InvalidValue(
                    "RUST_LOG".to_string(),
                    format!("'{}' is not a valid log level", raw),
                )
            })?,
            None => defaults.log_level,
        };

        let bot_reply_delay = lookup("BOT_REPLY_DELAY_MS")
            .map(|raw| parse_number("BOT_REPLY_DELAY_MS", &raw).map(Duration::from_millis))
            .transpose()?
            .unwrap_or(defaults.bot_reply_delay);

        let simulated_latency = lookup("SIMULATED_LATENCY_MS")
            .map(|raw| parse_number("SIMULATED_LATENCY_MS", &raw).map(Duration::from_millis))
            .transpose()?
            .unwrap_or(defaults.simulated_latency);

        let max_file_size = lookup("MAX_FILE_SIZE")
            .map(|raw| parse_number("MAX_FILE_SIZE", &raw))
            .transpose()?
            .unwrap_or(defaults.max_file_size);

        let chat_simulation = lookup("CHAT_SIMULATION")
            .map(|raw| parse_flag("CHAT_SIMULATION", &raw))
            .transpose()?
            .unwrap_or(defaults.chat_simulation);

        let seed_demo_data = lookup("SEED_DEMO_DATA")
            .map(|raw| parse_flag("SEED_DEMO_DATA", &raw))
            .transpose()?
            .unwrap_or(defaults.seed_demo_data);

        Ok(Self {
            log_level,
            bot_reply_delay,
            simulated_latency,
            max_file_size,
            chat_simulation,
            seed_demo_data,
        })
    }
}

fn parse_number(key: &str, raw: &str) -> Result<u64, ConfigError> {
    raw.trim()
        .parse::<u64>()
        .map_err(|e| ConfigError::InvalidValue(key.to_string(), e.to_string()))
}

fn parse_flag(key: &str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        other => Err(ConfigError::InvalidValue(
            key.to_string(),
            format!("'{}' is not a boolean", other),
        )),
    }
}
