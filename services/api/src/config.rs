//! services/api/src/config.rs
//!
//! Defines the application's configuration structure and loading logic.
//!
//! All configuration is loaded from environment variables at startup. The `.env`
//! file is used for local development.

use std::net::SocketAddr;
use tracing::Level;

/// A custom error type for configuration loading failures.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing the environment variable {0}")]
    MissingVar(String),
    #[error("Invalid value for the environment variable {0}: {1}")]
    InvalidValue(String, String),
}

/// Holds all configuration loaded from the environment at startup.
#[derive(Clone, Debug)]
pub struct Config {
    pub bind_address: SocketAddr,
    /// `None` runs the service on the in-memory store.
    pub database_url: Option<String>,
    pub database_max_connections: u32,
    pub log_level: Level,
    pub openai_api_key: String,
    /// Overrides the provider endpoint for OpenAI-compatible gateways.
    pub openai_base_url: Option<String>,
    pub chat_model: String,
    pub context_cache: bool,
    /// `None` allows any origin.
    pub cors_origin: Option<String>,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// It will look for a `.env` file in the current directory for development,
    /// but this is skipped in test environments to ensure tests are hermetic.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Only load from .env in non-test mode to avoid contamination.
        if !cfg!(test) {
            dotenvy::dotenv().ok();
        }

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Blank values count as unset.
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        // --- Load Server and Database Settings ---
        let bind_address_str = var("BIND_ADDRESS").unwrap_or_else(|| "0.0.0.0:3000".to_string());
        let bind_address = bind_address_str.parse::<SocketAddr>().map_err(|e| {
            ConfigError::InvalidValue("BIND_ADDRESS".to_string(), e.to_string())
        })?;

        let database_url = var("DATABASE_URL");

        let database_max_connections = match var("DATABASE_MAX_CONNECTIONS") {
            Some(raw) => raw.parse::<u32>().ok().filter(|n| *n > 0).ok_or_else(|| {
                ConfigError::InvalidValue(
                    "DATABASE_MAX_CONNECTIONS".to_string(),
                    format!("'{}' is not a positive integer", raw),
                )
            })?,
            None => 5,
        };

        let log_level_str = var("RUST_LOG").unwrap_or_else(|| "INFO".to_string());
        let log_level = log_level_str.parse::<Level>().map_err(|_| {
            ConfigError::InvalidValue(
                "RUST_LOG".to_string(),
                format!("'{}' is not a valid log level", log_level_str),
            )
        })?;

        // --- Load Completion Provider Settings ---
        let openai_api_key = var("OPENAI_API_KEY")
            .or_else(|| var("AI_INTEGRATIONS_OPENAI_API_KEY"))
            .ok_or_else(|| ConfigError::MissingVar("OPENAI_API_KEY".to_string()))?;
        let openai_base_url =
            var("OPENAI_BASE_URL").or_else(|| var("AI_INTEGRATIONS_OPENAI_BASE_URL"));
        let chat_model = var("CHAT_MODEL").unwrap_or_else(|| "gpt-4o".to_string());

        // --- Load Web Settings ---
        let context_cache = match var("CONTEXT_CACHE") {
            Some(raw) => parse_flag(&raw).ok_or_else(|| {
                ConfigError::InvalidValue(
                    "CONTEXT_CACHE".to_string(),
                    format!("'{}' is not a boolean", raw),
                )
            })?,
            None => true,
        };
        let cors_origin = var("CORS_ORIGIN");

        Ok(Self {
            bind_address,
            database_url,
            database_max_connections,
            log_level,
            openai_api_key,
            openai_base_url,
            chat_model,
            context_cache,
            cors_origin,
        })
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
