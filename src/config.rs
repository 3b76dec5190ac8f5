// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application configuration loaded from environment variables.
//!
//! Configuration is read once at startup and handed to the services that
//! need it; nothing else in the crate touches the process environment.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_TIMEOUT_MS: u64 = 5000;
const DEFAULT_SEARCH_LIMIT: u32 = 10;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    // --- Secrets ---
    /// LocationIQ API key (autocomplete and search)
    pub locationiq_api_key: String,
    /// Gemini API key (description generation)
    pub gemini_api_key: String,

    // --- Server ---
    /// Server port
    pub port: u16,
    /// Frontend URL allowed by CORS
    pub frontend_url: String,
    /// Directory of static assets served as a fallback
    pub static_dir: PathBuf,
    /// CSV file quests are appended to
    pub quest_log_path: PathBuf,

    // --- Providers ---
    pub locationiq_base_url: String,
    pub wikipedia_base_url: String,
    pub gemini_base_url: String,
    pub gemini_model: String,
    /// Timeout for geocoding and text generation calls
    pub provider_timeout: Duration,
    /// Timeout for per-candidate encyclopedia lookups
    pub summary_timeout: Duration,
    /// Result cap passed to the geocoding provider
    pub search_limit: u32,
}

impl Config {
    /// Load configuration from environment variables (and `.env` if present).
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let port = match env::var("APP_PORT").or_else(|_| env::var("PORT")) {
            Ok(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::Invalid("APP_PORT", raw))?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(Self {
            locationiq_api_key: required("LOCATIONIQ_API_KEY")?,
            gemini_api_key: required("GEMINI_API_KEY")?,
            port,
            frontend_url: env::var("FRONTEND_URL")
                .unwrap_or_else(|_| format!("http://localhost:{}", port)),
            static_dir: env::var("STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("public")),
            quest_log_path: env::var("QUEST_LOG_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("quests.csv")),
            locationiq_base_url: env::var("LOCATIONIQ_BASE_URL")
                .unwrap_or_else(|_| "https://api.locationiq.com/v1".to_string()),
            wikipedia_base_url: env::var("WIKIPEDIA_BASE_URL")
                .unwrap_or_else(|_| "https://en.wikipedia.org/api/rest_v1".to_string()),
            gemini_base_url: env::var("GEMINI_BASE_URL")
                .unwrap_or_else(|_| "https://generativelanguage.googleapis.com".to_string()),
            gemini_model: env::var("GEMINI_MODEL")
                .unwrap_or_else(|_| "gemini-1.5-flash".to_string()),
            provider_timeout: Duration::from_millis(parse_or(
                "PROVIDER_TIMEOUT_MS",
                DEFAULT_TIMEOUT_MS,
            )?),
            summary_timeout: Duration::from_millis(parse_or(
                "SUMMARY_TIMEOUT_MS",
                DEFAULT_TIMEOUT_MS,
            )?),
            search_limit: parse_or("SEARCH_RESULT_LIMIT", DEFAULT_SEARCH_LIMIT)?,
        })
    }

    /// Config for tests. Provider URLs point at an unroutable address.
    pub fn test_default() -> Self {
        Self {
            locationiq_api_key: "test_locationiq_key".to_string(),
            gemini_api_key: "test_gemini_key".to_string(),
            port: DEFAULT_PORT,
            frontend_url: "http://localhost:3000".to_string(),
            static_dir: PathBuf::from("public"),
            quest_log_path: PathBuf::from("quests.csv"),
            locationiq_base_url: "http://127.0.0.1:9".to_string(),
            wikipedia_base_url: "http://127.0.0.1:9".to_string(),
            gemini_base_url: "http://127.0.0.1:9".to_string(),
            gemini_model: "gemini-1.5-flash".to_string(),
            provider_timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
            summary_timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
            search_limit: DEFAULT_SEARCH_LIMIT,
        }
    }
}

fn required(name: &'static str) -> Result<String, ConfigError> {
    env::var(name)
        .map(|v| v.trim().to_string())
        .ok()
        .filter(|v| !v.is_empty())
        .ok_or(ConfigError::Missing(name))
}

fn parse_or<T: std::str::FromStr>(name: &'static str, default: T) -> Result<T, ConfigError> {
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid(name, raw)),
        Err(_) => Ok(default),
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),

    #[error("Invalid value for {0}: {1:?}")]
    Invalid(&'static str, String),
}
