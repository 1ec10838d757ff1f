use anyhow::{Context, Result};

use crate::locale::Locale;

/// Opened by the dock's external-link action when `GITHUB_REPO_URL` is unset.
/// Deployments point this at their own repository.
pub const DEFAULT_REPO_URL: &str = "https://github.com";

/// Application configuration loaded from environment variables.
/// Every variable has a default; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub repo_url: String,
    /// Minimum interval between two height reads of the preview container.
    pub throttle_ms: u64,
    pub locale: Locale,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: env_or("PORT", "8080")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: env_or("RUST_LOG", "info"),
            repo_url: env_or("GITHUB_REPO_URL", DEFAULT_REPO_URL),
            throttle_ms: env_or("PREVIEW_THROTTLE_MS", "100")
                .parse::<u64>()
                .context("PREVIEW_THROTTLE_MS must be a whole number of milliseconds")?,
            locale: env_or("PREVIEW_LOCALE", "zh")
                .parse::<Locale>()
                .context("PREVIEW_LOCALE must be one of: zh, en")?,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: 8080,
            rust_log: "info".to_string(),
            repo_url: DEFAULT_REPO_URL.to_string(),
            throttle_ms: 100,
            locale: Locale::Zh,
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
