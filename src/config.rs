//! Environment-backed configuration.
//!
//! Everything is read once at startup into a plain value struct; core
//! logic never looks at the environment.

use anyhow::{Context, Result};

/// Default number of trailing days to consider.
const DEFAULT_LOOKBACK_DAYS: u32 = 30;
/// Default page size for backend list calls.
const DEFAULT_PER_PAGE: u32 = 100;
/// Safety ceiling on pages fetched per collection.
const DEFAULT_PAGE_CAP: u32 = 10;
/// Prefix written into a task's reference field ahead of the event uid.
const DEFAULT_MARKER_PREFIX: &str = "Calendar item ";
/// Separator used to split event summaries into tokens.
const DEFAULT_SEPARATOR: &str = ",";

#[derive(Debug, Clone)]
pub struct Config {
    pub feed_url: String,
    pub backend_url: String,
    pub backend_token: String,
    pub status_id: String,
    pub lookback_days: u32,
    pub marker_prefix: String,
    pub separator: String,
    pub per_page: u32,
    pub page_cap: u32,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let config = Config {
            feed_url: require("CALTASK_FEED_URL")?,
            backend_url: require("CALTASK_BACKEND_URL")?,
            backend_token: require("CALTASK_BACKEND_TOKEN")?,
            status_id: require("CALTASK_STATUS_ID")?,
            lookback_days: numeric("CALTASK_LOOKBACK_DAYS", DEFAULT_LOOKBACK_DAYS)?,
            marker_prefix: optional("CALTASK_MARKER_PREFIX", DEFAULT_MARKER_PREFIX),
            separator: optional("CALTASK_SEPARATOR", DEFAULT_SEPARATOR),
            per_page: numeric("CALTASK_PER_PAGE", DEFAULT_PER_PAGE)?,
            page_cap: numeric("CALTASK_PAGE_CAP", DEFAULT_PAGE_CAP)?,
        };

        if config.separator.is_empty() {
            anyhow::bail!("CALTASK_SEPARATOR must not be empty");
        }

        Ok(config)
    }

    /// Apply a per-run override of the lookback window.
    pub fn with_days(mut self, days: Option<u32>) -> Self {
        if let Some(days) = days {
            self.lookback_days = days;
        }
        self
    }
}

fn require(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Missing required environment variable {key}"))
}

fn optional(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn numeric<T: std::str::FromStr>(key: &str, default: T) -> Result<T> {
    match std::env::var(key) {
        Ok(raw) => raw
            .parse()
            .map_err(|_| anyhow::anyhow!("Invalid value for {key}: '{raw}' is not a number")),
        Err(_) => Ok(default),
    }
}
