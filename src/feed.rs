//! ICS calendar feed client.

use anyhow::{Context, Result};
use caltask_core::Event;
use caltask_core::ics;
use caltask_core::lookback::LookbackWindow;

/// Client for a read-only ICS feed.
pub struct Feed {
    http: reqwest::Client,
    url: String,
}

impl Feed {
    pub fn new(url: &str) -> Self {
        Feed {
            http: reqwest::Client::new(),
            url: url.to_string(),
        }
    }

    /// Fetch the feed and return events whose start falls inside the
    /// window, in feed order.
    pub async fn events(&self, window: &LookbackWindow) -> Result<Vec<Event>> {
        let resp = self
            .http
            .get(&self.url)
            .send()
            .await
            .context("Failed to fetch calendar feed")?;

        if !resp.status().is_success() {
            anyhow::bail!("Calendar feed returned {}", resp.status());
        }

        let body = resp
            .text()
            .await
            .context("Failed to read calendar feed body")?;
        let events = ics::parse_events(&body)?;

        Ok(events
            .into_iter()
            .filter(|e| window.contains(e.start))
            .collect())
    }
}
