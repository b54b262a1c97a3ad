//! Lookback window for bounding which events are considered.

use chrono::{DateTime, Duration, Utc};

/// Trailing time window: `now - days` up to `now`.
///
/// The feed is filtered against this window so that only recent events are
/// reconciled; anything older falls out of scope naturally.
#[derive(Debug, Clone, Copy)]
pub struct LookbackWindow {
    pub from: DateTime<Utc>,
    pub to: DateTime<Utc>,
}

impl LookbackWindow {
    /// Window covering the last `days` days, ending now.
    pub fn last_days(days: u32) -> Self {
        let now = Utc::now();
        LookbackWindow {
            from: now - Duration::days(days as i64),
            to: now,
        }
    }

    /// Whether `t` falls inside the window (bounds inclusive).
    pub fn contains(&self, t: DateTime<Utc>) -> bool {
        self.from <= t && t <= self.to
    }
}
