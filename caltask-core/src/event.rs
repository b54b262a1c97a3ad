//! Provider-neutral calendar event type.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A calendar event as delivered by the feed.
///
/// The summary doubles as display text and as the matching signal for
/// client assignment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// Globally unique identifier of the calendar entry (ICS UID)
    pub uid: String,
    pub summary: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}
