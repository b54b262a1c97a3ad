//! Task records and creation payloads.

use serde::{Deserialize, Serialize};

use crate::client::Client;
use crate::dedup::marker_for;
use crate::error::{CalTaskError, CalTaskResult};
use crate::event::Event;
use crate::matching::split_summary;

/// A task record owned by the backend.
///
/// The backend's free-form `custom_value1` field holds the marker that
/// ties a task back to the calendar event it was created for.
#[derive(Debug, Clone, Deserialize)]
pub struct Task {
    pub id: String,
    #[serde(rename = "custom_value1", default)]
    pub marker: Option<String>,
    #[serde(default)]
    pub status_id: Option<String>,
    #[serde(default)]
    pub description: String,
    /// JSON-encoded `[[start_epoch, end_epoch], …]` pairs, as stored by
    /// the backend.
    #[serde(default)]
    pub time_log: Option<String>,
    #[serde(default)]
    pub client_id: Option<String>,
}

/// Payload for creating a task on the backend.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewTask {
    pub client_id: String,
    pub status_id: String,
    #[serde(rename = "custom_value1")]
    pub marker: String,
    pub description: String,
    /// JSON-encoded `[[start_epoch, end_epoch]]` (backend wire format).
    pub time_log: String,
}

impl NewTask {
    /// Build the creation payload for an event matched to a client.
    ///
    /// The first summary token is treated as the consumed client-name
    /// segment: the description is the remaining tokens rejoined on the
    /// separator and trimmed. A single-token summary passes through
    /// trimmed.
    pub fn for_event(
        event: &Event,
        client: &Client,
        status_id: &str,
        marker_prefix: &str,
        separator: &str,
    ) -> CalTaskResult<Self> {
        let tokens = split_summary(&event.summary, separator);
        let description = if tokens.len() > 1 {
            tokens[1..].join(separator)
        } else {
            event.summary.clone()
        };

        let intervals = vec![[event.start.timestamp(), event.end.timestamp()]];
        let time_log = serde_json::to_string(&intervals)
            .map_err(|e| CalTaskError::Serialization(e.to_string()))?;

        Ok(NewTask {
            client_id: client.id.clone(),
            status_id: status_id.to_string(),
            marker: marker_for(marker_prefix, &event.uid),
            description: description.trim().to_string(),
            time_log,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn event(uid: &str, summary: &str) -> Event {
        Event {
            uid: uid.to_string(),
            summary: summary.to_string(),
            start: Utc.with_ymd_and_hms(2025, 3, 20, 15, 0, 0).unwrap(),
            end: Utc.with_ymd_and_hms(2025, 3, 20, 16, 0, 0).unwrap(),
        }
    }

    fn acme() -> Client {
        Client {
            id: "c42".to_string(),
            name: "Acme Corp".to_string(),
            archived_at: None,
        }
    }

    #[test]
    fn test_description_drops_leading_client_token() {
        let task = NewTask::for_event(
            &event("uid-1", "Acme Corp,Weekly sync,planning"),
            &acme(),
            "s1",
            "Calendar item ",
            ",",
        )
        .unwrap();

        assert_eq!(task.description, "Weekly sync,planning");
    }

    #[test]
    fn test_single_token_summary_is_kept_verbatim() {
        let task = NewTask::for_event(
            &event("uid-1", "  Weekly sync  "),
            &acme(),
            "s1",
            "Calendar item ",
            ",",
        )
        .unwrap();

        assert_eq!(task.description, "Weekly sync");
    }

    #[test]
    fn test_marker_and_time_log_wire_format() {
        let task = NewTask::for_event(
            &event("uid-7", "Acme,call"),
            &acme(),
            "s1",
            "Calendar item ",
            ",",
        )
        .unwrap();

        assert_eq!(task.marker, "Calendar item uid-7");
        assert_eq!(task.client_id, "c42");
        assert_eq!(task.status_id, "s1");
        assert_eq!(task.time_log, "[[1742482800,1742486400]]");
    }
}
