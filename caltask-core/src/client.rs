//! Client directory record.

use serde::{Deserialize, Serialize};

/// A client record from the backend's directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Client {
    pub id: String,
    pub name: String,
    /// Archive timestamp (epoch seconds). Archived clients are never
    /// considered for matching.
    #[serde(default)]
    pub archived_at: Option<i64>,
}

impl Client {
    pub fn is_archived(&self) -> bool {
        self.archived_at.is_some()
    }
}
