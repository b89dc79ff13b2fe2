use crate::storage::stored_time;
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Task identifier, derived from the creation time in epoch milliseconds
pub type TaskId = i64;

/// A single to-do entry
///
/// A `createdAt` that is not RFC 3339 is recovered from the id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "StoredTaskRecord")]
pub struct TaskRecord {
    pub id: TaskId,
    /// Trimmed, never empty
    pub text: String,
    pub completed: bool,
    pub created_at: DateTime<Local>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredTaskRecord {
    id: TaskId,
    text: String,
    #[serde(default)]
    completed: bool,
    #[serde(default)]
    created_at: String,
}

impl From<StoredTaskRecord> for TaskRecord {
    fn from(stored: StoredTaskRecord) -> Self {
        Self {
            id: stored.id,
            text: stored.text,
            completed: stored.completed,
            created_at: stored_time(&stored.created_at, stored.id),
        }
    }
}

impl TaskRecord {
    pub fn new(id: TaskId, text: String, created_at: DateTime<Local>) -> Self {
        Self {
            id,
            text,
            completed: false,
            created_at,
        }
    }

    pub fn is_active(&self) -> bool {
        !self.completed
    }
}
