use crate::storage::stored_time;
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of a timed period
///
/// Doubles as the timer's mode flag and as the `type` of a session record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SessionKind {
    /// Focused work period
    Work,
    /// Rest period following a work session
    Break,
}

impl SessionKind {
    /// The other kind; sessions always alternate
    pub fn flipped(self) -> Self {
        match self {
            SessionKind::Work => SessionKind::Break,
            SessionKind::Break => SessionKind::Work,
        }
    }

    /// Lowercase name used in notifications ("work", "break")
    pub fn noun(self) -> &'static str {
        match self {
            SessionKind::Work => "work",
            SessionKind::Break => "break",
        }
    }
}

impl fmt::Display for SessionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionKind::Work => write!(f, "Work"),
            SessionKind::Break => write!(f, "Break"),
        }
    }
}

/// An entry in the log of completed sessions
///
/// Records are appended when a countdown expires and are never edited.
/// A `completedAt` that is not RFC 3339 is recovered from `timestamp`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "StoredSessionRecord")]
pub struct SessionRecord {
    #[serde(rename = "type")]
    pub kind: SessionKind,
    /// Length of the finished session in seconds
    pub duration: u32,
    pub completed_at: DateTime<Local>,
    /// `completed_at` as Unix epoch milliseconds
    pub timestamp: i64,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredSessionRecord {
    #[serde(rename = "type")]
    kind: SessionKind,
    duration: u32,
    #[serde(default)]
    completed_at: String,
    timestamp: i64,
}

impl From<StoredSessionRecord> for SessionRecord {
    fn from(stored: StoredSessionRecord) -> Self {
        Self {
            kind: stored.kind,
            duration: stored.duration,
            completed_at: stored_time(&stored.completed_at, stored.timestamp),
            timestamp: stored.timestamp,
        }
    }
}

impl SessionRecord {
    pub fn new(kind: SessionKind, duration: u32, completed_at: DateTime<Local>) -> Self {
        Self {
            kind,
            duration,
            completed_at,
            timestamp: completed_at.timestamp_millis(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locale_completed_at_uses_timestamp() {
        let record: SessionRecord = serde_json::from_str(
            r#"{"type": "Work", "duration": 1500, "completedAt": "3/1/2025, 9:25:00 AM", "timestamp": 1740821100000}"#,
        )
        .unwrap();
        assert_eq!(record.kind, SessionKind::Work);
        assert_eq!(record.completed_at.timestamp_millis(), 1_740_821_100_000);
    }

    #[test]
    fn test_record_serializes_rfc3339() {
        let record: SessionRecord = serde_json::from_str(
            r#"{"type": "Break", "duration": 300, "completedAt": "2025-03-01T09:30:00+00:00", "timestamp": 1740821400000}"#,
        )
        .unwrap();
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["type"], "Break");
        let text = json["completedAt"].as_str().unwrap();
        assert!(DateTime::parse_from_rfc3339(text).is_ok());
    }
}
