//! Persisted form of the Pomodoro timer
//!
//! The layout mirrors the browser storage document the widget has always
//! written: a completed-session counter, the session log and the three
//! durations in seconds. The loaded mode and its countdown ride along as
//! optional fields so a paused session survives a restart; documents without
//! them load a full work session.

use super::session::{SessionKind, SessionRecord};
use super::settings::TimerSettings;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PomodoroSnapshot {
    pub session_count: u32,
    pub completed_sessions: Vec<SessionRecord>,
    pub work_time: u32,
    pub break_time: u32,
    pub long_break_time: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<SessionKind>,
    /// Seconds left in the loaded session
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remaining_time: Option<u32>,
}

impl PomodoroSnapshot {
    /// Durations stored in the snapshot, with zero or missing values taken
    /// from `fallback`
    pub fn settings(&self, fallback: TimerSettings) -> TimerSettings {
        TimerSettings {
            work: self.work_time,
            short_break: self.break_time,
            long_break: self.long_break_time,
        }
        .or_fallback(fallback)
    }
}
