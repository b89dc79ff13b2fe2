//! Pomodoro timer domain
//!
//! This module contains the session-cycle state machine and its data:
//! - `timer`: the countdown state machine driven by explicit ticks
//! - `settings`: session durations and the long-break rule
//! - `session`: session kinds and the completed-session log entry
//! - `snapshot`: the persisted form of the timer
//! - `summary`: statistics over the session log

mod session;
mod settings;
mod snapshot;
mod summary;
mod timer;

pub use session::{SessionKind, SessionRecord};
pub use settings::{
    DEFAULT_LONG_BREAK_SECONDS, DEFAULT_SHORT_BREAK_SECONDS, DEFAULT_WORK_SECONDS,
    LONG_BREAK_INTERVAL, TimerSettings, is_long_break,
};
pub use snapshot::PomodoroSnapshot;
pub use summary::{RECENT_SESSIONS_LIMIT, SessionSummary};
pub use timer::{PomodoroTimer, SessionCompletion, TimerStatus};
