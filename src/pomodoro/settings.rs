use crate::pomodoro::session::SessionKind;
use crate::validation::{ValidationError, minutes_to_seconds};

/// Default work session length in seconds
pub const DEFAULT_WORK_SECONDS: u32 = 25 * 60;
/// Default short break length in seconds
pub const DEFAULT_SHORT_BREAK_SECONDS: u32 = 5 * 60;
/// Default long break length in seconds
pub const DEFAULT_LONG_BREAK_SECONDS: u32 = 15 * 60;

/// Every Nth completed work session is followed by a long break
pub const LONG_BREAK_INTERVAL: u32 = 4;

/// Whether the break following `completed_work_sessions` work sessions is long
///
/// The count is taken after the work session that precedes the break has been
/// counted, so the break after the 4th, 8th, 12th... work session is long.
pub fn is_long_break(completed_work_sessions: u32) -> bool {
    completed_work_sessions > 0 && completed_work_sessions % LONG_BREAK_INTERVAL == 0
}

/// Session durations, all in seconds and all positive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerSettings {
    pub work: u32,
    pub short_break: u32,
    pub long_break: u32,
}

impl Default for TimerSettings {
    fn default() -> Self {
        Self {
            work: DEFAULT_WORK_SECONDS,
            short_break: DEFAULT_SHORT_BREAK_SECONDS,
            long_break: DEFAULT_LONG_BREAK_SECONDS,
        }
    }
}

impl TimerSettings {
    /// Build settings from whole minutes, as entered by the user
    ///
    /// # Arguments
    /// * `work` - Work session length in minutes
    /// * `short_break` - Short break length in minutes
    /// * `long_break` - Long break length in minutes
    pub fn from_minutes(work: u32, short_break: u32, long_break: u32) -> Result<Self, ValidationError> {
        Ok(Self {
            work: minutes_to_seconds("work", work)?,
            short_break: minutes_to_seconds("short break", short_break)?,
            long_break: minutes_to_seconds("long break", long_break)?,
        })
    }

    /// Replace every zero duration with the matching value from `fallback`
    pub fn or_fallback(self, fallback: TimerSettings) -> Self {
        let pick = |value: u32, default: u32| if value == 0 { default } else { value };
        Self {
            work: pick(self.work, fallback.work),
            short_break: pick(self.short_break, fallback.short_break),
            long_break: pick(self.long_break, fallback.long_break),
        }
    }

    /// Full duration of a session of `kind`
    ///
    /// # Arguments
    /// * `kind` - Work or break
    /// * `completed_work_sessions` - Work sessions completed so far; decides
    ///   between a short and a long break
    pub fn duration_for(&self, kind: SessionKind, completed_work_sessions: u32) -> u32 {
        match kind {
            SessionKind::Work => self.work,
            SessionKind::Break if is_long_break(completed_work_sessions) => self.long_break,
            SessionKind::Break => self.short_break,
        }
    }
}
