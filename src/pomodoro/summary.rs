use super::session::SessionRecord;

/// Number of most recent sessions shown in a summary
pub const RECENT_SESSIONS_LIMIT: usize = 10;

/// Statistics over the completed-session log
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSummary {
    pub work_sessions: u32,
    /// Work sessions multiplied by the configured work duration
    pub worked_seconds: u64,
    /// Newest first, at most [`RECENT_SESSIONS_LIMIT`] entries
    pub recent: Vec<SessionRecord>,
}

impl SessionSummary {
    pub fn new(work_sessions: u32, work_duration: u32, log: &[SessionRecord]) -> Self {
        let recent = log
            .iter()
            .rev()
            .take(RECENT_SESSIONS_LIMIT)
            .cloned()
            .collect();

        Self {
            work_sessions,
            worked_seconds: u64::from(work_sessions) * u64::from(work_duration),
            recent,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.recent.is_empty()
    }

    pub fn worked_hours(&self) -> u64 {
        self.worked_seconds / 3600
    }

    /// Minutes past the last whole hour
    pub fn worked_minutes(&self) -> u64 {
        (self.worked_seconds % 3600) / 60
    }
}
