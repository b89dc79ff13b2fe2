use super::session::{SessionKind, SessionRecord};
use super::settings::{TimerSettings, is_long_break};
use super::snapshot::PomodoroSnapshot;
use super::summary::SessionSummary;
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Whether the countdown is advancing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TimerStatus {
    #[default]
    Paused,
    Running,
}

/// Outcome of a countdown reaching zero
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionCompletion {
    /// The record appended to the session log
    pub record: SessionRecord,
    /// Kind of the session that is now loaded
    pub next: SessionKind,
    /// Full length of the session that is now loaded, in seconds
    pub next_duration: u32,
}

impl SessionCompletion {
    /// Notification text announcing what finished and what comes next
    pub fn message(&self) -> String {
        format!(
            "{} session complete! Time for a {} session.",
            self.record.kind,
            self.next.noun()
        )
    }
}

/// Pomodoro session-cycle state machine
///
/// The timer is independent of any clock or scheduler: the host calls
/// [`PomodoroTimer::tick`] once per second while the timer is running.
#[derive(Debug, Clone)]
pub struct PomodoroTimer {
    settings: TimerSettings,
    status: TimerStatus,
    mode: SessionKind,
    remaining: u32,
    /// Completed work sessions
    session_count: u32,
    completed_sessions: Vec<SessionRecord>,
}

impl Default for PomodoroTimer {
    fn default() -> Self {
        Self::new(TimerSettings::default())
    }
}

impl PomodoroTimer {
    /// Create a paused timer loaded with a work session
    pub fn new(settings: TimerSettings) -> Self {
        Self {
            settings,
            status: TimerStatus::Paused,
            mode: SessionKind::Work,
            remaining: settings.work,
            session_count: 0,
            completed_sessions: Vec::new(),
        }
    }

    /// Restore a timer from its persisted snapshot
    ///
    /// # Arguments
    /// * `snapshot` - Persisted counter, log, durations and countdown
    /// * `defaults` - Durations used for any zero or missing value
    ///
    /// # Returns
    /// A paused timer loaded with the persisted session, or a full work
    /// session when none was stored. A stored countdown that is zero or
    /// longer than the session is replaced by the full duration.
    pub fn from_snapshot(snapshot: PomodoroSnapshot, defaults: TimerSettings) -> Self {
        let settings = snapshot.settings(defaults);
        let mode = snapshot.mode.unwrap_or(SessionKind::Work);
        let full = settings.duration_for(mode, snapshot.session_count);
        let remaining = snapshot
            .remaining_time
            .filter(|seconds| (1..=full).contains(seconds))
            .unwrap_or(full);

        Self {
            settings,
            status: TimerStatus::Paused,
            mode,
            remaining,
            session_count: snapshot.session_count,
            completed_sessions: snapshot.completed_sessions,
        }
    }

    /// Persisted form of the current state
    pub fn snapshot(&self) -> PomodoroSnapshot {
        PomodoroSnapshot {
            session_count: self.session_count,
            completed_sessions: self.completed_sessions.clone(),
            work_time: self.settings.work,
            break_time: self.settings.short_break,
            long_break_time: self.settings.long_break,
            mode: Some(self.mode),
            remaining_time: Some(self.remaining),
        }
    }

    pub fn settings(&self) -> TimerSettings {
        self.settings
    }

    pub fn status(&self) -> TimerStatus {
        self.status
    }

    pub fn is_running(&self) -> bool {
        self.status == TimerStatus::Running
    }

    pub fn mode(&self) -> SessionKind {
        self.mode
    }

    pub fn remaining_seconds(&self) -> u32 {
        self.remaining
    }

    pub fn session_count(&self) -> u32 {
        self.session_count
    }

    pub fn completed_sessions(&self) -> &[SessionRecord] {
        &self.completed_sessions
    }

    /// Whether the loaded session is a long break
    pub fn is_long_break(&self) -> bool {
        self.mode == SessionKind::Break && is_long_break(self.session_count)
    }

    /// Full length of the loaded session
    pub fn current_duration(&self) -> u32 {
        self.settings.duration_for(self.mode, self.session_count)
    }

    /// Start counting down
    ///
    /// # Returns
    /// `true` if the timer was paused and is now running
    pub fn start(&mut self) -> bool {
        if self.is_running() {
            return false;
        }
        self.status = TimerStatus::Running;
        true
    }

    /// Stop counting down, keeping the remaining time
    ///
    /// # Returns
    /// `true` if the timer was running
    pub fn pause(&mut self) -> bool {
        if !self.is_running() {
            return false;
        }
        self.status = TimerStatus::Paused;
        true
    }

    /// Pause and restore the full duration of the loaded session
    pub fn reset(&mut self) {
        self.pause();
        self.remaining = self.current_duration();
    }

    /// Advance the countdown by one second
    ///
    /// Has no effect while paused.
    ///
    /// # Returns
    /// The completion, if this tick expired the countdown
    pub fn tick(&mut self, now: DateTime<Local>) -> Option<SessionCompletion> {
        if !self.is_running() {
            return None;
        }

        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining == 0 {
            return Some(self.complete(now));
        }
        None
    }

    /// Apply up to `ticks` ticks, stopping at the first completion
    pub fn tick_n(&mut self, ticks: u32, now: DateTime<Local>) -> Option<SessionCompletion> {
        for _ in 0..ticks {
            if !self.is_running() {
                break;
            }
            if let Some(completion) = self.tick(now) {
                return Some(completion);
            }
        }
        None
    }

    fn complete(&mut self, now: DateTime<Local>) -> SessionCompletion {
        self.pause();

        let finished = self.mode;
        let record = SessionRecord::new(finished, self.current_duration(), now);
        self.completed_sessions.push(record.clone());

        if finished == SessionKind::Work {
            self.session_count += 1;
        }

        self.mode = finished.flipped();
        self.remaining = self.current_duration();

        SessionCompletion {
            record,
            next: self.mode,
            next_duration: self.remaining,
        }
    }

    /// Replace the durations and reload the current session with its new length
    ///
    /// # Returns
    /// `false` without changing anything if the timer is running
    pub fn update_settings(&mut self, settings: TimerSettings) -> bool {
        if self.is_running() {
            return false;
        }
        self.settings = settings;
        self.remaining = self.current_duration();
        true
    }

    /// Forget every completed session and zero the work-session counter
    ///
    /// # Returns
    /// `true` if there was anything to clear
    pub fn clear_history(&mut self) -> bool {
        let had_history = !self.completed_sessions.is_empty() || self.session_count > 0;
        self.completed_sessions.clear();
        self.session_count = 0;
        had_history
    }

    pub fn summary(&self) -> SessionSummary {
        SessionSummary::new(self.session_count, self.settings.work, &self.completed_sessions)
    }
}
