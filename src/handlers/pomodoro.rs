//! Pomodoro controller
//!
//! Wraps a [`PomodoroTimer`] with persistence, dialogs and a view. Every
//! state change is followed by a re-render. Pause, reset, completion and
//! changes to the durations or the log are also persisted; ticks are not.

use crate::dialog::Dialogs;
use crate::pomodoro::{PomodoroSnapshot, PomodoroTimer, SessionCompletion, SessionSummary, TimerSettings};
use crate::storage::{KeyValueStore, POMODORO_KEY, Storage};
use crate::view::Render;
use anyhow::Result;
use chrono::{DateTime, Local};
use log::{debug, info};

const CLEAR_HISTORY_PROMPT: &str = "Are you sure you want to clear all session history?";

pub struct PomodoroHandler<S, D, V> {
    timer: PomodoroTimer,
    storage: Storage<S>,
    dialogs: D,
    view: V,
}

impl<S, D, V> PomodoroHandler<S, D, V>
where
    S: KeyValueStore,
    D: Dialogs,
    V: Render<PomodoroTimer>,
{
    /// Create a controller from the snapshot held in `store`
    ///
    /// # Arguments
    /// * `store` - Key-value store holding the snapshot
    /// * `dialogs` - Alert/confirm capability
    /// * `view` - Renderer, drawn once immediately
    /// * `defaults` - Durations used when the snapshot has none
    pub fn new(store: S, dialogs: D, view: V, defaults: TimerSettings) -> Result<Self> {
        let storage = Storage::new(store);
        let snapshot: PomodoroSnapshot = storage.load(POMODORO_KEY)?;
        let timer = PomodoroTimer::from_snapshot(snapshot, defaults);
        debug!(
            "loaded pomodoro state: {} work session(s), {} log entries",
            timer.session_count(),
            timer.completed_sessions().len()
        );

        let mut handler = Self {
            timer,
            storage,
            dialogs,
            view,
        };
        handler.render();
        Ok(handler)
    }

    pub fn timer(&self) -> &PomodoroTimer {
        &self.timer
    }

    pub fn dialogs(&self) -> &D {
        &self.dialogs
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn storage(&self) -> &Storage<S> {
        &self.storage
    }

    fn render(&mut self) {
        self.view.render(&self.timer);
    }

    fn save(&mut self) -> Result<()> {
        self.storage.save(POMODORO_KEY, &self.timer.snapshot())
    }

    /// Start the countdown; a second start is ignored
    ///
    /// # Returns
    /// `true` if the host should begin ticking
    pub fn start(&mut self) -> bool {
        let started = self.timer.start();
        if started {
            self.render();
        }
        started
    }

    /// Stop the countdown and persist the remaining time
    ///
    /// # Returns
    /// `false` if the timer was not running
    pub fn pause(&mut self) -> Result<bool> {
        if !self.timer.pause() {
            return Ok(false);
        }
        self.render();
        self.save()?;
        debug!("paused with {}s left", self.timer.remaining_seconds());
        Ok(true)
    }

    /// Pause and restore the full duration of the loaded session
    pub fn reset(&mut self) -> Result<()> {
        self.timer.reset();
        self.render();
        self.save()
    }

    /// Advance the countdown by one second
    ///
    /// On expiry the new state is persisted and the user is notified.
    pub fn tick(&mut self, now: DateTime<Local>) -> Result<Option<SessionCompletion>> {
        if !self.timer.is_running() {
            return Ok(None);
        }

        let completion = self.timer.tick(now);
        self.render();
        if let Some(completion) = &completion {
            self.on_complete(completion)?;
        }
        Ok(completion)
    }

    /// Apply up to `ticks` ticks, stopping at the first completion
    pub fn tick_n(&mut self, ticks: u32, now: DateTime<Local>) -> Result<Option<SessionCompletion>> {
        for _ in 0..ticks {
            if !self.timer.is_running() {
                break;
            }
            if let Some(completion) = self.tick(now)? {
                return Ok(Some(completion));
            }
        }
        Ok(None)
    }

    fn on_complete(&mut self, completion: &SessionCompletion) -> Result<()> {
        info!(
            "{} session complete ({}s), next: {} for {}s",
            completion.record.kind,
            completion.record.duration,
            completion.next,
            completion.next_duration
        );
        self.save()?;
        self.dialogs.alert(&completion.message());
        Ok(())
    }

    /// Replace the durations while paused
    ///
    /// # Returns
    /// `false` if the timer is running and nothing changed
    pub fn update_settings(&mut self, settings: TimerSettings) -> Result<bool> {
        if !self.timer.update_settings(settings) {
            debug!("settings change ignored while running");
            return Ok(false);
        }
        self.render();
        self.save()?;
        Ok(true)
    }

    /// Replace the durations from user-entered minutes
    ///
    /// Invalid minutes are reported with an alert and change nothing.
    pub fn update_settings_minutes(&mut self, work: u32, short_break: u32, long_break: u32) -> Result<bool> {
        match TimerSettings::from_minutes(work, short_break, long_break) {
            Ok(settings) => self.update_settings(settings),
            Err(e) => {
                self.dialogs.alert(&e.to_string());
                Ok(false)
            }
        }
    }

    /// Empty the session log after confirmation
    ///
    /// # Returns
    /// `true` if the user confirmed and the history was cleared
    pub fn clear_history(&mut self) -> Result<bool> {
        if !self.dialogs.confirm(CLEAR_HISTORY_PROMPT) {
            return Ok(false);
        }
        self.timer.clear_history();
        self.save()?;
        self.render();
        info!("session history cleared");
        Ok(true)
    }

    pub fn summary(&self) -> SessionSummary {
        self.timer.summary()
    }
}
