//! Common test utilities for integration tests
#![allow(dead_code)]

use chrono::{DateTime, Local, TimeZone};
use pomotodo::{
    FileStore, PomodoroHandler, PomodoroTimer, Render, ScriptedDialogs, SessionKind, TaskList,
    TimerSettings, TodoHandler,
};
use tempfile::TempDir;

/// A fixed wall-clock time for deterministic records
pub fn fixed_time() -> DateTime<Local> {
    Local.with_ymd_and_hms(2025, 3, 1, 9, 0, 0).unwrap()
}

/// What the timer view showed on one render
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimerFrame {
    pub mode: SessionKind,
    pub remaining: u32,
    pub running: bool,
}

/// View that remembers every frame it was asked to draw
#[derive(Debug, Default)]
pub struct RecordingView {
    pub timer_frames: Vec<TimerFrame>,
    /// Visible task texts per render
    pub list_frames: Vec<Vec<String>>,
}

impl Render<PomodoroTimer> for RecordingView {
    fn render(&mut self, timer: &PomodoroTimer) {
        self.timer_frames.push(TimerFrame {
            mode: timer.mode(),
            remaining: timer.remaining_seconds(),
            running: timer.is_running(),
        });
    }
}

impl Render<TaskList> for RecordingView {
    fn render(&mut self, list: &TaskList) {
        self.list_frames
            .push(list.visible().iter().map(|t| t.text.clone()).collect());
    }
}

pub type TestPomodoro = PomodoroHandler<FileStore, ScriptedDialogs, RecordingView>;
pub type TestTodo = TodoHandler<FileStore, ScriptedDialogs, RecordingView>;

/// Create a Pomodoro handler backed by a temporary directory
pub fn get_test_pomodoro(settings: TimerSettings) -> (TestPomodoro, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let handler = PomodoroHandler::new(
        FileStore::new(temp_dir.path()),
        ScriptedDialogs::approving(),
        RecordingView::default(),
        settings,
    )
    .unwrap();
    (handler, temp_dir)
}

/// Create a to-do handler backed by a temporary directory
pub fn get_test_todo(dialogs: ScriptedDialogs) -> (TestTodo, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let handler = TodoHandler::new(
        FileStore::new(temp_dir.path()),
        dialogs,
        RecordingView::default(),
    )
    .unwrap();
    (handler, temp_dir)
}

/// Run the loaded session to completion
pub fn finish_session(handler: &mut TestPomodoro) -> pomotodo::SessionCompletion {
    let remaining = handler.timer().remaining_seconds();
    handler.start();
    handler
        .tick_n(remaining, fixed_time())
        .unwrap()
        .expect("session should complete")
}
