//! Widget controllers
//!
//! Each controller owns one widget's core state together with the host's
//! store, dialogs and view, and performs the persist-and-render cycle after
//! every change.

pub mod pomodoro;
pub mod todo;

pub use pomodoro::PomodoroHandler;
pub use todo::TodoHandler;
