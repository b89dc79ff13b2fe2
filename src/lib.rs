//! pomotodo library
//!
//! This library provides two small productivity widgets: a Pomodoro countdown
//! timer and a to-do list. Each persists a snapshot of its state to a local
//! key-value store after every change.
//!
//! # Architecture
//!
//! The library follows a 3-layer architecture:
//! - **Domain Layer**: `pomodoro` and `todo` modules - pure state machines with
//!   no clock, UI or storage access
//! - **Controller Layer**: `handlers` module - composes a domain value with a
//!   store, a [`Dialogs`] capability and a [`Render`] view
//! - **Persistence Layer**: `storage` module - JSON snapshots in a
//!   [`KeyValueStore`]
//!
//! # Example
//!
//! ```
//! use pomotodo::{MemoryStore, NoView, ScriptedDialogs, TodoHandler};
//! use anyhow::Result;
//! use chrono::Local;
//!
//! fn main() -> Result<()> {
//!     let mut todo = TodoHandler::new(MemoryStore::new(), ScriptedDialogs::approving(), NoView)?;
//!     let id = todo.add("Write the report", Local::now())?.expect("text is not blank");
//!     todo.toggle(id)?;
//!     assert_eq!(todo.stats().completed, 1);
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod dialog;
pub mod formatting;
pub mod handlers;
pub mod pomodoro;
pub mod storage;
pub mod terminal;
pub mod todo;
pub mod validation;
pub mod view;

// Re-export commonly used types
pub use config::AppConfig;
pub use dialog::{Dialogs, ScriptedDialogs};
pub use handlers::{PomodoroHandler, TodoHandler};
pub use pomodoro::{PomodoroTimer, SessionCompletion, SessionKind, SessionRecord, TimerSettings};
pub use storage::{FileStore, KeyValueStore, MemoryStore, Storage};
pub use todo::{TaskFilter, TaskId, TaskList, TaskRecord, TaskStats};
pub use validation::ValidationError;
pub use view::{NoView, Render};
