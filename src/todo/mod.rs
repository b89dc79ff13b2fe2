//! To-do list domain
//!
//! - `task`: the task record and its id type
//! - `task_list`: the ordered list with edit mode, filtering and statistics
//! - `filter`: the all / active / completed view filter

mod filter;
mod task;
mod task_list;

pub use filter::TaskFilter;
pub use task::{TaskId, TaskRecord};
pub use task_list::{TaskList, TaskStats};
