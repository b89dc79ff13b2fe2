use super::filter::TaskFilter;
use super::task::{TaskId, TaskRecord};
use crate::validation::{ValidationError, normalize_task_text};
use chrono::{DateTime, Local};

/// Task counts shown alongside the list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaskStats {
    pub total: usize,
    pub active: usize,
    pub completed: usize,
}

/// Ordered task collection with a single edit slot and a view filter
#[derive(Debug, Clone, Default)]
pub struct TaskList {
    /// Tasks in insertion order
    ///
    /// Vec keeps the order stable for rendering and for the persisted array.
    tasks: Vec<TaskRecord>,

    /// Task currently in edit mode; at most one at a time
    editing: Option<TaskId>,

    /// Subset of tasks the view shows
    filter: TaskFilter,

    /// Highest id handed out or loaded so far
    last_id: TaskId,
}

impl TaskList {
    /// Create a new empty list
    pub fn new() -> Self {
        Self::default()
    }

    /// Restore a list from its persisted records
    pub fn from_tasks(tasks: Vec<TaskRecord>) -> Self {
        let last_id = tasks.iter().map(|t| t.id).max().unwrap_or_default();
        Self {
            tasks,
            last_id,
            ..Self::default()
        }
    }

    pub fn tasks(&self) -> &[TaskRecord] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn editing(&self) -> Option<TaskId> {
        self.editing
    }

    pub fn filter(&self) -> TaskFilter {
        self.filter
    }

    /// Find a task by its ID
    pub fn find(&self, id: TaskId) -> Option<&TaskRecord> {
        self.tasks.iter().find(|t| t.id == id)
    }

    fn find_mut(&mut self, id: TaskId) -> Option<&mut TaskRecord> {
        self.tasks.iter_mut().find(|t| t.id == id)
    }

    /// Issue an id from the creation time, bumping past any id already used
    fn next_id(&mut self, now: DateTime<Local>) -> TaskId {
        let candidate = now.timestamp_millis();
        let id = if candidate > self.last_id {
            candidate
        } else {
            self.last_id + 1
        };
        self.last_id = id;
        id
    }

    /// Append a new active task
    ///
    /// # Arguments
    /// * `text` - Task text; surrounding whitespace is dropped
    /// * `now` - Creation time, also the source of the id
    ///
    /// # Returns
    /// The id of the new task, or `ValidationError::EmptyTask` for blank text
    pub fn add(&mut self, text: &str, now: DateTime<Local>) -> Result<TaskId, ValidationError> {
        let text = normalize_task_text(text, ValidationError::EmptyTask)?;
        let id = self.next_id(now);
        self.tasks.push(TaskRecord::new(id, text, now));
        Ok(id)
    }

    /// Flip the completion flag of a task
    ///
    /// # Returns
    /// `false` if no task has this id
    pub fn toggle(&mut self, id: TaskId) -> bool {
        match self.find_mut(id) {
            Some(task) => {
                task.completed = !task.completed;
                true
            }
            None => false,
        }
    }

    /// Remove a task and return it
    ///
    /// Closes the edit session if it was open on this task.
    pub fn remove(&mut self, id: TaskId) -> Option<TaskRecord> {
        let pos = self.tasks.iter().position(|t| t.id == id)?;
        if self.editing == Some(id) {
            self.editing = None;
        }
        Some(self.tasks.remove(pos))
    }

    /// Open the edit session on a task, replacing any open one
    ///
    /// # Returns
    /// `false` if no task has this id
    pub fn start_edit(&mut self, id: TaskId) -> bool {
        if self.find(id).is_none() {
            return false;
        }
        self.editing = Some(id);
        true
    }

    /// Store new text for a task and close the edit session
    ///
    /// # Returns
    /// `Ok(false)` if no task has this id, `ValidationError::EmptyEdit` for
    /// blank text; in both cases nothing changes
    pub fn save_edit(&mut self, id: TaskId, text: &str) -> Result<bool, ValidationError> {
        let text = normalize_task_text(text, ValidationError::EmptyEdit)?;
        let Some(task) = self.find_mut(id) else {
            return Ok(false);
        };
        task.text = text;
        self.editing = None;
        Ok(true)
    }

    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    pub fn has_completed(&self) -> bool {
        self.tasks.iter().any(|t| t.completed)
    }

    /// Remove every completed task
    ///
    /// # Returns
    /// Number of removed tasks
    pub fn clear_completed(&mut self) -> usize {
        let before = self.tasks.len();
        self.tasks.retain(|t| !t.completed);
        if self.editing.is_some_and(|id| self.find(id).is_none()) {
            self.editing = None;
        }
        before - self.tasks.len()
    }

    /// Remove every task
    ///
    /// # Returns
    /// Number of removed tasks
    pub fn clear_all(&mut self) -> usize {
        let count = self.tasks.len();
        self.tasks.clear();
        self.editing = None;
        count
    }

    pub fn set_filter(&mut self, filter: TaskFilter) {
        self.filter = filter;
    }

    /// Tasks matching `filter`, in insertion order
    pub fn filtered(&self, filter: TaskFilter) -> Vec<&TaskRecord> {
        self.tasks.iter().filter(|t| filter.matches(t)).collect()
    }

    /// Tasks matching the current filter
    pub fn visible(&self) -> Vec<&TaskRecord> {
        self.filtered(self.filter)
    }

    pub fn stats(&self) -> TaskStats {
        let completed = self.tasks.iter().filter(|t| t.completed).count();
        TaskStats {
            total: self.tasks.len(),
            active: self.tasks.len() - completed,
            completed,
        }
    }
}
