//! To-do controller
//!
//! Wraps a [`TaskList`] with persistence, dialogs and a view. Each mutation is
//! applied in memory, written to the store and then re-rendered.

use crate::dialog::Dialogs;
use crate::storage::{KeyValueStore, Storage, TODO_KEY};
use crate::todo::{TaskFilter, TaskId, TaskList, TaskRecord, TaskStats};
use crate::view::Render;
use anyhow::Result;
use chrono::{DateTime, Local};
use log::{debug, info};

const DELETE_PROMPT: &str = "Are you sure you want to delete this task?";
const CLEAR_COMPLETED_PROMPT: &str = "Are you sure you want to clear all completed tasks?";
const CLEAR_ALL_PROMPT: &str = "Are you sure you want to delete ALL tasks? This cannot be undone!";
const NOTHING_COMPLETED: &str = "No completed tasks to clear!";
const NOTHING_TO_CLEAR: &str = "No tasks to clear!";

pub struct TodoHandler<S, D, V> {
    list: TaskList,
    storage: Storage<S>,
    dialogs: D,
    view: V,
}

impl<S, D, V> TodoHandler<S, D, V>
where
    S: KeyValueStore,
    D: Dialogs,
    V: Render<TaskList>,
{
    /// Create a controller from the tasks held in `store`
    pub fn new(store: S, dialogs: D, view: V) -> Result<Self> {
        let storage = Storage::new(store);
        let tasks: Vec<TaskRecord> = storage.load(TODO_KEY)?;
        debug!("loaded {} task(s)", tasks.len());

        let mut handler = Self {
            list: TaskList::from_tasks(tasks),
            storage,
            dialogs,
            view,
        };
        handler.render();
        Ok(handler)
    }

    pub fn list(&self) -> &TaskList {
        &self.list
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
        self.view.render(&self.list);
    }

    /// Persist and re-render after a mutation
    fn commit(&mut self) -> Result<()> {
        self.storage.save(TODO_KEY, self.list.tasks())?;
        self.render();
        Ok(())
    }

    /// Add a task
    ///
    /// # Arguments
    /// * `text` - Task text, trimmed before storing
    /// * `now` - Creation time; its epoch milliseconds become the id
    ///
    /// # Returns
    /// The new id, or `None` if the text was blank (the user is alerted)
    pub fn add(&mut self, text: &str, now: DateTime<Local>) -> Result<Option<TaskId>> {
        match self.list.add(text, now) {
            Ok(id) => {
                self.commit()?;
                info!("added task {id}");
                Ok(Some(id))
            }
            Err(e) => {
                self.dialogs.alert(&e.to_string());
                Ok(None)
            }
        }
    }

    /// Flip a task's completion; unknown ids are ignored
    pub fn toggle(&mut self, id: TaskId) -> Result<bool> {
        if !self.list.toggle(id) {
            debug!("toggle: no task {id}");
            return Ok(false);
        }
        self.commit()?;
        Ok(true)
    }

    /// Delete a task after confirmation
    ///
    /// # Returns
    /// `true` if the task existed, the user confirmed and it was removed
    pub fn delete(&mut self, id: TaskId) -> Result<bool> {
        if self.list.find(id).is_none() {
            debug!("delete: no task {id}");
            return Ok(false);
        }
        if !self.dialogs.confirm(DELETE_PROMPT) {
            return Ok(false);
        }
        self.list.remove(id);
        self.commit()?;
        info!("deleted task {id}");
        Ok(true)
    }

    /// Enter edit mode for a task
    pub fn start_edit(&mut self, id: TaskId) -> bool {
        let started = self.list.start_edit(id);
        if started {
            self.render();
        }
        started
    }

    /// Save new text for a task and leave edit mode
    ///
    /// Blank text is reported with an alert and leaves the edit session open.
    pub fn save_edit(&mut self, id: TaskId, text: &str) -> Result<bool> {
        match self.list.save_edit(id, text) {
            Ok(true) => {
                self.commit()?;
                Ok(true)
            }
            Ok(false) => Ok(false),
            Err(e) => {
                self.dialogs.alert(&e.to_string());
                Ok(false)
            }
        }
    }

    pub fn cancel_edit(&mut self) {
        self.list.cancel_edit();
        self.render();
    }

    /// Remove completed tasks after confirmation
    ///
    /// # Returns
    /// Number of removed tasks
    pub fn clear_completed(&mut self) -> Result<usize> {
        if !self.list.has_completed() {
            self.dialogs.alert(NOTHING_COMPLETED);
            return Ok(0);
        }
        if !self.dialogs.confirm(CLEAR_COMPLETED_PROMPT) {
            return Ok(0);
        }
        let removed = self.list.clear_completed();
        self.commit()?;
        info!("cleared {removed} completed task(s)");
        Ok(removed)
    }

    /// Remove every task after confirmation
    ///
    /// # Returns
    /// Number of removed tasks
    pub fn clear_all(&mut self) -> Result<usize> {
        if self.list.is_empty() {
            self.dialogs.alert(NOTHING_TO_CLEAR);
            return Ok(0);
        }
        if !self.dialogs.confirm(CLEAR_ALL_PROMPT) {
            return Ok(0);
        }
        let removed = self.list.clear_all();
        self.commit()?;
        info!("cleared all {removed} task(s)");
        Ok(removed)
    }

    /// Change which tasks the view shows
    pub fn set_filter(&mut self, filter: TaskFilter) {
        self.list.set_filter(filter);
        self.render();
    }

    pub fn stats(&self) -> TaskStats {
        self.list.stats()
    }
}
