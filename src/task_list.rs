//! Task List State
//!
//! Ordered task collection plus the id counter. Pure state, no DOM access:
//! every operation reports whether it changed anything and the caller decides
//! what to re-render.

use std::collections::HashSet;

use crate::error::TaskFileError;
use crate::models::{Task, TaskFileData, TaskFileRef, TaskId};

/// First id handed out by an empty list
pub const FIRST_TASK_ID: TaskId = 1;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskList {
    /// Display order == vector order
    tasks: Vec<Task>,
    /// Greater than every id assigned so far
    next_id: TaskId,
}

impl Default for TaskList {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskList {
    pub fn new() -> Self {
        Self {
            tasks: Vec::new(),
            next_id: FIRST_TASK_ID,
        }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn next_id(&self) -> TaskId {
        self.next_id
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    fn position(&self, id: TaskId) -> Option<usize> {
        self.tasks.iter().position(|t| t.id == id)
    }

    /// Append a task with trimmed `raw_text`. Returns the new id, or `None`
    /// when the text is blank.
    pub fn add(&mut self, raw_text: &str) -> Option<TaskId> {
        let text = raw_text.trim();
        if text.is_empty() {
            return None;
        }
        let id = self.next_id;
        let Some(following) = id.checked_add(1) else {
            log::warn!("[TASKS] id space exhausted, refusing to add");
            return None;
        };
        self.next_id = following;
        self.tasks.push(Task::new(id, text));
        log::debug!("[TASKS] added {}", id);
        Some(id)
    }

    /// Remove the task with `id`. Absent ids are not an error.
    pub fn delete(&mut self, id: TaskId) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        let removed = self.tasks.len() != before;
        if removed {
            log::debug!("[TASKS] deleted {}", id);
        }
        removed
    }

    /// Flip the done flag of `id`
    pub fn toggle(&mut self, id: TaskId) -> bool {
        match self.tasks.iter_mut().find(|t| t.id == id) {
            Some(task) => {
                task.done = !task.done;
                log::debug!("[TASKS] toggled {} -> {}", id, task.done);
                true
            }
            None => false,
        }
    }

    /// Replace the text of `id` with trimmed `new_text`.
    /// Blank edits are discarded and the old text kept.
    pub fn edit(&mut self, id: TaskId, new_text: &str) -> bool {
        let text = new_text.trim();
        if text.is_empty() {
            return false;
        }
        match self.tasks.iter_mut().find(|t| t.id == id) {
            Some(task) => {
                task.text = text.to_string();
                log::debug!("[TASKS] edited {}", id);
                true
            }
            None => false,
        }
    }

    /// Move `dragged_id` to the index `target_id` occupies before the move.
    /// Unknown ids on either side leave the order untouched.
    pub fn reorder(&mut self, dragged_id: TaskId, target_id: TaskId) -> bool {
        let Some(from) = self.position(dragged_id) else {
            return false;
        };
        let Some(to) = self.position(target_id) else {
            return false;
        };
        let task = self.tasks.remove(from);
        self.tasks.insert(to, task);
        log::debug!("[TASKS] moved {} from {} to {}", dragged_id, from, to);
        from != to
    }

    /// Serialize as `{ "tasks": [...], "nextId": n }` with 2-space indentation
    pub fn to_json(&self) -> Result<String, TaskFileError> {
        let file = TaskFileRef {
            tasks: &self.tasks,
            next_id: self.next_id,
        };
        Ok(serde_json::to_string_pretty(&file)?)
    }

    /// Replace the list with the contents of an exported file.
    /// Nothing is changed unless the whole file is valid. Returns the number
    /// of tasks loaded.
    pub fn load_json(&mut self, text: &str) -> Result<usize, TaskFileError> {
        let data: TaskFileData = serde_json::from_str(text)?;
        let tasks = data.tasks.unwrap_or_default();

        let mut seen = HashSet::with_capacity(tasks.len());
        if let Some(dup) = tasks.iter().find(|t| !seen.insert(t.id)) {
            return Err(TaskFileError::DuplicateId(dup.id));
        }

        // A missing or zero counter keeps the current one
        let next_id = match data.next_id {
            Some(n) if n > 0 => n,
            _ => self.next_id,
        };
        let floor = tasks
            .iter()
            .map(|t| t.id.saturating_add(1))
            .max()
            .unwrap_or(FIRST_TASK_ID);

        self.next_id = next_id.max(floor);
        self.tasks = tasks;
        log::debug!("[TASKS] loaded {} tasks, next id {}", self.tasks.len(), self.next_id);
        Ok(self.tasks.len())
    }
}
