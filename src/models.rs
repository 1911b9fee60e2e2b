//! Frontend Models
//!
//! Task entity and the shape of the exported `tasks.json` file.

use serde::{Deserialize, Serialize};

/// Task identifier, assigned from `TaskList::next_id` and never reused
pub type TaskId = u32;

/// A single to-do entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub text: String,
    #[serde(default)]
    pub done: bool,
}

impl Task {
    /// Create a fresh, not yet completed task
    pub fn new(id: TaskId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            done: false,
        }
    }
}

/// Exported file, borrowed from the live list
#[derive(Debug, Serialize)]
pub struct TaskFileRef<'a> {
    pub tasks: &'a [Task],
    #[serde(rename = "nextId")]
    pub next_id: TaskId,
}

/// Imported file. Both keys are optional; `null` counts as absent.
#[derive(Debug, Default, Deserialize)]
pub struct TaskFileData {
    #[serde(default)]
    pub tasks: Option<Vec<Task>>,
    #[serde(rename = "nextId", default)]
    pub next_id: Option<TaskId>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_creation() {
        let task = Task::new(1, "Buy milk");
        assert_eq!(task.id, 1);
        assert_eq!(task.text, "Buy milk");
        assert!(!task.done);
    }

    #[test]
    fn test_export_uses_camel_case_next_id() {
        let tasks = vec![Task::new(1, "Buy milk")];
        let json = serde_json::to_string(&TaskFileRef { tasks: &tasks, next_id: 2 }).unwrap();
        assert_eq!(json, r#"{"tasks":[{"id":1,"text":"Buy milk","done":false}],"nextId":2}"#);
    }

    #[test]
    fn test_import_missing_keys() {
        let data: TaskFileData = serde_json::from_str("{}").unwrap();
        assert!(data.tasks.is_none());
        assert!(data.next_id.is_none());

        let data: TaskFileData = serde_json::from_str(r#"{"tasks":null,"nextId":null}"#).unwrap();
        assert!(data.tasks.is_none());
        assert!(data.next_id.is_none());
    }

    #[test]
    fn test_import_task_without_done_flag() {
        let data: TaskFileData =
            serde_json::from_str(r#"{"tasks":[{"id":4,"text":"Walk dog","extra":1}]}"#).unwrap();
        assert_eq!(data.tasks.unwrap(), vec![Task::new(4, "Walk dog")]);
    }
}
