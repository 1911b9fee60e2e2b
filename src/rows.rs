//! Render Model
//!
//! What the list view shows for a given task sequence.

use crate::models::{Task, TaskId};
use crate::strings;

/// One rendered task item
#[derive(Debug, Clone, PartialEq)]
pub struct TaskRow {
    pub id: TaskId,
    pub text: String,
    pub done: bool,
    pub toggle_label: &'static str,
}

impl TaskRow {
    /// CSS class of the list item
    pub fn class(&self, dragging: bool, drop_target: bool) -> String {
        let mut c = String::from("task-item");
        if self.done {
            c.push_str(" done");
        }
        if dragging {
            c.push_str(" dragging");
        }
        if drop_target {
            c.push_str(" drop-target");
        }
        c
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum RenderedList {
    /// No tasks: a single placeholder entry
    Placeholder(&'static str),
    /// One row per task, in list order
    Rows(Vec<TaskRow>),
}

pub fn render_list(tasks: &[Task]) -> RenderedList {
    if tasks.is_empty() {
        return RenderedList::Placeholder(strings::EMPTY_LIST);
    }
    RenderedList::Rows(
        tasks
            .iter()
            .map(|task| TaskRow {
                id: task.id,
                text: task.text.clone(),
                done: task.done,
                toggle_label: strings::toggle_label(task.done),
            })
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_list_renders_placeholder() {
        assert_eq!(render_list(&[]), RenderedList::Placeholder("Давай придумаем чем заняться!"));
    }

    #[test]
    fn test_rows_follow_list_order() {
        let mut done = Task::new(2, "Walk dog");
        done.done = true;
        let tasks = vec![done, Task::new(1, "Buy milk")];

        let RenderedList::Rows(rows) = render_list(&tasks) else {
            panic!("expected rows");
        };
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].id, 2);
        assert_eq!(rows[0].toggle_label, "Не выполнено");
        assert_eq!(rows[1].id, 1);
        assert_eq!(rows[1].text, "Buy milk");
        assert_eq!(rows[1].toggle_label, "Выполнено");
    }

    #[test]
    fn test_row_class() {
        let mut row = TaskRow {
            id: 1,
            text: "a".into(),
            done: false,
            toggle_label: strings::MARK_DONE,
        };
        assert_eq!(row.class(false, false), "task-item");
        assert_eq!(row.class(true, false), "task-item dragging");
        assert_eq!(row.class(false, true), "task-item drop-target");
        row.done = true;
        assert_eq!(row.class(false, false), "task-item done");
    }
}
