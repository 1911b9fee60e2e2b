//! UI Components
//!
//! Leptos components for the task page.

mod new_task_form;
mod file_controls;
mod task_list_view;
mod task_item;

pub use new_task_form::NewTaskForm;
pub use file_controls::FileControls;
pub use task_list_view::TaskListView;
pub use task_item::TaskItem;
