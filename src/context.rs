//! Application Context
//!
//! The task list controller, provided to every component via the Leptos
//! Context API. Each operation mutates the store and bumps the render
//! revision; the list view regenerates from the store on its own.

use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::File;

use crate::commands;
use crate::config::{EXPORT_FILE_NAME, EXPORT_MIME};
use crate::error::TaskFileError;
use crate::models::TaskId;
use crate::store::{
    store_apply, store_begin_load, store_export, store_finish_load, store_text, AppStore,
    LoadOutcome,
};
use crate::strings;

/// App-wide controller handle.
/// Every operation triggers a full list rebuild, except an inline edit that
/// leaves the text as stored.
#[derive(Clone, Copy)]
pub struct AppContext {
    pub store: AppStore,
}

impl AppContext {
    pub fn new(store: AppStore) -> Self {
        Self { store }
    }

    /// Add a task from raw input. Returns false when the text was blank,
    /// in which case the caller keeps its input as-is.
    pub fn add_task(&self, raw_text: &str) -> bool {
        store_apply(&self.store, |list| list.add(raw_text)).is_some()
    }

    pub fn delete_task(&self, id: TaskId) {
        store_apply(&self.store, |list| list.delete(id));
    }

    pub fn toggle_task(&self, id: TaskId) {
        store_apply(&self.store, |list| list.toggle(id));
    }

    /// Commit an inline edit. Blank text is discarded and, since the list is
    /// regenerated anyway, the old text reappears.
    pub fn edit_task(&self, id: TaskId, new_text: &str) {
        // Untouched text: skip the rebuild so a click that caused the blur
        // still lands on its button
        if store_text(&self.store, id).as_deref() == Some(new_text) {
            return;
        }
        store_apply(&self.store, |list| list.edit(id, new_text));
    }

    /// Put the caret in the task's text with everything selected
    pub fn start_editing(&self, id: TaskId) {
        match commands::select_task_text(id) {
            Ok(true) => log::debug!("[TASKS] editing {}", id),
            Ok(false) => log::debug!("[TASKS] no text region for {}", id),
            Err(e) => log::warn!("[TASKS] could not start editing {}: {}", id, e),
        }
    }

    pub fn reorder(&self, dragged_id: TaskId, target_id: TaskId) {
        store_apply(&self.store, |list| list.reorder(dragged_id, target_id));
    }

    /// Download the list as `tasks.json`
    pub fn save_to_file(&self) {
        let result = store_export(&self.store).and_then(|json| {
            commands::download_text(EXPORT_FILE_NAME, EXPORT_MIME, &json)
                .map_err(TaskFileError::Host)
        });
        if let Err(e) = result {
            log::error!("[FILES] save failed: {}", e);
        }
    }

    /// Replace the list with the contents of `file` once it has been read.
    /// Only the most recently started load is applied.
    pub fn load_from_file(&self, file: File) {
        let store = self.store;
        let ticket = store_begin_load(&store);
        log::debug!("[FILES] loading {} as {:?}", file.name(), ticket);

        spawn_local(async move {
            let read = commands::read_file_text(file).await.map_err(TaskFileError::Read);
            match store_finish_load(&store, ticket, read) {
                LoadOutcome::Loaded(count) => {
                    log::info!("[FILES] loaded {} tasks", count);
                    commands::notify(strings::LOAD_SUCCESS);
                }
                LoadOutcome::Failed(e) => commands::notify(&strings::load_failure(&e.to_string())),
                LoadOutcome::Superseded => {}
            }
        });
    }
}

/// Get the controller from context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use reactive_stores::Store;

    use crate::store::{store_tasks, AppState};

    #[test]
    fn test_unchanged_edit_skips_rebuild() {
        let ctx = AppContext::new(Store::new(AppState::new()));
        assert!(ctx.add_task("Buy milk"));
        let (revision, _) = store_tasks(&ctx.store);

        ctx.edit_task(1, "Buy milk");
        assert_eq!(store_tasks(&ctx.store).0, revision);

        ctx.edit_task(1, "   ");
        let (after_blank, tasks) = store_tasks(&ctx.store);
        assert_eq!(after_blank, revision + 1);
        assert_eq!(tasks[0].text, "Buy milk");

        ctx.edit_task(1, " Walk dog ");
        let (after_edit, tasks) = store_tasks(&ctx.store);
        assert_eq!(after_edit, revision + 2);
        assert_eq!(tasks[0].text, "Walk dog");
    }
}
