//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::error::TaskFileError;
use crate::models::{Task, TaskId};
use crate::task_list::TaskList;

/// Ticket handed out per file load
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoadTicket(u64);

/// Hands out load tickets; only the most recently issued one is current.
/// Reads finishing out of order therefore resolve to the last load the user
/// started.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LoadQueue {
    latest: u64,
}

impl LoadQueue {
    pub fn begin(&mut self) -> LoadTicket {
        self.latest += 1;
        LoadTicket(self.latest)
    }

    pub fn is_current(&self, ticket: LoadTicket) -> bool {
        ticket.0 == self.latest
    }
}

/// Result of a finished file read
#[derive(Debug)]
pub enum LoadOutcome {
    /// File applied, with the number of tasks loaded
    Loaded(usize),
    /// A newer load was started in the meantime; result dropped
    Superseded,
    Failed(TaskFileError),
}

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Tasks and id counter
    pub list: TaskList,
    /// Bumped by every controller operation; rows are keyed on it so each
    /// operation regenerates the whole list
    pub revision: u64,
    /// File loads in flight
    pub loads: LoadQueue,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

// ========================
// Store Helper Functions
// ========================

/// Run a controller operation on the list and mark the view stale,
/// whether or not the operation changed anything
pub fn store_apply<R>(store: &AppStore, op: impl FnOnce(&mut TaskList) -> R) -> R {
    let result = op(&mut store.list().write());
    *store.revision().write() += 1;
    result
}

/// Tracked snapshot of the tasks, paired with the current revision
pub fn store_tasks(store: &AppStore) -> (u64, Vec<Task>) {
    let revision = store.revision().get();
    let tasks = store.list().read().tasks().to_vec();
    (revision, tasks)
}

/// Untracked JSON export of the current list
pub fn store_export(store: &AppStore) -> Result<String, TaskFileError> {
    store.list().read_untracked().to_json()
}

/// Untracked current text of task `id`
pub fn store_text(store: &AppStore, id: TaskId) -> Option<String> {
    store.list().read_untracked().get(id).map(|t| t.text.clone())
}

pub fn store_begin_load(store: &AppStore) -> LoadTicket {
    store.loads().write().begin()
}

/// Apply the text of a finished read, unless a newer load has started
pub fn store_finish_load(
    store: &AppStore,
    ticket: LoadTicket,
    read: Result<String, TaskFileError>,
) -> LoadOutcome {
    if !store.loads().read_untracked().is_current(ticket) {
        log::debug!("[FILES] load {:?} superseded", ticket);
        return LoadOutcome::Superseded;
    }
    match read.and_then(|text| store_apply(store, |list| list.load_json(&text))) {
        Ok(count) => {
            log::debug!(
                "[FILES] load {:?} applied, next id {}",
                ticket,
                store.list().read_untracked().next_id()
            );
            LoadOutcome::Loaded(count)
        }
        Err(e) => {
            log::debug!("[FILES] load {:?} rejected: {}", ticket, e);
            LoadOutcome::Failed(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_ticket_is_current() {
        let mut loads = LoadQueue::default();
        let ticket = loads.begin();
        assert!(loads.is_current(ticket));
    }

    #[test]
    fn test_newer_load_supersedes_older() {
        let mut loads = LoadQueue::default();
        let first = loads.begin();
        let second = loads.begin();
        assert!(!loads.is_current(first));
        assert!(loads.is_current(second));
    }

    fn new_store() -> AppStore {
        Store::new(AppState::new())
    }

    fn revision(store: &AppStore) -> u64 {
        store.revision().get_untracked()
    }

    #[test]
    fn test_store_apply_bumps_revision_even_for_noop() {
        let store = new_store();
        assert_eq!(store_apply(&store, |list| list.add("Buy milk")), Some(1));
        assert_eq!(revision(&store), 1);

        assert!(!store_apply(&store, |list| list.delete(99)));
        assert!(!store_apply(&store, |list| list.edit(1, "   ")));
        assert_eq!(revision(&store), 3);
        assert_eq!(store_text(&store, 1).as_deref(), Some("Buy milk"));
    }

    #[test]
    fn test_superseded_load_is_dropped() {
        let store = new_store();
        store_apply(&store, |list| list.add("keep me"));
        let before = store.list().get_untracked();

        let older = store_begin_load(&store);
        let newer = store_begin_load(&store);

        let outcome = store_finish_load(&store, older, Ok(r#"{"tasks":[],"nextId":50}"#.into()));
        assert!(matches!(outcome, LoadOutcome::Superseded));
        assert_eq!(store.list().get_untracked(), before);

        let outcome = store_finish_load(
            &store,
            newer,
            Ok(r#"{"tasks":[{"id":7,"text":"fresh"}],"nextId":5}"#.into()),
        );
        assert!(matches!(outcome, LoadOutcome::Loaded(1)));
        assert_eq!(store_text(&store, 7).as_deref(), Some("fresh"));
        assert_eq!(store.list().get_untracked().next_id(), 8);
    }

    #[test]
    fn test_failed_load_keeps_list() {
        let store = new_store();
        store_apply(&store, |list| list.add("keep me"));
        let before = store.list().get_untracked();

        let ticket = store_begin_load(&store);
        let outcome = store_finish_load(&store, ticket, Ok("{bad".into()));
        let LoadOutcome::Failed(err) = outcome else {
            panic!("expected a failed load");
        };
        assert!(err.to_string().contains("line 1 column 2"));
        assert_eq!(store.list().get_untracked(), before);

        let ticket = store_begin_load(&store);
        let outcome = store_finish_load(&store, ticket, Err(TaskFileError::Read("denied".into())));
        assert!(matches!(outcome, LoadOutcome::Failed(TaskFileError::Read(_))));
        assert_eq!(store.list().get_untracked(), before);
    }

    #[test]
    fn test_current_load_replaces_list() {
        let store = new_store();
        store_apply(&store, |list| list.add("old"));

        let ticket = store_begin_load(&store);
        let json = r#"{"tasks":[{"id":1,"text":"a","done":true},{"id":2,"text":"b"}],"nextId":3}"#;
        let outcome = store_finish_load(&store, ticket, Ok(json.into()));
        assert!(matches!(outcome, LoadOutcome::Loaded(2)));

        let (_, tasks) = store_tasks(&store);
        assert_eq!(tasks.len(), 2);
        assert!(tasks[0].done);
        assert_eq!(tasks[1].text, "b");
    }

    #[test]
    fn test_app_state_starts_empty() {
        let state = AppState::new();
        assert!(state.list.tasks().is_empty());
        assert_eq!(state.list.next_id(), 1);
        assert_eq!(state.revision, 0);
    }
}
