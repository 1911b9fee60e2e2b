//! Task List App
//!
//! Root component: builds the state once and hands the controller down
//! through context.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{FileControls, NewTaskForm, TaskListView};
use crate::context::AppContext;
use crate::store::AppState;
use crate::strings;

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(AppState::new());
    provide_context(AppContext::new(store));

    view! {
        <main class="app">
            <h1>{strings::TITLE}</h1>

            <div class="toolbar">
                <NewTaskForm />
                <FileControls />
            </div>

            <TaskListView />
        </main>
    }
}
