//! Task List View Component
//!
//! Regenerates every row from the store whenever the render revision moves.

use leptos::prelude::*;
use leptos_dragdrop::*;

use crate::components::TaskItem;
use crate::context::use_app_context;
use crate::rows::{render_list, RenderedList};
use crate::store::store_tasks;

#[component]
pub fn TaskListView() -> impl IntoView {
    let ctx = use_app_context();
    let dnd = create_dnd_signals();

    let rendered = move || {
        let (revision, tasks) = store_tasks(&ctx.store);
        log::trace!("[APP] render revision {} ({} tasks)", revision, tasks.len());
        render_list(&tasks)
    };

    view! {
        // Drops between or below items land here and are ignored
        <ul class="task-list" id="taskList" on:dragover=allow_drop on:drop=allow_drop>
            {move || match rendered() {
                RenderedList::Placeholder(message) => {
                    view! { <li class="empty-list">{message}</li> }.into_any()
                }
                RenderedList::Rows(rows) => {
                    rows.into_iter()
                        .map(|row| view! { <TaskItem row=row dnd=dnd /> })
                        .collect_view()
                        .into_any()
                }
            }}
        </ul>
    }
}
