//! New Task Form Component

use leptos::prelude::*;
use web_sys::KeyboardEvent;

use crate::context::use_app_context;
use crate::strings;

/// Input + add button. Enter in the input adds as well.
#[component]
pub fn NewTaskForm() -> impl IntoView {
    let ctx = use_app_context();
    let (new_text, set_new_text) = signal(String::new());

    // Blank input is kept as typed
    let add = move || {
        if ctx.add_task(&new_text.get_untracked()) {
            set_new_text.set(String::new());
        }
    };

    view! {
        <div class="new-task-form">
            <input
                type="text"
                id="taskInput"
                placeholder=strings::NEW_TASK_PLACEHOLDER
                prop:value=move || new_text.get()
                on:input=move |ev| set_new_text.set(event_target_value(&ev))
                on:keypress=move |ev: KeyboardEvent| {
                    if ev.key() == "Enter" {
                        add();
                    }
                }
            />
            <button id="addBtn" on:click=move |_| add()>{strings::ADD}</button>
        </div>
    }
}
