//! File Controls Component
//!
//! Save / load buttons and the hidden file picker behind "load".

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;

use crate::context::use_app_context;
use crate::strings;

#[component]
pub fn FileControls() -> impl IntoView {
    let ctx = use_app_context();
    let file_input = NodeRef::<leptos::html::Input>::new();

    let on_file_change = move |ev: web_sys::Event| {
        let Some(input) = ev.target().and_then(|t| t.dyn_into::<HtmlInputElement>().ok()) else {
            return;
        };
        if let Some(file) = input.files().and_then(|files| files.get(0)) {
            ctx.load_from_file(file);
        }
        // Reset so picking the same file again still fires `change`
        input.set_value("");
    };

    view! {
        <div class="file-controls">
            <button id="saveBtn" on:click=move |_| ctx.save_to_file()>{strings::SAVE}</button>
            <button
                id="loadBtn"
                on:click=move |_| {
                    if let Some(input) = file_input.get() {
                        input.click();
                    }
                }
            >
                {strings::LOAD}
            </button>
            <input
                type="file"
                id="loadFile"
                accept=".json,application/json"
                style="display: none;"
                node_ref=file_input
                on:change=on_file_change
            />
        </div>
    }
}
