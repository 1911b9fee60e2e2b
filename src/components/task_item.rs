//! Task Item Component
//!
//! One draggable list entry: checkbox, editable text, action buttons.

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{FocusEvent, HtmlElement};

use leptos_dragdrop::*;

use crate::context::use_app_context;
use crate::rows::TaskRow;
use crate::strings;

#[component]
pub fn TaskItem(row: TaskRow, dnd: DndSignals) -> impl IntoView {
    let ctx = use_app_context();

    let id = row.id;
    let done = row.done;
    let toggle_label = row.toggle_label;
    let text = row.text.clone();

    let item_class = move || {
        let dragging = dnd.dragging_id_read.get() == Some(id);
        let drop_target = dnd.drop_target_read.get() == Some(id) && !dragging;
        row.class(dragging, drop_target)
    };

    let on_text_blur = move |ev: FocusEvent| {
        if let Some(el) = ev.target().and_then(|t| t.dyn_into::<HtmlElement>().ok()) {
            ctx.edit_task(id, &el.text_content().unwrap_or_default());
        }
    };

    view! {
        <li
            class=item_class
            draggable="true"
            data-id=id.to_string()
            on:dragstart=make_on_dragstart(dnd, id)
            on:dragend=make_on_dragend(dnd)
            on:dragover=make_on_dragover(dnd, id)
            on:dragleave=make_on_dragleave(dnd, id)
            on:drop=make_on_drop(dnd, id, move |dragged, target| ctx.reorder(dragged, target))
        >
            <input
                type="checkbox"
                class="task-checkbox"
                prop:checked=done
                on:change=move |_| ctx.toggle_task(id)
            />
            <span class="task-text" contenteditable="true" on:blur=on_text_blur>
                {text}
            </span>
            <div class="task-buttons">
                <button class="btn-toggle" on:click=move |_| ctx.toggle_task(id)>
                    {toggle_label}
                </button>
                <button class="btn-edit" on:click=move |_| ctx.start_editing(id)>
                    {strings::EDIT}
                </button>
                <button class="btn-delete" on:click=move |_| ctx.delete_task(id)>
                    {strings::DELETE}
                </button>
            </div>
        </li>
    }
}
