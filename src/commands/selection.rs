//! Focus / Selection Commands

use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use crate::models::TaskId;
use super::{document, js_err, window};

fn task_text_selector(id: TaskId) -> String {
    format!("[data-id=\"{}\"] .task-text", id)
}

/// Focus the editable text of task `id` and select all of it.
/// Returns `Ok(false)` when the task is not on the page.
pub fn select_task_text(id: TaskId) -> Result<bool, String> {
    let document = document()?;
    let Some(element) = document.query_selector(&task_text_selector(id)).map_err(js_err)? else {
        return Ok(false);
    };
    let element = element
        .dyn_into::<HtmlElement>()
        .map_err(|_| "task text is not an html element".to_string())?;
    element.focus().map_err(js_err)?;

    let range = document.create_range().map_err(js_err)?;
    range.select_node_contents(&element).map_err(js_err)?;
    if let Some(selection) = window()?.get_selection().map_err(js_err)? {
        selection.remove_all_ranges().map_err(js_err)?;
        selection.add_range(&range).map_err(js_err)?;
    }
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_text_selector() {
        assert_eq!(task_text_selector(12), "[data-id=\"12\"] .task-text");
    }
}
