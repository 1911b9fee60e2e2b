//! Leptos DragDrop Utilities
//!
//! Native HTML5 drag-and-drop for Leptos list items.
//! The dragged item id travels in the `DataTransfer` payload; signals only
//! drive the visual state (dragging / drop-target classes).

use leptos::prelude::*;
use web_sys::DragEvent;

/// Payload type used for the dragged item id
pub const DRAG_MIME: &str = "text/plain";

/// DnD state signals
#[derive(Clone, Copy)]
pub struct DndSignals {
    pub dragging_id_read: ReadSignal<Option<u32>>,
    pub dragging_id_write: WriteSignal<Option<u32>>,
    /// Item currently hovered as a drop target
    pub drop_target_read: ReadSignal<Option<u32>>,
    pub drop_target_write: WriteSignal<Option<u32>>,
}

pub fn create_dnd_signals() -> DndSignals {
    let (dragging_id_read, dragging_id_write) = signal(None::<u32>);
    let (drop_target_read, drop_target_write) = signal(None::<u32>);
    DndSignals {
        dragging_id_read,
        dragging_id_write,
        drop_target_read,
        drop_target_write,
    }
}

/// Encode an item id as drag payload
pub fn encode_payload(item_id: u32) -> String {
    item_id.to_string()
}

/// Decode a drag payload back into an item id.
/// Foreign payloads (text dragged from elsewhere) decode to `None`.
pub fn parse_payload(payload: &str) -> Option<u32> {
    payload.trim().parse().ok()
}

/// End drag operation
pub fn end_drag(dnd: &DndSignals) {
    dnd.dragging_id_write.set(None);
    dnd.drop_target_write.set(None);
}

/// Create dragstart handler for draggable items
/// Writes the item id into the payload and marks it as dragging
pub fn make_on_dragstart(dnd: DndSignals, item_id: u32) -> impl Fn(DragEvent) + Copy + 'static {
    move |ev: DragEvent| {
        if let Some(dt) = ev.data_transfer() {
            if dt.set_data(DRAG_MIME, &encode_payload(item_id)).is_err() {
                log::warn!("[DND] could not write drag payload for {}", item_id);
                return;
            }
            dt.set_effect_allowed("move");
        }
        log::debug!("[DND] dragstart {}", item_id);
        dnd.dragging_id_write.set(Some(item_id));
    }
}

/// Create dragend handler - clears visual state whether or not a drop happened
pub fn make_on_dragend(dnd: DndSignals) -> impl Fn(DragEvent) + Copy + 'static {
    move |_ev: DragEvent| {
        end_drag(&dnd);
    }
}

/// Create dragover handler for items.
/// Must cancel the event, otherwise the browser never fires `drop`.
pub fn make_on_dragover(dnd: DndSignals, item_id: u32) -> impl Fn(DragEvent) + Copy + 'static {
    move |ev: DragEvent| {
        ev.prevent_default();
        if let Some(dt) = ev.data_transfer() {
            dt.set_drop_effect("move");
        }
        if dnd.drop_target_read.get_untracked() != Some(item_id) {
            dnd.drop_target_write.set(Some(item_id));
        }
    }
}

/// Create dragleave handler
pub fn make_on_dragleave(dnd: DndSignals, item_id: u32) -> impl Fn(DragEvent) + Copy + 'static {
    move |_ev: DragEvent| {
        if dnd.drop_target_read.get_untracked() == Some(item_id) {
            dnd.drop_target_write.set(None);
        }
    }
}

/// Container-level dragover: accept drops anywhere in the list
pub fn allow_drop(ev: DragEvent) {
    ev.prevent_default();
}

/// Create drop handler for an item.
/// Calls `on_drop(dragged_id, target_id)` when the payload decodes to an id.
pub fn make_on_drop<F>(dnd: DndSignals, target_id: u32, on_drop: F) -> impl Fn(DragEvent) + 'static
where
    F: Fn(u32, u32) + 'static,
{
    move |ev: DragEvent| {
        ev.prevent_default();
        ev.stop_propagation();

        let payload = ev
            .data_transfer()
            .and_then(|dt| dt.get_data(DRAG_MIME).ok())
            .unwrap_or_default();

        end_drag(&dnd);

        match parse_payload(&payload) {
            Some(dragged) => {
                log::debug!("[DND] drop: dragged={}, target={}", dragged, target_id);
                on_drop(dragged, target_id);
            }
            None => log::debug!("[DND] drop ignored: payload {:?}", payload),
        }
    }
}
