use super::window;

/// Blocking user notification
pub fn notify(message: &str) {
    let shown = window().and_then(|w| w.alert_with_message(message).map_err(super::js_err));
    if let Err(e) = shown {
        log::warn!("[DIALOG] could not show {:?}: {}", message, e);
    }
}
