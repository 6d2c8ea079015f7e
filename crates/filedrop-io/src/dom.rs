//! Raw-event helpers for the selector component.
//!
//! Dioxus's cross-platform event types do not expose everything the
//! selector needs from the underlying browser events: whether a drag
//! payload carries items (the `DataTransfer` item list) and the file
//! input element a change event came from.  Both require a browser
//! environment (`wasm32-unknown-unknown` target).

use dioxus::prelude::{DragEvent, FormEvent};
use dioxus::web::WebEventExt;
use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;

/// Errors that can occur when reaching through to the raw DOM event.
#[derive(Debug, thiserror::Error)]
pub enum DomError {
    /// The event is not backed by a browser event (non-web renderer).
    #[error("event is not backed by a browser event")]
    NotBrowser,
    /// The event target is missing or is not a file input element.
    #[error("event target is not a file input")]
    NotFileInput,
}

/// Whether a drag event's payload carries at least one item.
///
/// Browsers expose the payload's item list during `dragenter` even
/// though file contents stay hidden until the drop.  When the raw
/// event is unavailable the payload is assumed non-empty, so the drop
/// region still highlights.
#[must_use]
pub fn drag_has_payload(evt: &DragEvent) -> bool {
    evt.try_as_web_event()
        .and_then(|event| event.data_transfer())
        .is_none_or(|transfer| transfer.items().length() > 0)
}

/// Reset the file input a change event came from.
///
/// Clearing the input's value makes the browser fire a change event
/// even when the user re-picks the same path, so an identical
/// selection twice in a row is handled both times.
///
/// # Errors
///
/// Returns [`DomError::NotBrowser`] outside a browser environment and
/// [`DomError::NotFileInput`] when the event target cannot be cast to
/// an input element.
pub fn reset_file_input(evt: &FormEvent) -> Result<(), DomError> {
    let event = evt.try_as_web_event().ok_or(DomError::NotBrowser)?;
    let input: HtmlInputElement = event
        .target()
        .ok_or(DomError::NotFileInput)?
        .dyn_into()
        .map_err(|_| DomError::NotFileInput)?;
    input.set_value("");
    Ok(())
}
