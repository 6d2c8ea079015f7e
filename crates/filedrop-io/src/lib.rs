//! filedrop-io: Browser integration and Dioxus component library.
//!
//! Wires the pure selection rules from `filedrop-select` to the DOM:
//! the drag-and-drop [`FileSelector`] widget, the [`FileList`]
//! companion, and the web-sys helpers both rely on.

pub mod components;
pub mod dom;

pub use components::{FileList, FileSelector, SelectionEntry};
