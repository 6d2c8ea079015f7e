//! Dioxus UI components for filedrop.
//!
//! Provides the drag-and-drop file selector with its click-to-browse
//! picker and error banner, and the accepted-file list.

mod file_list;
mod selector;

pub use file_list::FileList;
pub use file_list::SelectionEntry;
pub use selector::FileSelector;
