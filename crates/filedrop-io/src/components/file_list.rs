//! Accepted-file list with per-file remove.

use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::ld_icons::{LdFileText, LdX};
use filedrop_select::format_size;

/// One accepted file as displayed in the selection list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionEntry {
    /// File name as reported by the browser.
    pub name: String,
    /// File size in bytes.
    pub size_bytes: u64,
}

/// Props for the [`FileList`] component.
#[derive(Props, Clone, PartialEq)]
pub struct FileListProps {
    /// Files to display, in selection order.
    entries: Vec<SelectionEntry>,
    /// Called with the index of the entry whose remove button was
    /// clicked.
    on_remove: EventHandler<usize>,
}

/// The list of files the user has selected so far.
///
/// Renders a muted placeholder while empty; otherwise one row per
/// file with its name, human-readable size, and a remove button.
#[component]
pub fn FileList(props: FileListProps) -> Element {
    let on_remove = props.on_remove;

    if props.entries.is_empty() {
        return rsx! {
            p { class: "file-list__empty", "No files selected yet." }
        };
    }

    rsx! {
        ul { class: "file-list",
            for (index, entry) in props.entries.iter().enumerate() {
                li { key: "{index}-{entry.name}", class: "file-list__item",
                    Icon {
                        icon: LdFileText,
                        width: 16,
                        height: 16,
                        class: "file-list__icon",
                    }
                    span { class: "file-list__name", "{entry.name}" }
                    span { class: "file-list__size", "{format_size(entry.size_bytes)}" }
                    button {
                        class: "file-list__remove",
                        aria_label: "Remove {entry.name}",
                        onclick: move |_| on_remove.call(index),
                        Icon { icon: LdX, width: 14, height: 14 }
                    }
                }
            }
        }
    }
}
