use dioxus::html::FileData;
use dioxus::prelude::*;
use filedrop_io::{FileList, FileSelector, SelectionEntry};

fn main() {
    dioxus::launch(app);
}

/// Root application component.
///
/// Mounts the file selector for supporting documents and keeps the
/// running list of everything the user has picked.  What happens to
/// the files after selection (upload, storage) is outside this page;
/// it only ever sees files that passed validation.
fn app() -> Element {
    let mut selected = use_signal(Vec::<SelectionEntry>::new);

    // Each callback invocation is one completed selection batch with
    // at least one valid file.
    let on_files_selected = move |files: Vec<FileData>| {
        let mut list = selected.write();
        for file in files {
            list.push(SelectionEntry {
                name: file.name(),
                size_bytes: file.size(),
            });
        }
    };

    let on_remove = move |index: usize| {
        selected.write().remove(index);
    };

    rsx! {
        style { dangerous_inner_html: include_str!("../assets/app.css") }

        div { class: "page",
            header { class: "page__header",
                h1 { "filedrop" }
                p { class: "page__tagline",
                    "Add the documents for your application"
                }
            }

            main { class: "page__content",
                FileSelector {
                    accept: ".pdf,.doc,.docx,.txt,image/*",
                    max_size: 25 * 1024 * 1024,
                    max_files: 5,
                    category: "Supporting documents",
                    on_files_selected: on_files_selected,
                }

                section { class: "page__selection",
                    h2 { "Selected files" }
                    FileList {
                        entries: selected(),
                        on_remove: on_remove,
                    }
                }
            }
        }
    }
}
