//! Drag-and-drop file selector with a click-to-browse fallback.

use std::rc::Rc;

use dioxus::html::{FileData, HasFileData};
use dioxus::logger::tracing::warn;
use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::ld_icons::LdUpload;
use filedrop_select::{
    AcceptSpec, Candidate, DEFAULT_MAX_FILES, DEFAULT_MAX_SIZE_BYTES, DragState, ERROR_DISPLAY_MS,
    ErrorBanner, SelectorConfig, size_limit_mb, validate,
};

use crate::dom;

/// Bridges a browser file handle to the metadata the selection rules
/// need.
struct WebFile(FileData);

impl Candidate for WebFile {
    fn file_name(&self) -> String {
        self.0.name()
    }

    fn size_bytes(&self) -> u64 {
        self.0.size()
    }

    fn mime_type(&self) -> String {
        self.0.content_type().unwrap_or_default()
    }
}

/// Props for the [`FileSelector`] component.
#[derive(Props, Clone, PartialEq)]
pub struct FileSelectorProps {
    /// Called with the accepted files whenever a drop or picker
    /// selection yields at least one valid file.  Never called with an
    /// empty list.
    on_files_selected: EventHandler<Vec<FileData>>,
    /// Allowed file types: `*` (anything), or a comma-separated list
    /// of dotted extensions (`.pdf`), MIME prefixes (`image/*`), and
    /// exact MIME types (`application/pdf`).
    #[props(default = String::from("*"))]
    accept: String,
    /// Per-file size ceiling in bytes.
    #[props(default = DEFAULT_MAX_SIZE_BYTES)]
    max_size: u64,
    /// Maximum number of files per selection.  Values above 1 enable
    /// multi-select in the native picker.
    #[props(default = DEFAULT_MAX_FILES)]
    max_files: usize,
    /// Extra CSS classes appended to the drop region.
    #[props(default)]
    class: String,
    /// Display label for the kind of document being collected; has no
    /// effect on validation.
    category: Option<String>,
}

/// A drop region that doubles as a file-picker button.
///
/// Files arrive by drag-and-drop or through the native picker (the
/// whole region is clickable), are validated against the configured
/// limits, and only the files that pass are forwarded to
/// `on_files_selected`.  Rejections are shown in a banner that clears
/// itself after a few seconds.
///
/// The limits are captured when the component mounts; later prop
/// changes do not reconfigure a mounted selector.
#[component]
pub fn FileSelector(props: FileSelectorProps) -> Element {
    let FileSelectorProps {
        on_files_selected,
        accept,
        max_size,
        max_files,
        class,
        category,
    } = props;

    let mut drag = use_signal(DragState::default);
    let mut banner = use_signal(ErrorBanner::default);
    let config = use_hook(|| {
        Rc::new(SelectorConfig {
            accept: AcceptSpec::parse(&accept),
            max_size_bytes: max_size,
            max_files,
        })
    });

    // Validate a batch and dispatch the results.  Shared by the drop
    // and file-picker paths so the validation/banner/callback logic
    // lives in one place.
    let handle_files = use_callback({
        let config = Rc::clone(&config);
        move |files: Vec<FileData>| {
            banner.write().clear();
            if files.is_empty() {
                return;
            }

            let candidates: Vec<WebFile> = files.into_iter().map(WebFile).collect();
            let outcome = validate(candidates, &config);

            if !outcome.errors.is_empty() {
                let shown = banner.write().show(&outcome.errors);
                // The clear task is owned by the component scope, so a
                // pending clear dies with the component on unmount.
                spawn(async move {
                    gloo_timers::future::TimeoutFuture::new(ERROR_DISPLAY_MS).await;
                    banner.write().clear_expired(shown);
                });
            }

            if !outcome.accepted.is_empty() {
                let accepted: Vec<FileData> =
                    outcome.accepted.into_iter().map(|file| file.0).collect();
                on_files_selected.call(accepted);
            }
        }
    });

    let handle_drop = move |evt: DragEvent| {
        evt.prevent_default();
        drag.write().reset();
        handle_files.call(evt.files());
    };

    let handle_change = move |evt: FormEvent| {
        let files = evt.files();
        // Reset so re-picking the same path fires a change event again.
        if let Err(e) = dom::reset_file_input(&evt) {
            warn!("could not reset file input: {e}");
        }
        handle_files.call(files);
    };

    let type_hint = config.accept.summary();
    let limits_hint = if max_files > 1 {
        format!("Up to {max_files} files, {} MB each", size_limit_mb(max_size))
    } else {
        format!("One file, up to {} MB", size_limit_mb(max_size))
    };
    let dragging = drag().is_active();
    let zone_class = if dragging {
        "file-selector file-selector--dragging"
    } else {
        "file-selector"
    };
    let error_text = banner().text().map(ToOwned::to_owned);

    rsx! {
        label {
            class: "{zone_class} {class}",
            ondragenter: move |evt| {
                evt.prevent_default();
                drag.write().enter(dom::drag_has_payload(&evt));
            },
            ondragover: move |evt| {
                // No state change; accepting the event is what allows
                // the drop.
                evt.prevent_default();
            },
            ondragleave: move |_| {
                drag.write().leave();
            },
            ondrop: handle_drop,

            input {
                r#type: "file",
                class: "file-selector__input",
                accept: if accept != "*" { "{accept}" },
                multiple: max_files > 1,
                onchange: handle_change,
            }

            Icon {
                icon: LdUpload,
                width: 28,
                height: 28,
                class: "file-selector__icon",
            }

            if let Some(category) = category {
                p { class: "file-selector__category", "{category}" }
            }

            p { class: "file-selector__prompt",
                if dragging {
                    "Drop files to add them"
                } else {
                    "Drag files here, or click to browse"
                }
            }

            if let Some(hint) = type_hint {
                p { class: "file-selector__hint", "{hint}" }
            }
            p { class: "file-selector__hint", "{limits_hint}" }
            p { class: "file-selector__note",
                "Files are scanned before they are stored."
            }

            if let Some(ref text) = error_text {
                p { class: "file-selector__error", "{text}" }
            }
        }
    }
}
