//! filedrop-select: file selection rules.
//!
//! The pure half of the filedrop widget: accept-spec parsing and
//! matching, per-batch validation against size/count/type limits,
//! drag-lifecycle state, and error banner state.  Nothing here touches
//! the browser, so every rule is unit-testable on any target.

pub mod accept;
pub mod banner;
pub mod config;
pub mod drag;
pub mod size;
pub mod validate;

pub use accept::{AcceptItem, AcceptSpec};
pub use banner::{ERROR_DISPLAY_MS, ErrorBanner};
pub use config::{DEFAULT_MAX_FILES, DEFAULT_MAX_SIZE_BYTES, SelectorConfig};
pub use drag::DragState;
pub use size::{format_size, size_limit_mb};
pub use validate::{Candidate, FileInfo, ValidationOutcome, validate};
