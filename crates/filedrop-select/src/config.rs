//! Selector configuration and defaults.

use serde::{Deserialize, Serialize};

use crate::accept::AcceptSpec;

/// Default per-file size ceiling: 100 MiB.
pub const DEFAULT_MAX_SIZE_BYTES: u64 = 100 * 1024 * 1024;

/// Default per-batch file count ceiling.
pub const DEFAULT_MAX_FILES: usize = 10;

/// Limits one selector instance validates against.
///
/// Fixed when the selector mounts; a selection batch is always judged
/// against the configuration it was mounted with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectorConfig {
    /// Which file types are allowed.
    pub accept: AcceptSpec,
    /// Per-file size ceiling in bytes; files strictly larger are
    /// rejected.
    pub max_size_bytes: u64,
    /// Maximum number of files in one selection batch.
    pub max_files: usize,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            accept: AcceptSpec::Any,
            max_size_bytes: DEFAULT_MAX_SIZE_BYTES,
            max_files: DEFAULT_MAX_FILES,
        }
    }
}
