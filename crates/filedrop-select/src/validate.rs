//! Batch validation: partition a selection into accepted files and
//! error messages.

use crate::config::SelectorConfig;
use crate::size::size_limit_mb;

/// Metadata the selection rules need from a candidate file.
///
/// Implemented by plain [`FileInfo`] values and, in the UI crate, by a
/// wrapper around the browser's file handles, so the validator never
/// depends on browser types.
pub trait Candidate {
    /// File name as reported by the platform, extension included.
    fn file_name(&self) -> String;
    /// File size in bytes.
    fn size_bytes(&self) -> u64;
    /// MIME type as reported by the platform; may be empty.
    fn mime_type(&self) -> String;
}

/// Plain candidate metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileInfo {
    /// File name, extension included.
    pub name: String,
    /// Size in bytes.
    pub size_bytes: u64,
    /// MIME type; empty when the platform reported none.
    pub mime_type: String,
}

impl Candidate for FileInfo {
    fn file_name(&self) -> String {
        self.name.clone()
    }

    fn size_bytes(&self) -> u64 {
        self.size_bytes
    }

    fn mime_type(&self) -> String {
        self.mime_type.clone()
    }
}

/// The result of validating one selection batch.
///
/// Built fresh for every drop or picker selection; outcomes are never
/// merged across events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationOutcome<C> {
    /// Files that passed every check, in their original relative order.
    pub accepted: Vec<C>,
    /// One message per rejection, in discovery order.
    pub errors: Vec<String>,
}

/// Validate a selection batch against the configured limits.
///
/// A batch larger than `config.max_files` is rejected wholesale with a
/// single message and no per-file checks.  Otherwise each file is
/// checked in order — size ceiling first, then type — and stops at its
/// first failure, so an oversized file of the wrong type produces only
/// the size message.  A file exactly at the size ceiling passes.
#[must_use]
pub fn validate<C: Candidate>(files: Vec<C>, config: &SelectorConfig) -> ValidationOutcome<C> {
    if files.len() > config.max_files {
        return ValidationOutcome {
            accepted: Vec::new(),
            errors: vec![format!(
                "Too many files: at most {} per selection",
                config.max_files
            )],
        };
    }

    let mut accepted = Vec::with_capacity(files.len());
    let mut errors = Vec::new();
    for file in files {
        if file.size_bytes() > config.max_size_bytes {
            errors.push(format!(
                "File too large: {} (max {} MB)",
                file.file_name(),
                size_limit_mb(config.max_size_bytes),
            ));
            continue;
        }
        if !config.accept.matches(&file.file_name(), &file.mime_type()) {
            errors.push(format!("Unsupported file type: {}", file.file_name()));
            continue;
        }
        accepted.push(file);
    }

    ValidationOutcome { accepted, errors }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::accept::AcceptSpec;

    fn file(name: &str, size_bytes: u64, mime_type: &str) -> FileInfo {
        FileInfo {
            name: name.into(),
            size_bytes,
            mime_type: mime_type.into(),
        }
    }

    fn config(accept: &str, max_size_bytes: u64, max_files: usize) -> SelectorConfig {
        SelectorConfig {
            accept: AcceptSpec::parse(accept),
            max_size_bytes,
            max_files,
        }
    }

    // --- Batch ceiling ---

    #[test]
    fn oversized_batch_is_rejected_wholesale() {
        let cfg = config("*", 1000, 2);
        let outcome = validate(
            vec![file("a", 1, ""), file("b", 1, ""), file("c", 1, "")],
            &cfg,
        );
        assert!(outcome.accepted.is_empty());
        assert_eq!(
            outcome.errors,
            vec!["Too many files: at most 2 per selection".to_owned()],
        );
    }

    #[test]
    fn batch_exactly_at_ceiling_is_checked_per_file() {
        let cfg = config("*", 1000, 2);
        let outcome = validate(vec![file("a", 1, ""), file("b", 1, "")], &cfg);
        assert_eq!(outcome.accepted.len(), 2);
        assert!(outcome.errors.is_empty());
    }

    // --- Size ceiling ---

    #[test]
    fn oversized_file_is_excluded_and_named() {
        let cfg = config("*", 1000, 10);
        let outcome = validate(vec![file("big.bin", 1001, "")], &cfg);
        assert!(outcome.accepted.is_empty());
        assert_eq!(outcome.errors.len(), 1);
        assert!(outcome.errors[0].contains("big.bin"));
    }

    #[test]
    fn file_exactly_at_size_ceiling_passes() {
        let cfg = config("*", 1000, 10);
        let outcome = validate(vec![file("edge.bin", 1000, "")], &cfg);
        assert_eq!(outcome.accepted.len(), 1);
        assert!(outcome.errors.is_empty());
    }

    #[test]
    fn size_message_names_the_ceiling_in_mb() {
        let cfg = config("*", 100 * 1024 * 1024, 10);
        let outcome = validate(vec![file("huge.iso", u64::MAX, "")], &cfg);
        assert_eq!(
            outcome.errors,
            vec!["File too large: huge.iso (max 100 MB)".to_owned()],
        );
    }

    // --- Type checks ---

    #[test]
    fn wildcard_skips_type_checks() {
        let cfg = config("*", 1000, 10);
        let outcome = validate(vec![file("odd", 1, "")], &cfg);
        assert_eq!(outcome.accepted.len(), 1);
    }

    #[test]
    fn unsupported_type_is_excluded_and_named() {
        let cfg = config(".jpg,.png", 1000, 10);
        let outcome = validate(vec![file("b.gif", 500, "image/gif")], &cfg);
        assert!(outcome.accepted.is_empty());
        assert_eq!(outcome.errors, vec!["Unsupported file type: b.gif".to_owned()]);
    }

    #[test]
    fn size_failure_suppresses_type_check() {
        // First failure wins: an oversized file of the wrong type
        // produces only the size message.
        let cfg = config(".pdf", 1000, 10);
        let outcome = validate(vec![file("big.gif", 2000, "image/gif")], &cfg);
        assert_eq!(outcome.errors.len(), 1);
        assert!(outcome.errors[0].starts_with("File too large"));
    }

    // --- Partitioning ---

    #[test]
    fn mixed_batch_partitions_in_order() {
        let cfg = config(".jpg,.png", 1000, 2);
        let outcome = validate(
            vec![file("a.jpg", 500, "image/jpeg"), file("b.gif", 500, "image/gif")],
            &cfg,
        );
        assert_eq!(outcome.accepted, vec![file("a.jpg", 500, "image/jpeg")]);
        assert_eq!(outcome.errors, vec!["Unsupported file type: b.gif".to_owned()]);
    }

    #[test]
    fn accepted_files_keep_relative_order() {
        let cfg = config("*", 1000, 10);
        let outcome = validate(
            vec![
                file("one", 1, ""),
                file("too-big", 5000, ""),
                file("two", 2, ""),
                file("three", 3, ""),
            ],
            &cfg,
        );
        let names: Vec<String> = outcome.accepted.iter().map(Candidate::file_name).collect();
        assert_eq!(names, ["one", "two", "three"]);
    }

    #[test]
    fn errors_keep_discovery_order() {
        let cfg = config(".pdf", 1000, 10);
        let outcome = validate(
            vec![file("big.pdf", 2000, ""), file("wrong.gif", 100, "")],
            &cfg,
        );
        assert_eq!(outcome.errors.len(), 2);
        assert!(outcome.errors[0].contains("big.pdf"));
        assert!(outcome.errors[1].contains("wrong.gif"));
    }

    #[test]
    fn empty_batch_yields_empty_outcome() {
        let cfg = config(".pdf", 1000, 10);
        let outcome = validate(Vec::<FileInfo>::new(), &cfg);
        assert!(outcome.accepted.is_empty());
        assert!(outcome.errors.is_empty());
    }
}
