//! Accept-spec parsing and matching.
//!
//! An accept spec is the caller-facing string describing which files a
//! selector takes: either the wildcard `*` (no restriction) or a
//! comma-separated list of dotted extensions (`.pdf`), MIME prefixes
//! (`image/*`), and exact MIME types (`application/pdf`) — the same
//! grammar the HTML `accept` attribute uses.

use serde::{Deserialize, Serialize};

/// A parsed accept spec: the wildcard, or a list of [`AcceptItem`]s of
/// which at least one must match.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AcceptSpec {
    /// The wildcard `*` — every file type is allowed.
    #[default]
    Any,
    /// A restrictive list; a file passes when any item matches.
    List(Vec<AcceptItem>),
}

/// One entry of a restrictive accept spec.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AcceptItem {
    /// A dotted extension such as `.pdf`, matched case-insensitively
    /// against the file name's extension.
    Extension(String),
    /// The text before a `*`, prefix-matched against the MIME type
    /// (`image/*` stores `image/`).
    MimePrefix(String),
    /// An exact MIME type such as `application/pdf`.
    Mime(String),
}

impl AcceptSpec {
    /// Parse a caller-supplied accept string.
    ///
    /// Items are split on commas and trimmed; empty items (from
    /// trailing or doubled commas) are discarded, so `".pdf,"` behaves
    /// like `".pdf"`.
    #[must_use]
    pub fn parse(spec: &str) -> Self {
        if spec == "*" {
            return Self::Any;
        }
        // A spec with no usable items restricts to nothing rather
        // than silently allowing everything.
        Self::List(
            spec.split(',')
                .map(str::trim)
                .filter(|item| !item.is_empty())
                .map(AcceptItem::parse)
                .collect(),
        )
    }

    /// Whether a file with the given name and MIME type is allowed.
    ///
    /// An empty MIME type never matches a MIME item, and a name with
    /// no `.` never matches an extension item.
    #[must_use]
    pub fn matches(&self, file_name: &str, mime_type: &str) -> bool {
        match self {
            Self::Any => true,
            Self::List(items) => {
                let ext = extension_of(file_name);
                items
                    .iter()
                    .any(|item| item.matches(ext.as_deref(), mime_type))
            }
        }
    }

    /// Human-readable summary of the allowed types for hint text,
    /// e.g. `".pdf,.docx,image/*"` → `"PDF, DOCX, image/*"`.
    ///
    /// Returns `None` for the wildcard.
    #[must_use]
    pub fn summary(&self) -> Option<String> {
        match self {
            Self::Any => None,
            Self::List(items) => Some(
                items
                    .iter()
                    .map(AcceptItem::label)
                    .collect::<Vec<_>>()
                    .join(", "),
            ),
        }
    }
}

impl AcceptItem {
    /// Classify one trimmed, non-empty accept entry.
    ///
    /// A leading `.` wins over an embedded `*`, so `.p*f` is treated
    /// as a (never-matching) extension rather than a MIME prefix.
    #[must_use]
    pub fn parse(item: &str) -> Self {
        if item.starts_with('.') {
            Self::Extension(item.to_owned())
        } else if let Some(star) = item.find('*') {
            Self::MimePrefix(item[..star].to_owned())
        } else {
            Self::Mime(item.to_owned())
        }
    }

    /// Whether this item matches a file's extension and MIME type.
    ///
    /// `ext` is the lower-cased dotted extension, or `None` when the
    /// name contains no `.`.
    #[must_use]
    pub fn matches(&self, ext: Option<&str>, mime_type: &str) -> bool {
        match self {
            Self::Extension(want) => ext.is_some_and(|e| e.eq_ignore_ascii_case(want)),
            Self::MimePrefix(prefix) => mime_type.starts_with(prefix),
            Self::Mime(want) => mime_type == want,
        }
    }

    /// Display label for hint text: extensions are upper-cased without
    /// the dot, MIME entries shown verbatim.
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Extension(ext) => ext.trim_start_matches('.').to_ascii_uppercase(),
            Self::MimePrefix(prefix) => format!("{prefix}*"),
            Self::Mime(mime) => mime.clone(),
        }
    }
}

/// The dotted, lower-cased extension of a file name: everything after
/// the last `.`, or `None` when the name contains no `.`.
fn extension_of(name: &str) -> Option<String> {
    name.rsplit_once('.')
        .map(|(_, ext)| format!(".{}", ext.to_ascii_lowercase()))
}
