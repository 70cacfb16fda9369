//! File entries and sentinel content markers.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Content of a file included in the review context.
///
/// Files that cannot be included verbatim keep their entry with a sentinel
/// variant instead of being dropped — the path itself is still relevant
/// context even when the bytes are not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum FileContent {
    /// UTF-8 text content, within the configured size cap.
    Text(String),
    /// Binary data (NUL bytes or invalid UTF-8).
    Binary,
    /// Content exceeded the configured size cap.
    TooLarge { bytes: u64 },
    /// The path could not be read (deleted, permissions, backend error).
    Unreadable,
}

impl FileContent {
    /// Returns the text if present, `None` for any sentinel.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FileContent::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn is_sentinel(&self) -> bool {
        !matches!(self, FileContent::Text(_))
    }
}

impl fmt::Display for FileContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileContent::Text(s) => f.write_str(s),
            FileContent::Binary => f.write_str("[binary file omitted]"),
            FileContent::TooLarge { bytes } => {
                write!(f, "[file omitted: {bytes} bytes exceeds size cap]")
            }
            FileContent::Unreadable => f.write_str("[file could not be read]"),
        }
    }
}

/// A single file included in the context, keyed by repo-relative path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileEntry {
    /// Repo-relative path, forward slashes.
    pub path: String,
    /// Post-commit snapshot or a sentinel marker.
    pub content: FileContent,
}

impl FileEntry {
    pub fn new(path: impl Into<String>, content: FileContent) -> Self {
        Self {
            path: path.into(),
            content,
        }
    }

    pub fn text(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self::new(path, FileContent::Text(content.into()))
    }
}
