//! Shared types used across all modules.
//!
//! Defines the core data structures for commits, file entries, and the
//! assembled context payload. Other modules import from here rather than
//! reaching into each other's internals.

pub mod commit;
pub mod file;
pub mod payload;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use commit::CommitMetadata;
pub use file::{FileContent, FileEntry};
pub use payload::ContextPayload;

/// Opaque identifier naming a single commit (a full or abbreviated hash).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CommitRef(String);

impl CommitRef {
    pub fn new(hash: impl Into<String>) -> Self {
        Self(hash.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Abbreviated form for display and file naming (first 12 chars).
    pub fn short(&self) -> &str {
        let end = self.0.len().min(12);
        &self.0[..end]
    }
}

impl fmt::Display for CommitRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CommitRef {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}
