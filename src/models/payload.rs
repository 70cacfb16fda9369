//! The assembled context payload handed to the reviewer.

use serde::{Deserialize, Serialize};

use super::commit::CommitMetadata;
use super::file::FileEntry;
use super::CommitRef;

/// The bounded bundle of commit data, file contents, and project context.
///
/// Built once per reviewed commit by the assembler and consumed exactly
/// once by the reviewer collaborator. Immutable after construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContextPayload {
    /// The reviewed commit.
    pub commit: CommitRef,
    /// Author, date, message, diffstat.
    pub metadata: CommitMetadata,
    /// Full unified diff, or `None` in degraded mode (oversized diff).
    pub diff: Option<String>,
    /// Post-commit contents of changed files, git report order, capped.
    pub changed_files: Vec<FileEntry>,
    /// Files imported by changed files but not themselves changed, capped.
    pub related_files: Vec<FileEntry>,
    /// Prefix of the repository README, when one was readable.
    pub readme_excerpt: Option<String>,
    /// Short log of commits preceding the reviewed one, when available.
    pub recent_log: Option<String>,
}

impl ContextPayload {
    /// Total number of file entries carried by the payload.
    pub fn file_count(&self) -> usize {
        self.changed_files.len() + self.related_files.len()
    }
}
