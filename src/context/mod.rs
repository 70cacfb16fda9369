//! Context assembly.
//!
//! `related` and `project` do the filesystem/git probing; [`assemble`]
//! itself is pure data composition and deterministic for identical inputs.

pub mod project;
pub mod related;

use crate::config::ContextConfig;
use crate::models::{CommitMetadata, CommitRef, ContextPayload, FileEntry};

pub use project::ProjectContext;

/// Merge commit data, file contents, and project context into the final
/// payload. No I/O happens here.
///
/// The change set is truncated to the configured cap — entries beyond it
/// are dropped, not summarized. Related files are assumed to be already
/// capped and disjoint from the change set by the loader.
pub fn assemble(
    commit: CommitRef,
    metadata: CommitMetadata,
    diff: Option<String>,
    mut changed_files: Vec<FileEntry>,
    related_files: Vec<FileEntry>,
    project: ProjectContext,
    config: &ContextConfig,
) -> ContextPayload {
    changed_files.truncate(config.max_changed_files);

    ContextPayload {
        commit,
        metadata,
        diff,
        changed_files,
        related_files,
        readme_excerpt: project.readme_excerpt,
        recent_log: project.recent_log,
    }
}
