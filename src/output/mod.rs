//! Payload rendering and report file naming.

pub mod markdown;

use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::models::{CommitRef, ContextPayload};

/// Serialize the payload as pretty JSON.
pub fn render_json(payload: &ContextPayload) -> serde_json::Result<String> {
    serde_json::to_string_pretty(payload)
}

/// Build a collision-free report path under `dir`.
///
/// Concurrent invocations across commits must never write the same file,
/// so the name carries repository, abbreviated commit, and a
/// nanosecond-resolution timestamp.
pub fn report_path(dir: &Path, repo_name: &str, commit: &CommitRef) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or_default();
    dir.join(format!("{repo_name}-{}-{nanos}.md", commit.short()))
}
