//! Related file loader: working-tree reads for import candidates.

use std::path::Path;

use indexmap::IndexSet;

use crate::models::{FileEntry, FileContent};

/// Load up to `max_files` related files from the working tree.
///
/// Candidates are probed in discovery order; paths already present in the
/// change set are skipped, as are candidates that do not exist, cannot be
/// read as UTF-8, or exceed `max_chars`. Failed probes do not consume the
/// cap — most generated candidates (one per extension) will not exist, and
/// that is expected, not an error.
pub async fn load_related_files(
    repo_root: &Path,
    candidates: &IndexSet<String>,
    changeset_paths: &IndexSet<String>,
    max_files: usize,
    max_chars: usize,
) -> Vec<FileEntry> {
    let mut related = Vec::new();

    for candidate in candidates {
        if related.len() >= max_files {
            break;
        }
        if changeset_paths.contains(candidate) {
            continue;
        }

        let full_path = repo_root.join(candidate);
        if !full_path.is_file() {
            continue;
        }

        match tokio::fs::read_to_string(&full_path).await {
            Ok(content) if content.chars().count() <= max_chars => {
                related.push(FileEntry::new(candidate.clone(), FileContent::Text(content)));
            }
            // Oversized, non-UTF-8, or unreadable: skip without using a slot
            _ => continue,
        }
    }

    related
}
