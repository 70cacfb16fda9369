//! Change set extractor: files touched by a commit plus their
//! post-commit snapshots.

use std::path::Path;

use super::{classify_ref_failure, run_git, GitError};
use crate::models::{CommitRef, FileContent, FileEntry};

/// List the paths touched by a commit, in the order git reports them.
pub async fn changed_paths(
    repo_root: &Path,
    commit: &CommitRef,
) -> Result<Vec<String>, GitError> {
    let output = run_git(
        repo_root,
        &[
            "diff-tree",
            "--no-commit-id",
            "--name-only",
            "--root",
            "-r",
            commit.as_str(),
        ],
    )
    .await?;

    if !output.status.success() {
        return Err(classify_ref_failure(commit, &output.stderr));
    }

    Ok(String::from_utf8_lossy(&output.stdout)
        .lines()
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .collect())
}

/// Extract the change set: every touched path paired with its post-commit
/// content.
///
/// Per-file failures are isolated: a path that is deleted, binary, or over
/// the `max_bytes` cap keeps its entry with a sentinel content instead of
/// aborting the extraction. Downstream consumers treat sentinels as "do not
/// include verbatim, but the path is still relevant".
pub async fn extract_changeset(
    repo_root: &Path,
    commit: &CommitRef,
    max_bytes: u64,
) -> Result<Vec<FileEntry>, GitError> {
    let paths = changed_paths(repo_root, commit).await?;

    let mut entries = Vec::with_capacity(paths.len());
    for path in paths {
        let content = snapshot_content(repo_root, commit, &path, max_bytes).await;
        entries.push(FileEntry::new(path, content));
    }

    Ok(entries)
}

/// Read the content of one path as of `commit`, downgrading every failure
/// to a sentinel.
async fn snapshot_content(
    repo_root: &Path,
    commit: &CommitRef,
    path: &str,
    max_bytes: u64,
) -> FileContent {
    let spec = format!("{}:{}", commit.as_str(), path);
    let output = match run_git(repo_root, &["show", &spec]).await {
        Ok(out) => out,
        Err(_) => return FileContent::Unreadable,
    };

    // Deleted paths (and anything else git can't produce) stay as entries
    // with an unreadable sentinel.
    if !output.status.success() {
        return FileContent::Unreadable;
    }

    let bytes = output.stdout.len() as u64;
    if bytes > max_bytes {
        return FileContent::TooLarge { bytes };
    }

    if output.stdout.contains(&0) {
        return FileContent::Binary;
    }

    match String::from_utf8(output.stdout) {
        Ok(text) => FileContent::Text(text),
        Err(_) => FileContent::Binary,
    }
}
