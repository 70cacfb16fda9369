//! Commit reader: metadata, diffstat, and the full commit diff.

use std::path::Path;

use super::{classify_ref_failure, run_git, GitError};
use crate::models::{CommitMetadata, CommitRef};

/// NUL-separated format: author, ISO date, raw message body.
const METADATA_FORMAT: &str = "--format=%an <%ae>%x00%aI%x00%B";

/// Read commit metadata (author, date, message, diffstat) for a commit.
pub async fn read_metadata(
    repo_root: &Path,
    commit: &CommitRef,
) -> Result<CommitMetadata, GitError> {
    let output = run_git(
        repo_root,
        &["show", "--no-patch", METADATA_FORMAT, commit.as_str()],
    )
    .await?;

    if !output.status.success() {
        return Err(classify_ref_failure(commit, &output.stderr));
    }

    let text = String::from_utf8_lossy(&output.stdout);
    let mut parts = text.splitn(3, '\0');
    let author = parts.next().unwrap_or_default().trim().to_string();
    let date = parts.next().unwrap_or_default().trim().to_string();
    let message = parts.next().unwrap_or_default().trim().to_string();

    let stat_summary = read_stat(repo_root, commit).await?;

    Ok(CommitMetadata {
        author,
        date,
        message,
        stat_summary,
    })
}

/// Read the diffstat summary (`git show --stat`) for a commit.
async fn read_stat(repo_root: &Path, commit: &CommitRef) -> Result<String, GitError> {
    let output = run_git(
        repo_root,
        &["show", "--stat", "--format=", commit.as_str()],
    )
    .await?;

    if !output.status.success() {
        return Err(classify_ref_failure(commit, &output.stderr));
    }

    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
}

/// Read the full unified diff introduced by a commit.
///
/// The diff is capped at `max_bytes`: a diff beyond the cap yields
/// [`GitError::DiffTooLarge`] rather than a silently truncated diff that
/// could mislead the reviewer. Callers decide whether to abort or proceed
/// with metadata only.
pub async fn read_diff(
    repo_root: &Path,
    commit: &CommitRef,
    max_bytes: u64,
) -> Result<String, GitError> {
    let output = run_git(
        repo_root,
        &[
            "show",
            "--format=",
            "--patch",
            "--src-prefix=a/",
            "--dst-prefix=b/",
            commit.as_str(),
        ],
    )
    .await?;

    if !output.status.success() {
        return Err(classify_ref_failure(commit, &output.stderr));
    }

    let bytes = output.stdout.len() as u64;
    if bytes > max_bytes {
        return Err(GitError::DiffTooLarge {
            bytes,
            limit: max_bytes,
        });
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}
