//! Recent commit log, relative to the reviewed commit.

use std::path::Path;

use super::{run_git, GitError};
use crate::models::CommitRef;

/// Return a one-line-per-commit log of the `count` commits immediately
/// preceding `commit`, or `None` when no log is available at all.
///
/// When the commit has no parent (root commit, shallow clone) the
/// commit-relative range fails; we fall back to the repository's most
/// recent `count` commits. For old or replayed commits the fallback can
/// show history unrelated to the reviewed commit — a known approximation.
pub async fn recent_log(
    repo_root: &Path,
    commit: &CommitRef,
    count: usize,
) -> Result<Option<String>, GitError> {
    let n = count.to_string();
    let parent = format!("{}~1", commit.as_str());

    let output = run_git(repo_root, &["log", "--oneline", "-n", &n, &parent]).await?;
    if output.status.success() {
        let text = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if !text.is_empty() {
            return Ok(Some(text));
        }
    }

    // Fallback: most recent commits overall.
    let output = run_git(repo_root, &["log", "--oneline", "-n", &n]).await?;
    if output.status.success() {
        let text = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if !text.is_empty() {
            return Ok(Some(text));
        }
    }

    Ok(None)
}
