//! Git CLI wrappers for commit metadata, diffs, and file snapshots.
//!
//! Shells out to `git` via `tokio::process::Command`. All queries are
//! keyed by repository root plus commit hash; nothing here mutates the
//! repository.

pub mod changeset;
pub mod commit;
pub mod log;

use std::path::Path;
use std::process::Output;

use thiserror::Error;

use crate::models::CommitRef;

/// Errors from the git backend.
#[derive(Error, Debug)]
pub enum GitError {
    #[error("commit not found: {0}")]
    CommitNotFound(String),

    #[error("diff is {bytes} bytes, exceeding the {limit} byte cap")]
    DiffTooLarge { bytes: u64, limit: u64 },

    #[error("git command failed: {0}")]
    CommandFailed(String),

    #[error("not a git repository: {0}")]
    NotARepository(String),
}

/// Run a git command in `repo_root` and return its raw output.
///
/// A non-zero exit status is not an error here — callers inspect the
/// status because some failures (unknown revision) carry meaning.
pub(crate) async fn run_git(repo_root: &Path, args: &[&str]) -> Result<Output, GitError> {
    tokio::process::Command::new("git")
        .args(args)
        .current_dir(repo_root)
        .output()
        .await
        .map_err(|e| GitError::CommandFailed(format!("failed to run git: {e}")))
}

/// Map a failed `git show`/`git rev-parse` on a specific ref to the right error.
pub(crate) fn classify_ref_failure(commit: &CommitRef, stderr: &[u8]) -> GitError {
    let stderr = String::from_utf8_lossy(stderr);
    if stderr.contains("unknown revision")
        || stderr.contains("bad revision")
        || stderr.contains("bad object")
        || stderr.contains("Needed a single revision")
    {
        GitError::CommitNotFound(commit.to_string())
    } else {
        GitError::CommandFailed(stderr.trim().to_string())
    }
}

/// Find the root of the git repository containing `start_dir`.
pub async fn find_repo_root(start_dir: &Path) -> Result<String, GitError> {
    let output = run_git(start_dir, &["rev-parse", "--show-toplevel"]).await?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(GitError::NotARepository(stderr.trim().to_string()));
    }

    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
}

/// Resolve a revision (e.g. `HEAD`, a branch, an abbreviated hash) to a
/// full commit hash.
pub async fn resolve_commit(repo_root: &Path, rev: &str) -> Result<CommitRef, GitError> {
    let spec = format!("{rev}^{{commit}}");
    let output = run_git(repo_root, &["rev-parse", "--verify", &spec]).await?;

    if !output.status.success() {
        return Err(classify_ref_failure(&CommitRef::new(rev), &output.stderr));
    }

    let hash = String::from_utf8_lossy(&output.stdout).trim().to_string();
    Ok(CommitRef::new(hash))
}

#[cfg(test)]
pub(crate) mod testutil {
    use std::path::Path;

    /// Create a commit in a test repository, returning its hash.
    pub async fn commit_all(repo: &Path, message: &str) -> String {
        git(repo, &["add", "-A"]).await;
        git(repo, &["commit", "-m", message]).await;
        let out = tokio::process::Command::new("git")
            .args(["rev-parse", "HEAD"])
            .current_dir(repo)
            .output()
            .await
            .unwrap();
        String::from_utf8(out.stdout).unwrap().trim().to_string()
    }

    /// Initialise a test repository with user config set.
    pub async fn init_repo(repo: &Path) {
        git(repo, &["init", "-b", "main"]).await;
        git(repo, &["config", "user.email", "test@test.com"]).await;
        git(repo, &["config", "user.name", "Test"]).await;
    }

    pub async fn git(repo: &Path, args: &[&str]) {
        let out = tokio::process::Command::new("git")
            .args(args)
            .current_dir(repo)
            .output()
            .await
            .unwrap();
        assert!(
            out.status.success(),
            "git {args:?} failed: {}",
            String::from_utf8_lossy(&out.stderr)
        );
    }
}
