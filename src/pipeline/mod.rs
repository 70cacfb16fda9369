//! Single-pass pipeline: commit → change set → imports → related files →
//! project context → assembled payload.
//!
//! Data flows strictly forward. Commit-level failures abort the run with a
//! stage-tagged error; per-file failures were already downgraded to
//! sentinels by the stages themselves.

use std::path::Path;

use indexmap::IndexSet;
use thiserror::Error;

use crate::config::Config;
use crate::context;
use crate::git::{self, GitError};
use crate::imports;
use crate::models::{CommitRef, ContextPayload};

/// How to treat a diff that exceeds the configured cap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DiffMode {
    /// Abort the review for this commit.
    #[default]
    Strict,
    /// Proceed with metadata only; the payload carries no diff.
    AllowMissingDiff,
}

/// A pipeline failure, tagged with the stage that produced it so an
/// aborted review is distinguishable from an empty one.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("commit reader: {0}")]
    Commit(#[source] GitError),

    #[error("change set extractor: {0}")]
    ChangeSet(#[source] GitError),
}

/// Gather the full review context for one commit.
///
/// Stages 1–4 run in sequence; project context is gathered alongside and
/// merged by the final, pure assembly step. When `skip_project_context` is
/// true the README and recent-log sections stay absent. Repeated
/// invocations are fully independent.
pub async fn gather_context(
    repo_root: &Path,
    commit: &CommitRef,
    config: &Config,
    diff_mode: DiffMode,
    skip_project_context: bool,
) -> Result<ContextPayload, PipelineError> {
    let ctx = &config.context;

    // 1. Commit reader
    let metadata = git::commit::read_metadata(repo_root, commit)
        .await
        .map_err(PipelineError::Commit)?;
    let diff = match git::commit::read_diff(repo_root, commit, ctx.diff_max_bytes).await {
        Ok(diff) => Some(diff),
        Err(GitError::DiffTooLarge { .. }) if diff_mode == DiffMode::AllowMissingDiff => None,
        Err(e) => return Err(PipelineError::Commit(e)),
    };

    // 2. Change set extractor
    let changeset = git::changeset::extract_changeset(repo_root, commit, ctx.file_read_max_bytes)
        .await
        .map_err(PipelineError::ChangeSet)?;

    // 3. Import resolver (pure path construction, no probing)
    let candidates = imports::collect_candidates(&changeset);

    // 4. Related file loader
    let changeset_paths: IndexSet<String> =
        changeset.iter().map(|e| e.path.clone()).collect();
    let related = context::related::load_related_files(
        repo_root,
        &candidates,
        &changeset_paths,
        ctx.max_related_files,
        ctx.related_file_max_chars,
    )
    .await;

    // 5. Project context loader (both halves independently optional)
    let project = if skip_project_context {
        context::ProjectContext::default()
    } else {
        context::project::load_project_context(repo_root, commit, ctx).await
    };

    // 6. Assembler (pure)
    Ok(context::assemble(
        commit.clone(),
        metadata,
        diff,
        changeset,
        related,
        project,
        ctx,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::git::testutil::{commit_all, init_repo};

    #[tokio::test]
    async fn unknown_commit_aborts_at_commit_stage() {
        let dir = tempfile::tempdir().unwrap();
        init_repo(dir.path()).await;
        tokio::fs::write(dir.path().join("a.txt"), "x\n").await.unwrap();
        commit_all(dir.path(), "init").await;

        let result = gather_context(
            dir.path(),
            &CommitRef::new("ffffffffffffffffffffffffffffffffffffffff"),
            &Config::default(),
            DiffMode::Strict,
            false,
        )
        .await;

        match result {
            Err(PipelineError::Commit(GitError::CommitNotFound(_))) => {}
            other => panic!("expected CommitNotFound at commit stage, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn oversized_diff_strict_vs_degraded() {
        let dir = tempfile::tempdir().unwrap();
        init_repo(dir.path()).await;
        let big: String = (0..500).map(|i| format!("line number {i}\n")).collect();
        tokio::fs::write(dir.path().join("big.txt"), big).await.unwrap();
        let hash = commit_all(dir.path(), "big").await;
        let commit = CommitRef::new(hash);

        let mut config = Config::default();
        config.context.diff_max_bytes = 64;

        let strict =
            gather_context(dir.path(), &commit, &config, DiffMode::Strict, false).await;
        assert!(matches!(
            strict,
            Err(PipelineError::Commit(GitError::DiffTooLarge { .. }))
        ));

        let degraded =
            gather_context(dir.path(), &commit, &config, DiffMode::AllowMissingDiff, false)
                .await
                .unwrap();
        assert!(degraded.diff.is_none());
        assert_eq!(degraded.metadata.subject(), "big");
        assert_eq!(degraded.changed_files.len(), 1);
    }
}
