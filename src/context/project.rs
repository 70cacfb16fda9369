//! Project-level ambient context: README excerpt and recent commit log.

use std::path::Path;

use crate::config::ContextConfig;
use crate::git;
use crate::models::CommitRef;

/// README filenames probed at the repository root, in priority order.
/// First successful read wins.
const README_CANDIDATES: &[&str] = &[
    "README.md",
    "README.markdown",
    "README.txt",
    "README",
    "readme.md",
];

/// Ambient repository context, independent of the reviewed commit's diff.
/// Both fields are optional; absence never blocks payload assembly.
#[derive(Debug, Clone, Default)]
pub struct ProjectContext {
    pub readme_excerpt: Option<String>,
    pub recent_log: Option<String>,
}

/// Load README excerpt and recent commit log for a repository.
pub async fn load_project_context(
    repo_root: &Path,
    commit: &CommitRef,
    config: &ContextConfig,
) -> ProjectContext {
    let readme_excerpt = read_readme_excerpt(repo_root, config.readme_max_chars).await;

    let recent_log = git::log::recent_log(repo_root, commit, config.recent_log_count)
        .await
        .unwrap_or_default();

    ProjectContext {
        readme_excerpt,
        recent_log,
    }
}

/// Probe the README candidates and return the prefix of the first one
/// that reads successfully.
async fn read_readme_excerpt(repo_root: &Path, max_chars: usize) -> Option<String> {
    for &name in README_CANDIDATES {
        let path = repo_root.join(name);
        if let Ok(content) = tokio::fs::read_to_string(&path).await {
            return Some(truncate_chars(&content, max_chars));
        }
    }
    None
}

/// Take the first `max_chars` characters, respecting char boundaries.
fn truncate_chars(s: &str, max_chars: usize) -> String {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => s[..idx].to_string(),
        None => s.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn readme_md_wins_over_plain_readme() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("README.md"), "# Markdown").unwrap();
        std::fs::write(dir.path().join("README"), "plain").unwrap();

        let excerpt = read_readme_excerpt(dir.path(), 5000).await;
        assert_eq!(excerpt.as_deref(), Some("# Markdown"));
    }

    #[tokio::test]
    async fn no_readme_yields_absent_not_error() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(read_readme_excerpt(dir.path(), 5000).await, None);
    }

    #[tokio::test]
    async fn excerpt_is_capped() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("README.md"), "r".repeat(6000)).unwrap();

        let excerpt = read_readme_excerpt(dir.path(), 5000).await.unwrap();
        assert_eq!(excerpt.chars().count(), 5000);
    }

    #[test]
    fn truncate_respects_multibyte_boundaries() {
        let s = "héllo wörld";
        let t = truncate_chars(s, 4);
        assert_eq!(t, "héll");
    }

    #[tokio::test]
    async fn project_context_without_git_still_loads_readme() {
        // Not a git repo: the log query fails, README still loads.
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("README.md"), "# Hi").unwrap();

        let ctx = load_project_context(
            dir.path(),
            &CommitRef::new("deadbeef"),
            &ContextConfig::default(),
        )
        .await;
        assert_eq!(ctx.readme_excerpt.as_deref(), Some("# Hi"));
        assert_eq!(ctx.recent_log, None);
    }
}
