//! Commit metadata types.

use serde::{Deserialize, Serialize};

/// Metadata resolved once per reviewed commit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitMetadata {
    /// Author name and email as git reports them.
    pub author: String,
    /// Author date, formatted by git (ISO-8601).
    pub date: String,
    /// Full commit message (subject and body).
    pub message: String,
    /// `git show --stat` style diffstat summary.
    pub stat_summary: String,
}

impl CommitMetadata {
    /// First line of the commit message.
    pub fn subject(&self) -> &str {
        self.message.lines().next().unwrap_or_default()
    }
}
