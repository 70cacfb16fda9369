//! Markdown rendering of a context payload.

use std::fmt::Write;

use crate::models::{ContextPayload, FileEntry};

/// Render the payload as sectioned markdown: metadata, diff, changed
/// files, related files, then project context.
pub fn render(payload: &ContextPayload) -> String {
    let mut out = String::new();

    let meta = &payload.metadata;
    let _ = writeln!(out, "# Commit {}", payload.commit.short());
    let _ = writeln!(out);
    let _ = writeln!(out, "- **Author:** {}", meta.author);
    let _ = writeln!(out, "- **Date:** {}", meta.date);
    let _ = writeln!(out);
    let _ = writeln!(out, "## Message");
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", meta.message);
    if !meta.stat_summary.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "## Stats");
        let _ = writeln!(out);
        let _ = writeln!(out, "```\n{}\n```", meta.stat_summary);
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "## Diff");
    let _ = writeln!(out);
    match &payload.diff {
        Some(diff) => {
            let _ = writeln!(out, "```diff\n{}\n```", diff.trim_end());
        }
        None => {
            let _ = writeln!(out, "_Diff omitted: exceeded the configured size cap._");
        }
    }

    render_file_section(&mut out, "Changed files", &payload.changed_files);
    render_file_section(&mut out, "Related files", &payload.related_files);

    if let Some(readme) = &payload.readme_excerpt {
        let _ = writeln!(out);
        let _ = writeln!(out, "## README excerpt");
        let _ = writeln!(out);
        let _ = writeln!(out, "{}", readme.trim_end());
    }

    if let Some(log) = &payload.recent_log {
        let _ = writeln!(out);
        let _ = writeln!(out, "## Recent commits");
        let _ = writeln!(out);
        let _ = writeln!(out, "```\n{log}\n```");
    }

    out
}

fn render_file_section(out: &mut String, title: &str, entries: &[FileEntry]) {
    if entries.is_empty() {
        return;
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "## {title}");
    for entry in entries {
        let _ = writeln!(out);
        let _ = writeln!(out, "### `{}`", entry.path);
        let _ = writeln!(out);
        match entry.content.as_text() {
            Some(text) => {
                let _ = writeln!(out, "```\n{}\n```", text.trim_end());
            }
            // Sentinels render as their marker, outside a code fence
            None => {
                let _ = writeln!(out, "{}", entry.content);
            }
        }
    }
}
