//! Static import scanning and relative-path candidate resolution.
//!
//! Pure text and path work: patterns extract quoted module specifiers,
//! resolution turns relative specifiers into repo-relative candidate
//! paths. Nothing here touches the filesystem — existence is probed later
//! by the related-file loader.

pub mod patterns;

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use crate::models::FileEntry;

/// Extensions tried for each relative specifier, in order: the bare path
/// first, then common source extensions.
pub const RESOLVE_EXTENSIONS: &[&str] = &["", ".js", ".jsx", ".ts", ".tsx", ".mjs", ".cjs"];

/// One import found in a file, with the candidate sibling paths it
/// resolves to. Bare specifiers (external dependencies) carry no candidates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportReference {
    pub raw_specifier: String,
    pub candidates: Vec<String>,
}

/// Scan a file's content for imports and resolve each to candidate paths.
///
/// `file_path` is the repo-relative path of the importing file; candidates
/// are repo-relative too. Specifiers without a leading `./` or `../` name
/// external dependencies and yield zero candidates.
pub fn resolve_imports(file_path: &str, content: &str) -> Vec<ImportReference> {
    patterns::scan_specifiers(content)
        .into_iter()
        .map(|raw_specifier| {
            let candidates = candidate_paths(file_path, &raw_specifier);
            ImportReference {
                raw_specifier,
                candidates,
            }
        })
        .collect()
}

/// Collect the deduplicated candidate set across a whole change set, in
/// first-discovery order. Sentinel-content entries contribute nothing.
pub fn collect_candidates(changeset: &[FileEntry]) -> IndexSet<String> {
    let mut candidates = IndexSet::new();
    for entry in changeset {
        let Some(text) = entry.content.as_text() else {
            continue;
        };
        for import in resolve_imports(&entry.path, text) {
            for candidate in import.candidates {
                candidates.insert(candidate);
            }
        }
    }
    candidates
}

/// Resolve one specifier against the importing file's directory.
fn candidate_paths(file_path: &str, specifier: &str) -> Vec<String> {
    if !specifier.starts_with("./") && !specifier.starts_with("../") {
        return Vec::new();
    }

    let dir = match file_path.rsplit_once('/') {
        Some((dir, _)) => dir,
        None => "",
    };

    let joined = if dir.is_empty() {
        specifier.to_string()
    } else {
        format!("{dir}/{specifier}")
    };
    let base = normalize(&joined);

    RESOLVE_EXTENSIONS
        .iter()
        .map(|ext| format!("{base}{ext}"))
        .collect()
}

/// Lexically normalize `.` and `..` segments in a `/`-separated path.
/// `..` that escapes the repo root is clamped at the root.
fn normalize(path: &str) -> String {
    let mut parts: Vec<&str> = Vec::new();
    for seg in path.split('/') {
        match seg {
            "" | "." => {}
            ".." => {
                parts.pop();
            }
            other => parts.push(other),
        }
    }
    parts.join("/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FileContent;
    use pretty_assertions::assert_eq;

    #[test]
    fn bare_specifier_yields_no_candidates() {
        let refs = resolve_imports("src/a.js", "import _ from 'lodash';\n");
        assert_eq!(refs.len(), 1);
        assert_eq!(refs[0].raw_specifier, "lodash");
        assert!(refs[0].candidates.is_empty());
    }

    #[test]
    fn relative_specifier_yields_one_candidate_per_extension() {
        let refs = resolve_imports("src/a.js", "import { f } from './utils';\n");
        assert_eq!(refs.len(), 1);
        assert_eq!(refs[0].candidates.len(), RESOLVE_EXTENSIONS.len());
        assert_eq!(refs[0].candidates[0], "src/utils");
        assert_eq!(refs[0].candidates[1], "src/utils.js");
        assert!(refs[0].candidates.contains(&"src/utils.tsx".to_string()));
    }

    #[test]
    fn parent_directory_specifiers_normalize() {
        let refs = resolve_imports("src/deep/a.js", "const x = require('../common/util');\n");
        assert_eq!(refs[0].candidates[0], "src/common/util");
    }

    #[test]
    fn escaping_the_root_clamps() {
        let refs = resolve_imports("a.js", "import x from '../../lib';\n");
        assert_eq!(refs[0].candidates[0], "lib");
    }

    #[test]
    fn top_level_importer_resolves_siblings() {
        let refs = resolve_imports("a.js", "import { f } from './b';\n");
        assert_eq!(refs[0].candidates[0], "b");
        assert_eq!(refs[0].candidates[1], "b.js");
    }

    #[test]
    fn collect_dedups_across_files_in_discovery_order() {
        let changeset = vec![
            FileEntry::text("src/a.js", "import x from './shared';\nimport y from './only-a';\n"),
            FileEntry::text("src/b.js", "import z from './shared';\n"),
        ];
        let candidates = collect_candidates(&changeset);

        let shared_count = candidates.iter().filter(|c| *c == "src/shared").count();
        assert_eq!(shared_count, 1, "duplicates must collapse");

        // Discovery order: everything from a.js before b.js contributions
        let first = candidates.get_index(0).unwrap();
        assert_eq!(first, "src/shared");
    }

    #[test]
    fn sentinel_entries_contribute_nothing() {
        let changeset = vec![FileEntry::new("logo.png", FileContent::Binary)];
        assert!(collect_candidates(&changeset).is_empty());
    }

    #[test]
    fn no_imports_means_no_references() {
        assert!(resolve_imports("a.js", "const x = 1;\n").is_empty());
    }
}
