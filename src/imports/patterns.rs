//! Textual import pattern matchers.
//!
//! Three independent matchers, each extracting a single quoted module
//! specifier: CommonJS `require(...)` calls, static `import ... from`
//! statements, and dynamic `import(...)` calls. Scanning is best-effort:
//! malformed or unterminated syntax simply fails to match. Additional
//! source ecosystems can be supported by adding matchers here — no shared
//! state between them.

use std::sync::LazyLock;

use regex::Regex;

/// CommonJS-style `require('x')` / `require("x")`.
static REQUIRE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"require\s*\(\s*['"]([^'"\n]+)['"]\s*\)"#).unwrap());

/// Static `import ... from 'x'` statements.
static IMPORT_FROM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"import\s+[\w$*\s{},]*?from\s*['"]([^'"\n]+)['"]"#).unwrap());

/// Dynamic `import('x')` calls.
static DYNAMIC_IMPORT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"import\s*\(\s*['"]([^'"\n]+)['"]\s*\)"#).unwrap());

/// Extract every module specifier matched by any pattern, in text order
/// per pattern (require, then import-from, then dynamic import).
pub fn scan_specifiers(content: &str) -> Vec<String> {
    let mut specifiers = Vec::new();
    for re in [&*REQUIRE_RE, &*IMPORT_FROM_RE, &*DYNAMIC_IMPORT_RE] {
        for cap in re.captures_iter(content) {
            specifiers.push(cap[1].to_string());
        }
    }
    specifiers
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn matches_require_calls() {
        let src = "const util = require('./util');\nconst fs = require(\"fs\");\n";
        assert_eq!(scan_specifiers(src), vec!["./util", "fs"]);
    }

    #[test]
    fn matches_static_imports() {
        let src = "import { a, b } from './mod';\nimport * as ns from \"../ns\";\nimport def from './def';\n";
        assert_eq!(scan_specifiers(src), vec!["./mod", "../ns", "./def"]);
    }

    #[test]
    fn matches_dynamic_imports() {
        let src = "const mod = await import('./lazy');\n";
        assert_eq!(scan_specifiers(src), vec!["./lazy"]);
    }

    #[test]
    fn unterminated_import_does_not_match() {
        let src = "import { broken from './nope\nconst ok = require('./fine');\n";
        assert_eq!(scan_specifiers(src), vec!["./fine"]);
    }

    #[test]
    fn empty_content_matches_nothing() {
        assert!(scan_specifiers("").is_empty());
    }

    #[test]
    fn plain_code_matches_nothing() {
        assert!(scan_specifiers("function importData() { return 1; }\n").is_empty());
    }
}
