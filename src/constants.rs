//! App-wide constants.
//!
//! Centralises the tool name, config paths, and environment variable
//! names so a rename only requires changing this file.

/// Display name of the tool (lowercase).
pub const APP_NAME: &str = "commitlens";

/// Crate version, injected by cargo.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Local config filename (e.g. `.commitlens.toml` in repo root).
pub const CONFIG_FILENAME: &str = ".commitlens.toml";

/// Directory name under `~/.config/` for the global config.
pub const CONFIG_DIR: &str = "commitlens";


// ── Environment variable names ──────────────────────────────────────

pub const ENV_MAX_CHANGED_FILES: &str = "COMMITLENS_MAX_CHANGED_FILES";
pub const ENV_MAX_RELATED_FILES: &str = "COMMITLENS_MAX_RELATED_FILES";
pub const ENV_REVIEW_TIMEOUT: &str = "COMMITLENS_REVIEW_TIMEOUT";
