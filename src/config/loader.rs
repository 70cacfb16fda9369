//! Config struct and loading logic.
//!
//! Priority (highest to lowest):
//! 1. CLI flags
//! 2. Environment variables
//! 3. `.commitlens.toml` in repo root
//! 4. `~/.config/commitlens/config.toml` (global defaults)
//! 5. Built-in defaults

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::env::Env;

/// Errors during config loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    ParseFile {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub context: ContextConfig,
    pub reviewer: ReviewerConfig,
}

/// Context assembly policy knobs.
///
/// The defaults describe one review-sized token budget; all of them can be
/// tuned per repository or globally via config files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContextConfig {
    /// Max changed-file entries included in the payload.
    pub max_changed_files: usize,
    /// Max related (imported-but-unchanged) files included.
    pub max_related_files: usize,
    /// README excerpt cap in characters.
    pub readme_max_chars: usize,
    /// Per related file ceiling in characters; larger files are skipped.
    pub related_file_max_chars: usize,
    /// Per changed file read cap in bytes; larger snapshots get a sentinel.
    pub file_read_max_bytes: u64,
    /// Whole-diff cap in bytes; beyond it the commit is too large to review.
    pub diff_max_bytes: u64,
    /// Number of preceding commits in the recent log section.
    pub recent_log_count: usize,
}

impl Default for ContextConfig {
    fn default() -> Self {
        Self {
            max_changed_files: 10,
            max_related_files: 5,
            readme_max_chars: 5000,
            related_file_max_chars: 100_000,
            file_read_max_bytes: 1024 * 1024,
            diff_max_bytes: 10 * 1024 * 1024,
            recent_log_count: 5,
        }
    }
}

/// Reviewer collaborator configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReviewerConfig {
    /// Caller-visible timeout for the outbound review call, in seconds.
    pub timeout_secs: u64,
}

impl Default for ReviewerConfig {
    fn default() -> Self {
        Self { timeout_secs: 120 }
    }
}

impl Config {
    /// Load configuration with proper layering.
    ///
    /// Reads from global config, repo-local config, then applies
    /// environment variable overrides.
    pub fn load(repo_root: Option<&Path>, env: &Env) -> Result<Self, ConfigError> {
        let mut config = Config::default();

        // Layer 4: global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                let global = Self::load_file(&global_path)?;
                config.merge(global);
            }
        }

        // Layer 3: repo-local config
        if let Some(root) = repo_root {
            let local_path = root.join(crate::constants::CONFIG_FILENAME);
            if local_path.exists() {
                let local = Self::load_file(&local_path)?;
                config.merge(local);
            }
        }

        // Layer 2: environment variables
        config.apply_env_vars(env);

        Ok(config)
    }

    /// Load a config from a specific file.
    fn load_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source: e,
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseFile {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the global config file path.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(crate::constants::CONFIG_DIR).join("config.toml"))
    }

    /// Merge another config into this one (other takes precedence for
    /// non-default values).
    fn merge(&mut self, other: Config) {
        let ctx_default = ContextConfig::default();
        if other.context.max_changed_files != ctx_default.max_changed_files {
            self.context.max_changed_files = other.context.max_changed_files;
        }
        if other.context.max_related_files != ctx_default.max_related_files {
            self.context.max_related_files = other.context.max_related_files;
        }
        if other.context.readme_max_chars != ctx_default.readme_max_chars {
            self.context.readme_max_chars = other.context.readme_max_chars;
        }
        if other.context.related_file_max_chars != ctx_default.related_file_max_chars {
            self.context.related_file_max_chars = other.context.related_file_max_chars;
        }
        if other.context.file_read_max_bytes != ctx_default.file_read_max_bytes {
            self.context.file_read_max_bytes = other.context.file_read_max_bytes;
        }
        if other.context.diff_max_bytes != ctx_default.diff_max_bytes {
            self.context.diff_max_bytes = other.context.diff_max_bytes;
        }
        if other.context.recent_log_count != ctx_default.recent_log_count {
            self.context.recent_log_count = other.context.recent_log_count;
        }

        if other.reviewer.timeout_secs != ReviewerConfig::default().timeout_secs {
            self.reviewer.timeout_secs = other.reviewer.timeout_secs;
        }
    }

    /// Apply environment variable overrides.
    fn apply_env_vars(&mut self, env: &Env) {
        if let Some(n) = env.var_parsed::<usize>(crate::constants::ENV_MAX_CHANGED_FILES) {
            self.context.max_changed_files = n;
        }
        if let Some(n) = env.var_parsed::<usize>(crate::constants::ENV_MAX_RELATED_FILES) {
            self.context.max_related_files = n;
        }
        if let Some(n) = env.var_parsed::<u64>(crate::constants::ENV_REVIEW_TIMEOUT) {
            self.reviewer.timeout_secs = n;
        }
    }
}
