//! Clap argument types and validation.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use commitlens::config::Config;

/// Bounded git commit context assembly for LLM code review.
#[derive(Parser, Debug)]
#[command(name = "commitlens", version = commitlens::constants::VERSION)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(clap::Subcommand, Debug)]
pub enum Command {
    /// Assemble the review context for a commit and print or write it.
    Context(Box<ContextArgs>),

    /// Print version information.
    Version,
}

/// Output format for the assembled payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Sectioned markdown.
    Markdown,
    /// Pretty-printed JSON.
    Json,
}

/// Arguments for the `context` subcommand.
#[derive(Parser, Debug)]
pub struct ContextArgs {
    /// Path inside the repository (default: current directory).
    #[arg(long, default_value = ".")]
    pub path: PathBuf,

    /// Commit to review (hash, branch, or any revision; default: HEAD).
    #[arg(long, default_value = "HEAD")]
    pub commit: String,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Markdown)]
    pub format: OutputFormat,

    /// Write the rendered payload to a file in this directory instead of
    /// stdout. The filename embeds repo, commit, and timestamp, so
    /// concurrent invocations never collide.
    #[arg(long)]
    pub out: Option<PathBuf>,

    /// Proceed with metadata only when the diff exceeds the size cap,
    /// instead of aborting.
    #[arg(long, default_value_t = false)]
    pub allow_oversized_diff: bool,

    /// Skip the README excerpt and recent commit log.
    #[arg(long, default_value_t = false)]
    pub no_project_context: bool,

    /// Override the changed-file cap from config.
    #[arg(long)]
    pub max_files: Option<usize>,

    /// Override the related-file cap from config.
    #[arg(long)]
    pub max_related: Option<usize>,
}

impl ContextArgs {
    /// Apply CLI overrides on top of the loaded config (CLI wins).
    pub fn apply_to_config(&self, config: &mut Config) {
        if let Some(n) = self.max_files {
            config.context.max_changed_files = n;
        }
        if let Some(n) = self.max_related {
            config.context.max_related_files = n;
        }
    }
}
