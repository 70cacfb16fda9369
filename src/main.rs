//! commitlens — bounded git commit context assembly for LLM code review.
//!
//! Entry point and error handling boundary. Uses `anyhow` for
//! ergonomic error propagation and user-facing messages.

mod cli;

use commitlens::config::Config;
use commitlens::constants;
use commitlens::env::Env;
use commitlens::git;
use commitlens::output;
use commitlens::pipeline::{self, DiffMode};

use std::path::Path;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;

use cli::args::{Cli, Command, ContextArgs, OutputFormat};

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("Error: {err:#}");
        process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Context(args) => run_context(*args).await,
        Command::Version => run_version(),
    }
}

/// Print version information.
fn run_version() -> Result<()> {
    println!("{} {}", "commitlens".bold(), constants::VERSION.green().bold());
    Ok(())
}

/// Assemble and emit the review context for one commit.
async fn run_context(args: ContextArgs) -> Result<()> {
    let base_dir = std::fs::canonicalize(&args.path)
        .with_context(|| format!("--path directory not found: {}", args.path.display()))?;
    let repo_root = git::find_repo_root(&base_dir)
        .await
        .map_err(|e| anyhow::anyhow!("{e}"))?;
    let repo_root_path = Path::new(&repo_root);

    let mut config = Config::load(Some(repo_root_path), &Env::real())
        .context("failed to load configuration")?;
    args.apply_to_config(&mut config);

    let commit = git::resolve_commit(repo_root_path, &args.commit)
        .await
        .with_context(|| format!("cannot resolve commit '{}'", args.commit))?;

    let diff_mode = if args.allow_oversized_diff {
        DiffMode::AllowMissingDiff
    } else {
        DiffMode::Strict
    };

    let payload = pipeline::gather_context(
        repo_root_path,
        &commit,
        &config,
        diff_mode,
        args.no_project_context,
    )
    .await
    .with_context(|| format!("failed to assemble context for {}", commit.short()))?;

    let rendered = match args.format {
        OutputFormat::Markdown => output::markdown::render(&payload),
        OutputFormat::Json => output::render_json(&payload).context("failed to serialize payload")?,
    };

    match args.out {
        Some(dir) => {
            tokio::fs::create_dir_all(&dir)
                .await
                .with_context(|| format!("cannot create output directory {}", dir.display()))?;
            let repo_name = repo_root_path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| "repo".to_string());
            let path = output::report_path(&dir, &repo_name, &commit);
            tokio::fs::write(&path, rendered)
                .await
                .with_context(|| format!("cannot write {}", path.display()))?;
            eprintln!(
                "  {} context for {} written",
                "✔".green().bold(),
                commit.short().bold(),
            );
            println!("{}", path.display());
        }
        None => {
            print!("{rendered}");
        }
    }

    Ok(())
}
