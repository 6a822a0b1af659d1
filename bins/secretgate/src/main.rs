//! secretgate - block commits that contain credential-like content
//!
//! Enumerates the files staged for commit (or scans paths given on the
//! command line, the way hook runners pass them) and evaluates each one
//! against the detection rule registry. Any finding fails the commit.

use clap::{Parser, ValueEnum};
use secretgate_cli::output::{format_count, format_duration, Status};
use secretgate_core::config::Config;
use secretgate_core::error::exit_codes;
use secretgate_core::git::GitRepo;
use secretgate_core::process::command_exists;
use secretgate_core::Error;
use secretgate_scanner::{print_report, registry, scan_files};
use std::path::PathBuf;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "secretgate")]
#[command(about = "Pre-commit secret scanning for staged files")]
#[command(version)]
struct Cli {
    /// Files to scan; defaults to the files staged for commit
    #[arg(trailing_var_arg = true)]
    files: Vec<PathBuf>,

    /// Path to a configuration file
    #[arg(short, long)]
    config: Option<String>,

    /// Report format for findings
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

/// Findings report format
#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    /// Human-readable report on stderr
    Text,
    /// detect-secrets style JSON on stdout
    Json,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    std::process::exit(run(&cli));
}

fn run(cli: &Cli) -> i32 {
    let started = Instant::now();

    let config = match Config::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            Status::error(&e.to_string());
            return exit_codes::FAILURE;
        }
    };

    let paths = if cli.files.is_empty() {
        if !command_exists("git") {
            Status::error(&Error::command_not_found("git").to_string());
            return exit_codes::FAILURE;
        }

        match staged_paths() {
            Ok(paths) => paths,
            Err(e) => {
                Status::error(&e.to_string());
                return exit_codes::FAILURE;
            }
        }
    } else {
        cli.files.clone()
    };

    if paths.is_empty() {
        Status::info("No staged files to check");
        return exit_codes::SUCCESS;
    }

    let rules = match registry(&config.schema.secrets) {
        Ok(rules) => rules,
        Err(e) => {
            Status::error(&e.to_string());
            return exit_codes::FAILURE;
        }
    };

    tracing::debug!(files = paths.len(), rules = rules.len(), "scanning candidate files");
    let report = scan_files(&paths, &rules, &config.schema.secrets);

    match cli.format {
        Format::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(&report.to_json())
                    .unwrap_or_else(|_| "{}".to_string())
            );
            if report.is_clean() {
                exit_codes::SUCCESS
            } else {
                exit_codes::FAILURE
            }
        }
        Format::Text => {
            if report.is_clean() {
                Status::success(&format!(
                    "No secrets detected in {} ({})",
                    format_count(paths.len(), "staged file", "staged files"),
                    format_duration(started.elapsed())
                ));
                exit_codes::SUCCESS
            } else {
                print_report(&report)
            }
        }
    }
}

/// Staged files, anchored to the repository root
///
/// Git reports staged paths relative to the repository root; the hook
/// may be invoked from any subdirectory, so join them before reading.
fn staged_paths() -> secretgate_core::Result<Vec<PathBuf>> {
    let repo = GitRepo::open_current()?;
    let root = repo.workdir().to_path_buf();
    Ok(repo
        .staged_files()?
        .into_iter()
        .map(|p| root.join(p))
        .collect())
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}
