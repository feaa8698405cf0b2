//! git-check - fail CI when the last change adds files with forbidden extensions
//!
//! # Usage
//! ```bash
//! git-check --forbid-new-files .groovy                 # Check the current repository
//! git-check -n .groovy -n .gradle -C path/to/repo      # Several extensions, another repo
//! git-check -n .groovy --format json                   # Print a JSON report as well
//! ```
//!
//! Exit codes: 0 when no forbidden file was added, 1 on a policy violation,
//! 2 on any other failure.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use git_check::error::{self, AppError};
use git_check::git::GitRepository;
use git_check::guard::{self, Denylist, ExtensionGuard};
use git_check::models::CheckReport;

/// Checks whether the latest change added files with forbidden extensions
#[derive(Parser, Debug)]
#[command(name = "git-check")]
#[command(about = "Fails when the latest change adds files with forbidden extensions", long_about = None)]
struct Cli {
    /// Extension that newly added files must not have, e.g. `.groovy` (repeatable)
    #[arg(
        short = 'n',
        long = "forbid-new-files",
        value_name = "EXT",
        required = true,
        value_parser = parse_extension
    )]
    forbid_new_files: Vec<String>,

    /// Path to the git repository to check
    #[arg(short = 'C', long = "repo", value_name = "REPO_PATH", default_value = ".")]
    repo: PathBuf,

    /// Output format for the check result
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Silent on success, violations on stderr
    Text,
    /// JSON report on stdout, violations also on stderr
    Json,
}

fn parse_extension(value: &str) -> Result<String, String> {
    guard::validate_extension(value)
        .map(|_| value.to_string())
        .map_err(|e| e.to_string())
}

fn inspect(cli: &Cli) -> error::Result<CheckReport> {
    let denylist = Denylist::new(cli.forbid_new_files.iter().cloned())?;
    let guard = ExtensionGuard::new(denylist);
    debug!(
        repo = %cli.repo.display(),
        denylist = ?guard.denylist().iter().collect::<Vec<_>>(),
        "checking latest change"
    );

    let repo = GitRepository::open(&cli.repo)?;
    guard.inspect(&repo)
}

fn fail(err: &AppError) -> ! {
    eprintln!("✗ {}", err);
    std::process::exit(err.exit_code());
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let report = match inspect(&cli) {
        Ok(report) => report,
        Err(e) => fail(&e),
    };

    if cli.format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    }

    if let Err(e) = guard::enforce(report) {
        fail(&e);
    }

    Ok(())
}
