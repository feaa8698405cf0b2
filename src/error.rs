//! Application error types and exit-code mapping.
//!
//! Defines `AppError` for every way a check can end badly. The core never
//! prints or exits; `main` turns these into a message on stderr and a
//! process exit code.
//!
//! Exit codes:
//! - `PolicyViolation` → 1
//! - everything else → 2

use thiserror::Error;

pub const EXIT_VIOLATION: i32 = 1;
pub const EXIT_FAILURE: i32 = 2;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Git error: {0}")]
    Git(#[from] git2::Error),

    #[error("Repository not found: {0}")]
    RepoNotFound(String),

    #[error("Commit not found: {0}")]
    CommitNotFound(String),

    #[error(
        "Not enough history to diff: found {found} HEAD reference log entries, need at least 2. \
         Is this a shallow or fresh clone?"
    )]
    InsufficientHistory { found: usize },

    #[error("Invalid extension '{0}': extensions must start with '.' and be non-empty")]
    InvalidExtension(String),

    #[error(
        "Adding new files with these extensions is strongly discouraged. Violating files:\n{}",
        .files.join("\n")
    )]
    PolicyViolation { files: Vec<String> },
}

impl AppError {
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::PolicyViolation { .. } => EXIT_VIOLATION,
            _ => EXIT_FAILURE,
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
