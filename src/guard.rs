//! Forbidden-extension check on newly added files.
//!
//! `ExtensionGuard` looks at the change between HEAD and its predecessor in
//! the HEAD reflog and reports every added file whose extension is on the
//! denylist. Renames, modifications and deletions are never reported.

use std::collections::BTreeSet;
use std::path::Path;

use tracing::{debug, info, warn};

use crate::error::{AppError, Result};
use crate::git::{GitRepository, HistorySource, last_two};
use crate::models::{CheckReport, DiffEntry};

/// Extensions that new files must not have. Matching is case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Denylist {
    extensions: BTreeSet<String>,
}

impl Denylist {
    pub fn new<I, S>(extensions: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut set = BTreeSet::new();
        for ext in extensions {
            let ext = ext.into();
            validate_extension(&ext)?;
            set.insert(ext);
        }

        if set.is_empty() {
            return Err(AppError::InvalidExtension(String::new()));
        }

        Ok(Self { extensions: set })
    }

    pub fn contains(&self, extension: &str) -> bool {
        self.extensions.contains(extension)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.extensions.iter().map(String::as_str)
    }
}

/// An extension is a leading '.' followed by at least one character.
pub fn validate_extension(ext: &str) -> Result<()> {
    if ext.len() < 2 || !ext.starts_with('.') || ext.contains('/') {
        return Err(AppError::InvalidExtension(ext.to_string()));
    }
    Ok(())
}

/// Everything from the last '.' of the final path segment, or "" if there is none.
///
/// Leading dots belong to the name, so `.gitignore` has no extension.
pub fn extension_of(path: &str) -> &str {
    let name = path.rsplit('/').next().unwrap_or(path);
    let stem = name.trim_start_matches('.');
    stem.rfind('.').map(|idx| &stem[idx..]).unwrap_or("")
}

/// Paths of added entries whose extension is denylisted, in diff order.
pub fn find_violations(entries: &[DiffEntry], denylist: &Denylist) -> Vec<String> {
    entries
        .iter()
        .filter(|entry| entry.is_added())
        .map(DiffEntry::path)
        .filter(|path| denylist.contains(extension_of(path)))
        .map(str::to_string)
        .collect()
}

pub struct ExtensionGuard {
    denylist: Denylist,
}

impl ExtensionGuard {
    pub fn new(denylist: Denylist) -> Self {
        Self { denylist }
    }

    pub fn denylist(&self) -> &Denylist {
        &self.denylist
    }

    /// Collects added files and violations without deciding pass or fail.
    pub fn inspect<S: HistorySource + ?Sized>(&self, source: &S) -> Result<CheckReport> {
        let (previous, top) = last_two(source)?;
        let entries = source.diff(&previous, &top)?;

        let added: Vec<String> = entries
            .iter()
            .filter(|entry| entry.is_added())
            .map(|entry| entry.path().to_string())
            .collect();
        let violations = find_violations(&entries, &self.denylist);

        debug!(
            changed = entries.len(),
            added = added.len(),
            violations = violations.len(),
            "inspected {}..{}",
            previous.short(),
            top.short()
        );

        Ok(CheckReport {
            previous,
            top,
            added,
            violations,
        })
    }

    /// Like `inspect`, but any violation becomes `AppError::PolicyViolation`.
    pub fn check_source<S: HistorySource + ?Sized>(&self, source: &S) -> Result<CheckReport> {
        enforce(self.inspect(source)?)
    }
}

/// Passes the report through when clean, otherwise fails with its violations.
pub fn enforce(report: CheckReport) -> Result<CheckReport> {
    if report.passed() {
        info!(added = report.added.len(), "no forbidden files added");
        return Ok(report);
    }

    for path in &report.violations {
        warn!(path = %path, "forbidden file added");
    }
    Err(AppError::PolicyViolation {
        files: report.violations,
    })
}

/// Opens the repository at `repo_path` and checks its last logged change.
pub fn check<P: AsRef<Path>>(repo_path: P, denylist: &Denylist) -> Result<()> {
    let repo = GitRepository::open(repo_path)?;
    ExtensionGuard::new(denylist.clone()).check_source(&repo)?;
    Ok(())
}
