pub mod diff;
pub mod history;
pub mod repository;

#[cfg(test)]
pub mod testing;

pub use history::last_two;
pub use repository::GitRepository;

use crate::error::Result;
use crate::models::{CommitRef, DiffEntry};

/// Read-only view of repository history the guard works against.
pub trait HistorySource {
    /// Commit currently checked out at HEAD.
    fn resolve_head(&self) -> Result<CommitRef>;

    /// Commits HEAD has pointed at, oldest first.
    fn reference_log(&self) -> Result<Vec<CommitRef>>;

    /// File-level changes going from `from` to `to`, in diff order.
    fn diff(&self, from: &CommitRef, to: &CommitRef) -> Result<Vec<DiffEntry>>;
}

impl HistorySource for GitRepository {
    fn resolve_head(&self) -> Result<CommitRef> {
        self.head_commit()
    }

    fn reference_log(&self) -> Result<Vec<CommitRef>> {
        self.head_reflog()
    }

    fn diff(&self, from: &CommitRef, to: &CommitRef) -> Result<Vec<DiffEntry>> {
        self.diff_commits(from, to)
    }
}
