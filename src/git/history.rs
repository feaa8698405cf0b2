use tracing::debug;

use crate::error::{AppError, Result};
use crate::git::HistorySource;
use crate::git::repository::GitRepository;
use crate::models::CommitRef;

impl GitRepository {
    /// Commits recorded in the HEAD reflog, oldest first.
    ///
    /// A repository without a HEAD reflog (e.g. `core.logAllRefUpdates` off)
    /// yields an empty list rather than an error.
    pub fn head_reflog(&self) -> Result<Vec<CommitRef>> {
        let reflog = self.repo.reflog("HEAD")?;
        // libgit2 hands entries back newest first
        let mut commits: Vec<CommitRef> = reflog.iter().map(|entry| entry.id_new().into()).collect();
        commits.reverse();
        Ok(commits)
    }
}

/// Resolves HEAD and its immediate predecessor in the reference log,
/// returned as `(previous, top)`.
pub fn last_two<S: HistorySource + ?Sized>(source: &S) -> Result<(CommitRef, CommitRef)> {
    let log = source.reference_log()?;

    let [.., previous, top] = log.as_slice() else {
        return Err(AppError::InsufficientHistory { found: log.len() });
    };

    debug!(previous = %previous.short(), top = %top.short(), entries = log.len(), "resolved reference log");

    if let Ok(head) = source.resolve_head() {
        if &head != top {
            debug!(head = %head.short(), top = %top.short(), "HEAD differs from newest reference log entry");
        }
    }

    Ok((previous.clone(), top.clone()))
}
