use git2::{Delta, DiffFindOptions, DiffOptions};
use tracing::trace;

use crate::error::Result;
use crate::git::repository::GitRepository;
use crate::models::{ChangeKind, CommitRef, DiffEntry};

impl GitRepository {
    /// File-level changes from `from` to `to`.
    ///
    /// Rename detection is on, so a moved file shows up as `Renamed` instead
    /// of a deletion plus an addition. A file swapped for a symlink (or back)
    /// is `TypeChanged`, not split in two.
    pub fn diff_commits(&self, from: &CommitRef, to: &CommitRef) -> Result<Vec<DiffEntry>> {
        let from_tree = self.find_commit(from)?.tree()?;
        let to_tree = self.find_commit(to)?.tree()?;

        let mut opts = DiffOptions::new();
        opts.include_typechange(true);

        let mut diff = self
            .repo
            .diff_tree_to_tree(Some(&from_tree), Some(&to_tree), Some(&mut opts))?;

        let mut find_opts = DiffFindOptions::new();
        find_opts.renames(true);
        diff.find_similar(Some(&mut find_opts))?;

        let entries = diff
            .deltas()
            .filter_map(|delta| {
                let kind = match delta.status() {
                    Delta::Added => ChangeKind::Added,
                    Delta::Deleted => ChangeKind::Deleted,
                    Delta::Modified => ChangeKind::Modified,
                    Delta::Renamed => ChangeKind::Renamed,
                    Delta::Copied => ChangeKind::Copied,
                    Delta::Typechange => ChangeKind::TypeChanged,
                    _ => return None,
                };

                let entry = DiffEntry {
                    old_path: delta.old_file().path().map(|p| p.to_string_lossy().to_string()),
                    new_path: delta.new_file().path().map(|p| p.to_string_lossy().to_string()),
                    kind,
                };
                trace!(path = entry.path(), kind = ?entry.kind, "diff entry");
                Some(entry)
            })
            .collect();

        Ok(entries)
    }
}
