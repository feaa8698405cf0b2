use git2::{Commit, Oid, Repository};
use std::path::Path;

use crate::error::{AppError, Result};
use crate::models::CommitRef;

pub struct GitRepository {
    pub repo: Repository,
}

impl GitRepository {
    /// Opens the repository containing `path`, searching parent directories
    /// the way `git` itself does.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Repository::discover(&path)
            .map_err(|_| AppError::RepoNotFound(path.as_ref().to_string_lossy().to_string()))?;

        Ok(Self { repo })
    }

    pub fn head_commit(&self) -> Result<CommitRef> {
        let commit = self.repo.head()?.peel_to_commit()?;
        Ok(commit.id().into())
    }

    pub fn find_commit(&self, commit: &CommitRef) -> Result<Commit<'_>> {
        let oid = Oid::from_str(commit.as_str())
            .map_err(|_| AppError::CommitNotFound(commit.to_string()))?;
        self.repo
            .find_commit(oid)
            .map_err(|_| AppError::CommitNotFound(commit.to_string()))
    }
}
