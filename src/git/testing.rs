//! Throwaway repositories for tests, with a real HEAD reflog.

use git2::{Oid, Repository, Signature};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

pub struct TestRepo {
    dir: TempDir,
    pub repo: Repository,
}

impl TestRepo {
    pub fn new() -> Self {
        let dir = TempDir::new().unwrap();
        let repo = Repository::init(dir.path()).unwrap();
        {
            let mut config = repo.config().unwrap();
            config.set_bool("core.logAllRefUpdates", true).unwrap();
            config.set_str("user.name", "Test User").unwrap();
            config.set_str("user.email", "test@example.com").unwrap();
        }
        Self { dir, repo }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Writes `writes`, deletes `removes`, stages both and commits on HEAD.
    pub fn commit(&self, message: &str, writes: &[(&str, &str)], removes: &[&str]) -> Oid {
        let mut index = self.repo.index().unwrap();

        for path in removes {
            fs::remove_file(self.path().join(path)).unwrap();
            index.remove_path(Path::new(path)).unwrap();
        }

        for (path, content) in writes {
            let full = self.path().join(path);
            if let Some(parent) = full.parent() {
                fs::create_dir_all(parent).unwrap();
            }
            fs::write(&full, content).unwrap();
            index.add_path(Path::new(path)).unwrap();
        }

        self.commit_index(message, &mut index)
    }

    /// Replaces `path` with a symlink pointing at `target` and commits.
    #[cfg(unix)]
    pub fn commit_symlink(&self, message: &str, path: &str, target: &str) -> Oid {
        let full = self.path().join(path);
        if full.exists() {
            fs::remove_file(&full).unwrap();
        }
        std::os::unix::fs::symlink(target, &full).unwrap();

        let mut index = self.repo.index().unwrap();
        index.add_path(Path::new(path)).unwrap();
        self.commit_index(message, &mut index)
    }

    fn commit_index(&self, message: &str, index: &mut git2::Index) -> Oid {
        index.write().unwrap();
        let tree_id = index.write_tree().unwrap();
        let tree = self.repo.find_tree(tree_id).unwrap();
        let sig = Signature::now("Test User", "test@example.com").unwrap();

        let parent = self.repo.head().ok().and_then(|h| h.peel_to_commit().ok());
        let parents: Vec<&git2::Commit> = parent.iter().collect();

        self.repo
            .commit(Some("HEAD"), &sig, &sig, message, &tree, &parents)
            .unwrap()
    }
}
