use git2::{Repository, Signature};
use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

/// Creates an empty repository that records HEAD updates in its reflog.
pub fn create_test_repo() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    let repo = Repository::init(temp_dir.path()).unwrap();

    let mut config = repo.config().unwrap();
    config.set_bool("core.logAllRefUpdates", true).unwrap();
    config.set_str("user.name", "Test User").unwrap();
    config.set_str("user.email", "test@example.com").unwrap();

    temp_dir
}

/// Writes and stages `files`, then commits them on HEAD.
pub fn create_commit(repo_path: &Path, files: &[(&str, &str)], message: &str) {
    let repo = Repository::open(repo_path).unwrap();
    let mut index = repo.index().unwrap();

    for (file, content) in files {
        let full = repo_path.join(file);
        if let Some(parent) = full.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&full, content).unwrap();
        index.add_path(Path::new(file)).unwrap();
    }

    index.write().unwrap();
    let tree = repo.find_tree(index.write_tree().unwrap()).unwrap();
    let sig = Signature::now("Test User", "test@example.com").unwrap();
    let parent = repo.head().ok().and_then(|h| h.peel_to_commit().ok());
    let parents: Vec<&git2::Commit> = parent.iter().collect();

    repo.commit(Some("HEAD"), &sig, &sig, message, &tree, &parents)
        .unwrap();
}

/// Runs the binary against `repo_path` with logging switched off.
pub fn run_check(repo_path: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_git-check"))
        .arg("--repo")
        .arg(repo_path)
        .args(args)
        .env("RUST_LOG", "off")
        .output()
        .expect("Failed to run git-check")
}
