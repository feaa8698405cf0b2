//! File-level diff entries.
//!
//! Only the classification and paths matter here; hunks and contents are
//! never loaded.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ChangeKind {
    Added,
    Deleted,
    Modified,
    Renamed,
    Copied,
    TypeChanged,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DiffEntry {
    pub old_path: Option<String>,
    pub new_path: Option<String>,
    pub kind: ChangeKind,
}

impl DiffEntry {
    pub fn added(path: impl Into<String>) -> Self {
        let path = path.into();
        Self {
            old_path: Some(path.clone()),
            new_path: Some(path),
            kind: ChangeKind::Added,
        }
    }

    /// The path the entry lives at after the change (before it, for deletions).
    pub fn path(&self) -> &str {
        let path = match self.kind {
            ChangeKind::Deleted => self.old_path.as_ref().or(self.new_path.as_ref()),
            _ => self.new_path.as_ref().or(self.old_path.as_ref()),
        };
        path.map(String::as_str).unwrap_or("")
    }

    pub fn is_added(&self) -> bool {
        self.kind == ChangeKind::Added
    }
}
