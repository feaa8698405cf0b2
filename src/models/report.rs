use serde::{Deserialize, Serialize};

use super::CommitRef;

/// Outcome of inspecting the last logged change, before any pass/fail decision.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckReport {
    pub previous: CommitRef,
    pub top: CommitRef,
    pub added: Vec<String>,
    pub violations: Vec<String>,
}

impl CheckReport {
    pub fn passed(&self) -> bool {
        self.violations.is_empty()
    }
}
