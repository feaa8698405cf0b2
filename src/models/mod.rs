//! Plain data carried between the git layer, the guard and the CLI.
//!
//! - `commit`: CommitRef
//! - `diff`: DiffEntry, ChangeKind
//! - `report`: CheckReport for the JSON output format

pub mod commit;
pub mod diff;
pub mod report;

pub use commit::*;
pub use diff::*;
pub use report::*;
