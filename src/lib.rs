//! Guards CI against newly added files with forbidden extensions.
//!
//! The check looks at the latest change recorded in the HEAD reflog:
//! - `git`: repository access, reflog reading and file-level diffs
//! - `guard`: denylist handling and the extension check itself
//! - `models`: commit, diff and report data
//! - `error`: `AppError` and exit-code mapping

pub mod error;
pub mod git;
pub mod guard;
pub mod models;

pub use error::{AppError, Result};
pub use guard::{Denylist, ExtensionGuard, check};
