mod error;
mod repository;
mod types;

pub use error::GitError;
pub use repository::Repository;
pub use types::{FileChange, FileStatus, MergeBaseDiff};

use std::path::{Path, PathBuf};

pub type Result<T> = std::result::Result<T, GitError>;

/// # Errors
///
/// Returns an error if the path is not a git repository or if HEAD is detached.
pub fn current_branch(path: &Path) -> Result<String> {
    Repository::open(path)?.current_branch()
}

/// # Errors
///
/// Returns an error if the path is not a git repository or the pattern is invalid.
pub fn find_tracked_files(path: &Path, pattern: &str) -> Result<Vec<PathBuf>> {
    Repository::open(path)?.tracked_files(pattern)
}
