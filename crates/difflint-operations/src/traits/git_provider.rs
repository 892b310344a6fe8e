use std::path::{Path, PathBuf};

use difflint_git::FileChange;

use crate::Result;

pub trait GitProvider: Send + Sync {
    /// # Errors
    ///
    /// Returns an error if no repository contains `start_path`.
    fn repository_root(&self, start_path: &Path) -> Result<PathBuf>;

    /// Returns `None` when the branch does not resolve to a commit.
    ///
    /// # Errors
    ///
    /// Returns an error if the repository cannot be opened.
    fn latest_commit_sha(&self, repo_root: &Path, branch: &str) -> Result<Option<String>>;

    /// Changes between the merge-base of `base` and `head`, and `head`.
    /// Returns `None` when either side is unknown or the histories are unrelated.
    ///
    /// # Errors
    ///
    /// Returns an error if the repository cannot be opened or the diff fails.
    fn merge_base_changed_files(
        &self,
        repo_root: &Path,
        base: &str,
        head: &str,
    ) -> Result<Option<Vec<FileChange>>>;

    /// # Errors
    ///
    /// Returns an error if the repository cannot be opened or the pattern is invalid.
    fn tracked_files(&self, repo_root: &Path, pattern: &str) -> Result<Vec<PathBuf>>;

    /// # Errors
    ///
    /// Returns an error if the repository cannot be opened or HEAD is detached.
    fn current_branch(&self, repo_root: &Path) -> Result<String>;
}
