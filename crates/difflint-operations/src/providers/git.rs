use std::path::{Path, PathBuf};

use difflint_git::{FileChange, GitError, Repository};

use crate::Result;
use crate::traits::GitProvider;

pub struct Git2Provider;

impl Git2Provider {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for Git2Provider {
    fn default() -> Self {
        Self::new()
    }
}

impl GitProvider for Git2Provider {
    fn repository_root(&self, start_path: &Path) -> Result<PathBuf> {
        let repo = Repository::open(start_path)?;
        Ok(repo.root().to_path_buf())
    }

    fn latest_commit_sha(&self, repo_root: &Path, branch: &str) -> Result<Option<String>> {
        let repo = Repository::open(repo_root)?;
        match repo.latest_commit_sha(branch) {
            Ok(sha) => Ok(Some(sha)),
            Err(GitError::RefNotFound { .. }) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn merge_base_changed_files(
        &self,
        repo_root: &Path,
        base: &str,
        head: &str,
    ) -> Result<Option<Vec<FileChange>>> {
        let repo = Repository::open(repo_root)?;
        match repo.merge_base_changed_files(base, head) {
            Ok(diff) => Ok(Some(diff.files)),
            Err(GitError::RefNotFound { .. } | GitError::NoMergeBase { .. }) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn tracked_files(&self, repo_root: &Path, pattern: &str) -> Result<Vec<PathBuf>> {
        Ok(difflint_git::find_tracked_files(repo_root, pattern)?)
    }

    fn current_branch(&self, repo_root: &Path) -> Result<String> {
        Ok(difflint_git::current_branch(repo_root)?)
    }
}
