use std::path::{Component, Path, PathBuf};

use difflint_git::{FileChange, FileStatus};
use indexmap::IndexSet;
use tracing::{debug, warn};

use crate::traits::GitProvider;
use crate::{BranchRef, Result};

pub struct ChangedFilesInput {
    pub repo_root: PathBuf,
    pub base: BranchRef,
    pub compare: BranchRef,
    /// Extension without the leading dot, compared case-insensitively.
    pub extension: String,
}

pub struct ChangedFilesOperation<G> {
    git_provider: G,
}

impl<G> ChangedFilesOperation<G>
where
    G: GitProvider,
{
    pub fn new(git_provider: G) -> Self {
        Self { git_provider }
    }

    /// Absolute paths of files with the wanted extension that `compare`
    /// changed since it forked from `base`.
    ///
    /// # Errors
    ///
    /// Returns an error if the repository cannot be opened.
    pub fn execute(&self, input: &ChangedFilesInput) -> Result<Vec<PathBuf>> {
        resolve_changed_files(
            &self.git_provider,
            &input.repo_root,
            &input.base,
            &input.compare,
            &input.extension,
        )
    }
}

/// An unknown comparison branch, unrelated histories, and a failing diff all
/// count as "nothing changed".
pub(crate) fn resolve_changed_files<G: GitProvider>(
    git: &G,
    repo_root: &Path,
    base: &BranchRef,
    compare: &BranchRef,
    extension: &str,
) -> Result<Vec<PathBuf>> {
    if base == compare {
        debug!(%base, "comparing a branch with itself, nothing changed");
        return Ok(Vec::new());
    }

    let Some(tip) = git.latest_commit_sha(repo_root, compare.name())? else {
        debug!(%compare, "comparison branch does not resolve, nothing changed");
        return Ok(Vec::new());
    };

    let changes = match git.merge_base_changed_files(repo_root, base.name(), &tip) {
        Ok(Some(changes)) => changes,
        Ok(None) => {
            debug!(%base, %compare, "no merge-base, nothing changed");
            return Ok(Vec::new());
        }
        Err(e) => {
            warn!(%base, %compare, error = %e, "diff query failed, treating as no changes");
            return Ok(Vec::new());
        }
    };

    let extension = extension.trim_start_matches('.');
    let files: IndexSet<PathBuf> = changes
        .iter()
        .filter(|change| change.status != FileStatus::Deleted)
        .filter(|change| is_within_repository(&change.path))
        .filter(|change| has_extension(change, extension))
        .map(|change| repo_root.join(&change.path))
        .collect();

    debug!(%base, %compare, %tip, file_count = files.len(), "resolved changed files");
    Ok(files.into_iter().collect())
}

fn has_extension(change: &FileChange, extension: &str) -> bool {
    change
        .path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case(extension))
}

fn is_within_repository(path: &Path) -> bool {
    path.components()
        .all(|component| matches!(component, Component::Normal(_) | Component::CurDir))
}
