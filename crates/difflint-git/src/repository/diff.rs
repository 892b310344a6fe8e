use std::path::PathBuf;

use tracing::debug;

use crate::{FileChange, FileStatus, GitError, MergeBaseDiff, Result};

use super::Repository;

impl Repository {
    /// Plain tree-to-tree diff between two revisions (or from the empty tree when
    /// `base` is `None`). Entries keep libgit2's delta order.
    ///
    /// # Errors
    ///
    /// Returns [`GitError::RefNotFound`] if either base or head cannot be resolved.
    pub fn changed_files(&self, base: Option<&str>, head: &str) -> Result<Vec<FileChange>> {
        let head_tree = self.resolve_tree(head)?;

        let base_tree = match base {
            Some(refspec) => Some(self.resolve_tree(refspec)?),
            None => None,
        };

        let mut diff = self
            .inner
            .diff_tree_to_tree(base_tree.as_ref(), Some(&head_tree), None)?;

        let mut find_opts = git2::DiffFindOptions::new();
        find_opts.renames(true);
        find_opts.copies(true);
        find_opts.copies_from_unmodified(true);
        diff.find_similar(Some(&mut find_opts))?;

        let mut changes = Vec::new();

        for delta in diff.deltas() {
            let status = match delta.status() {
                git2::Delta::Added => FileStatus::Added,
                git2::Delta::Deleted => FileStatus::Deleted,
                git2::Delta::Modified => FileStatus::Modified,
                git2::Delta::Renamed => FileStatus::Renamed,
                git2::Delta::Copied => FileStatus::Copied,
                _ => continue,
            };

            let path = delta
                .new_file()
                .path()
                .or_else(|| delta.old_file().path())
                .map(PathBuf::from)
                .ok_or(GitError::MissingDeltaPath)?;

            let mut change = FileChange::new(path, status);

            if status == FileStatus::Renamed || status == FileStatus::Copied {
                if let Some(old_path) = delta.old_file().path() {
                    change = change.with_old_path(old_path.to_path_buf());
                }
            }

            changes.push(change);
        }

        Ok(changes)
    }

    /// Changes introduced by `head` since it diverged from `base`.
    ///
    /// The diff runs from the merge-base to `head`, never from `base` to `head`,
    /// so commits that landed on `base` after the fork do not show up.
    ///
    /// # Errors
    ///
    /// Returns [`GitError::RefNotFound`] if either side cannot be resolved and
    /// [`GitError::NoMergeBase`] if the histories are unrelated.
    pub fn merge_base_changed_files(&self, base: &str, head: &str) -> Result<MergeBaseDiff> {
        let head_sha = self.latest_commit_sha(head)?;
        let merge_base = self.merge_base(base, &head_sha)?;
        debug!(%base, %head, %merge_base, "diffing from merge-base");

        let files = self.changed_files(Some(&merge_base), &head_sha)?;

        Ok(MergeBaseDiff {
            merge_base,
            head: head_sha,
            files,
        })
    }

    fn resolve_tree(&self, refspec: &str) -> Result<git2::Tree<'_>> {
        self.resolve_commit(refspec)?
            .tree()
            .map_err(|_| GitError::RefNotFound {
                refspec: refspec.to_string(),
            })
    }
}
