use crate::{GitError, Result};

use super::Repository;

impl Repository {
    /// Resolves a branch name (or any revspec) to the id of the commit it points at.
    ///
    /// Branches move, so the result is only meaningful for the current operation.
    ///
    /// # Errors
    ///
    /// Returns [`GitError::RefNotFound`] if the reference does not resolve to a commit.
    pub fn latest_commit_sha(&self, refspec: &str) -> Result<String> {
        Ok(self.resolve_commit(refspec)?.id().to_string())
    }

    /// # Errors
    ///
    /// Returns [`GitError::RefNotFound`] if either side cannot be resolved and
    /// [`GitError::NoMergeBase`] if the histories are unrelated.
    pub fn merge_base(&self, base: &str, head: &str) -> Result<String> {
        let base_id = self.resolve_commit(base)?.id();
        let head_id = self.resolve_commit(head)?.id();

        match self.inner.merge_base(base_id, head_id) {
            Ok(oid) => Ok(oid.to_string()),
            Err(e) if e.code() == git2::ErrorCode::NotFound => Err(GitError::NoMergeBase {
                base: base.to_string(),
                head: head.to_string(),
            }),
            Err(e) => Err(e.into()),
        }
    }

    pub(crate) fn resolve_commit(&self, refspec: &str) -> Result<git2::Commit<'_>> {
        let obj = self
            .inner
            .revparse_single(refspec)
            .map_err(|_| GitError::RefNotFound {
                refspec: refspec.to_string(),
            })?;

        obj.peel_to_commit().map_err(|_| GitError::RefNotFound {
            refspec: refspec.to_string(),
        })
    }
}
