use std::path::PathBuf;

use globset::GlobBuilder;

use crate::{GitError, Result};

use super::Repository;

impl Repository {
    /// Absolute paths of tracked files whose repository-relative path matches
    /// `pattern`, in index order.
    ///
    /// `*` in the pattern also matches `/`, so `*.pylintrc*` finds the file in
    /// any directory, like a `git ls-files` pathspec would.
    ///
    /// # Errors
    ///
    /// Returns [`GitError::InvalidPattern`] if the pattern is not a valid glob,
    /// or an error if the index cannot be read.
    pub fn tracked_files(&self, pattern: &str) -> Result<Vec<PathBuf>> {
        let matcher = GlobBuilder::new(pattern)
            .literal_separator(false)
            .build()
            .map_err(|source| GitError::InvalidPattern {
                pattern: pattern.to_string(),
                source,
            })?
            .compile_matcher();

        let index = self.inner.index()?;

        let mut relative: Vec<PathBuf> = index
            .iter()
            .filter_map(|entry| index_path(entry.path))
            .filter(|path| matcher.is_match(path))
            .collect();
        // Conflicted paths appear once per stage.
        relative.dedup();

        Ok(relative
            .iter()
            .map(|path| self.to_absolute_path(path))
            .collect())
    }
}

#[cfg(unix)]
#[allow(clippy::unnecessary_wraps)]
fn index_path(bytes: Vec<u8>) -> Option<PathBuf> {
    use std::ffi::OsString;
    use std::os::unix::ffi::OsStringExt;

    Some(PathBuf::from(OsString::from_vec(bytes)))
}

#[cfg(not(unix))]
fn index_path(bytes: Vec<u8>) -> Option<PathBuf> {
    use tracing::debug;

    match String::from_utf8(bytes) {
        Ok(path) => Some(PathBuf::from(path)),
        Err(err) => {
            debug!(
                path = %String::from_utf8_lossy(err.as_bytes()),
                "skipping index entry with non-UTF-8 path"
            );
            None
        }
    }
}
