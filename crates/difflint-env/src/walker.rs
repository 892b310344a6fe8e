use std::collections::HashSet;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use walkdir::{DirEntry, WalkDir};

use crate::{EnvError, Result};

/// Finds every directory below `root` whose name is one of `names`.
///
/// Traversal is depth-first with parents reported before their children. A
/// matching directory is still descended into. A symbolic link to a directory
/// is reported when its name matches but is never entered. Any directory that
/// cannot be listed aborts the whole search.
///
/// # Errors
///
/// Returns [`EnvError::NotADirectory`] if `root` is not a directory and
/// [`EnvError::ReadDir`] if any directory in the tree cannot be listed.
pub fn search<S: AsRef<str>>(root: &Path, names: &[S]) -> Result<Vec<PathBuf>> {
    let root = std::path::absolute(root).map_err(|source| EnvError::AbsolutePath {
        path: root.to_path_buf(),
        source,
    })?;
    if !root.is_dir() {
        return Err(EnvError::NotADirectory { path: root });
    }

    let wanted: HashSet<&OsStr> = names.iter().map(|n| OsStr::new(n.as_ref())).collect();
    let mut matches = Vec::new();

    for entry in WalkDir::new(&root).min_depth(1) {
        let entry = entry.map_err(|err| read_dir_error(&root, err))?;
        if wanted.contains(entry.file_name()) && is_directory(&entry) {
            matches.push(entry.into_path());
        }
    }

    Ok(matches)
}

fn is_directory(entry: &DirEntry) -> bool {
    if entry.path_is_symlink() {
        // Resolve the target without walking into it.
        std::fs::metadata(entry.path()).is_ok_and(|meta| meta.is_dir())
    } else {
        entry.file_type().is_dir()
    }
}

fn read_dir_error(root: &Path, err: walkdir::Error) -> EnvError {
    let path = err.path().map_or_else(|| root.to_path_buf(), Path::to_path_buf);
    EnvError::ReadDir {
        path,
        source: err.into(),
    }
}
