use std::collections::BTreeMap;
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::{EnvError, Result};

/// Directory names checked for an isolated runtime, in priority order.
pub const DEFAULT_ENVIRONMENT_NAMES: &[&str] = &["venv", ".venv"];

/// Variable pointing child processes at the detected runtime directory.
pub const ENVIRONMENT_ROOT_VAR: &str = "VIRTUAL_ENV";

const PATH_VAR: &str = "PATH";

/// Subdirectory of a runtime environment that holds its executables.
#[must_use]
pub const fn binary_dir() -> &'static str {
    if cfg!(windows) { "Scripts" } else { "bin" }
}

/// A complete set of variables handed to a child process.
///
/// Values are owned copies; changing one never touches the variables of the
/// current process.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessEnvironment {
    vars: BTreeMap<OsString, OsString>,
}

impl ProcessEnvironment {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the current process environment.
    #[must_use]
    pub fn from_ambient() -> Self {
        std::env::vars_os().collect()
    }

    #[must_use]
    pub fn get(&self, key: impl AsRef<OsStr>) -> Option<&OsStr> {
        self.vars.get(key.as_ref()).map(OsString::as_os_str)
    }

    pub fn set(&mut self, key: impl Into<OsString>, value: impl Into<OsString>) {
        self.vars.insert(key.into(), value.into());
    }

    #[must_use]
    pub fn with(mut self, key: impl Into<OsString>, value: impl Into<OsString>) -> Self {
        self.set(key, value);
        self
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&OsStr, &OsStr)> {
        self.vars.iter().map(|(k, v)| (k.as_os_str(), v.as_os_str()))
    }

    /// The search-path value, looked up the way the platform does.
    #[must_use]
    pub fn search_path(&self) -> Option<&OsStr> {
        self.get(self.path_key())
    }

    /// Puts `dir` in front of every existing search-path entry.
    ///
    /// # Errors
    ///
    /// Returns [`EnvError::SearchPath`] if `dir` contains the path-list delimiter.
    pub fn prepend_search_path(&mut self, dir: &Path) -> Result<()> {
        let key = self.path_key();

        let mut entries = vec![dir.to_path_buf()];
        if let Some(existing) = self.vars.get(&key) {
            entries.extend(
                std::env::split_paths(existing).filter(|entry| !entry.as_os_str().is_empty()),
            );
        }

        let joined = std::env::join_paths(entries).map_err(|source| EnvError::SearchPath {
            path: dir.to_path_buf(),
            source,
        })?;
        self.vars.insert(key, joined);
        Ok(())
    }

    // Windows treats variable names case-insensitively and commonly spells it "Path".
    fn path_key(&self) -> OsString {
        if cfg!(windows) {
            if let Some(key) = self
                .vars
                .keys()
                .find(|k| k.eq_ignore_ascii_case(PATH_VAR))
            {
                return key.clone();
            }
        }
        OsString::from(PATH_VAR)
    }
}

impl<K: Into<OsString>, V: Into<OsString>> FromIterator<(K, V)> for ProcessEnvironment {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl<'a> IntoIterator for &'a ProcessEnvironment {
    type Item = (&'a OsString, &'a OsString);
    type IntoIter = std::collections::btree_map::Iter<'a, OsString, OsString>;

    fn into_iter(self) -> Self::IntoIter {
        self.vars.iter()
    }
}

/// Returns the first of `names` that exists as a directory directly under
/// `base_dir`. Only direct children are checked.
///
/// # Errors
///
/// Returns [`EnvError::AbsolutePath`] if `base_dir` cannot be made absolute.
pub async fn find_environment_root<S: AsRef<str>>(
    base_dir: &Path,
    names: &[S],
) -> Result<Option<PathBuf>> {
    let base_dir = std::path::absolute(base_dir).map_err(|source| EnvError::AbsolutePath {
        path: base_dir.to_path_buf(),
        source,
    })?;

    for name in names {
        let candidate = base_dir.join(name.as_ref());
        if is_directory(&candidate).await {
            return Ok(Some(candidate));
        }
    }

    Ok(None)
}

async fn is_directory(path: &Path) -> bool {
    tokio::fs::metadata(path)
        .await
        .is_ok_and(|metadata| metadata.is_dir())
}

/// Builds child-process environments from a fixed snapshot of variables.
#[derive(Debug, Clone)]
pub struct EnvironmentComposer {
    ambient: ProcessEnvironment,
    names: Vec<String>,
}

impl EnvironmentComposer {
    #[must_use]
    pub fn new(ambient: ProcessEnvironment) -> Self {
        Self {
            ambient,
            names: DEFAULT_ENVIRONMENT_NAMES
                .iter()
                .map(|name| (*name).to_string())
                .collect(),
        }
    }

    #[must_use]
    pub fn from_ambient() -> Self {
        Self::new(ProcessEnvironment::from_ambient())
    }

    #[must_use]
    pub fn with_names(mut self, names: Vec<String>) -> Self {
        self.names = names;
        self
    }

    #[must_use]
    pub fn ambient(&self) -> &ProcessEnvironment {
        &self.ambient
    }

    /// Produces the environment for a tool run rooted at `base_dir`.
    ///
    /// When a runtime directory is found its executables directory is put at
    /// the front of the search path and [`ENVIRONMENT_ROOT_VAR`] is set.
    /// `extra_vars` are applied last and win over everything else.
    ///
    /// # Errors
    ///
    /// Returns an error if `base_dir` cannot be made absolute or the search path
    /// cannot be rebuilt.
    pub async fn resolve(
        &self,
        base_dir: &Path,
        extra_vars: &BTreeMap<String, String>,
    ) -> Result<ProcessEnvironment> {
        let mut vars = self.ambient.clone();

        if let Some(root) = find_environment_root(base_dir, &self.names).await? {
            debug!(environment_root = %root.display(), "using isolated runtime environment");
            vars.prepend_search_path(&root.join(binary_dir()))?;
            vars.set(ENVIRONMENT_ROOT_VAR, root);
        } else {
            debug!(base_dir = %base_dir.display(), "no isolated runtime environment found");
        }

        for (key, value) in extra_vars {
            vars.set(key, value);
        }

        Ok(vars)
    }
}

impl Default for EnvironmentComposer {
    fn default() -> Self {
        Self::from_ambient()
    }
}
