use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use difflint_env::{EnvironmentComposer, ProcessEnvironment};

use crate::Result;
use crate::traits::EnvironmentProvider;

/// Reads the real process environment and filesystem.
pub struct SystemEnvironmentProvider;

impl SystemEnvironmentProvider {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for SystemEnvironmentProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EnvironmentProvider for SystemEnvironmentProvider {
    async fn resolve(
        &self,
        base_dir: &Path,
        names: &[String],
        extra_vars: &BTreeMap<String, String>,
    ) -> Result<ProcessEnvironment> {
        // Snapshot per call so later changes to the process environment are seen.
        let composer = EnvironmentComposer::from_ambient().with_names(names.to_vec());
        Ok(composer.resolve(base_dir, extra_vars).await?)
    }

    fn discover(&self, root: &Path, names: &[String]) -> Result<Vec<PathBuf>> {
        Ok(difflint_env::search(root, names)?)
    }
}
