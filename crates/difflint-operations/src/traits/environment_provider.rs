use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use difflint_env::ProcessEnvironment;

use crate::Result;

#[async_trait]
pub trait EnvironmentProvider: Send + Sync {
    /// # Errors
    ///
    /// Returns an error if the environment cannot be composed.
    async fn resolve(
        &self,
        base_dir: &Path,
        names: &[String],
        extra_vars: &BTreeMap<String, String>,
    ) -> Result<ProcessEnvironment>;

    /// # Errors
    ///
    /// Returns an error if any directory below `root` cannot be listed.
    fn discover(&self, root: &Path, names: &[String]) -> Result<Vec<PathBuf>>;
}
