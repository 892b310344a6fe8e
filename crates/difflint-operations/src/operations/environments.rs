use std::path::PathBuf;

use tracing::debug;

use crate::Result;
use crate::traits::EnvironmentProvider;

pub struct DiscoverEnvironmentsInput {
    pub root: PathBuf,
    pub names: Vec<String>,
}

/// Lists every runtime-environment directory anywhere below a root.
pub struct DiscoverEnvironmentsOperation<E> {
    environment_provider: E,
}

impl<E> DiscoverEnvironmentsOperation<E>
where
    E: EnvironmentProvider,
{
    pub fn new(environment_provider: E) -> Self {
        Self {
            environment_provider,
        }
    }

    /// # Errors
    ///
    /// Returns an error if any directory below the root cannot be listed.
    pub fn execute(&self, input: &DiscoverEnvironmentsInput) -> Result<Vec<PathBuf>> {
        let found = self
            .environment_provider
            .discover(&input.root, &input.names)?;
        debug!(root = %input.root.display(), count = found.len(), "discovered environments");
        Ok(found)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mocks::MockEnvironmentProvider;

    #[test]
    fn returns_discovered_directories() -> anyhow::Result<()> {
        let provider = MockEnvironmentProvider::new().with_discovered(vec![
            PathBuf::from("/repo/venv"),
            PathBuf::from("/repo/svc/.venv"),
        ]);
        let operation = DiscoverEnvironmentsOperation::new(provider);

        let found = operation.execute(&DiscoverEnvironmentsInput {
            root: PathBuf::from("/repo"),
            names: vec!["venv".to_string(), ".venv".to_string()],
        })?;

        assert_eq!(found.len(), 2);
        Ok(())
    }

    #[test]
    fn discovery_errors_propagate() {
        let operation = DiscoverEnvironmentsOperation::new(MockEnvironmentProvider::new().failing());

        let result = operation.execute(&DiscoverEnvironmentsInput {
            root: PathBuf::from("/repo"),
            names: vec!["venv".to_string()],
        });

        assert!(result.is_err());
    }
}
