use std::path::PathBuf;
use std::time::Duration;

use difflint_config::LintConfig;
use difflint_runner::{RunRequest, RunnerError, ToolResult};
use tracing::{error, info, warn};

use super::changed_files::resolve_changed_files;
use crate::traits::{EnvironmentProvider, GitProvider, ToolRunner};
use crate::{BranchRef, OperationError, Result};

pub struct AnalyzeInput {
    pub repo_root: PathBuf,
    pub base: BranchRef,
    pub compare: BranchRef,
    pub config: LintConfig,
}

#[derive(Debug)]
pub enum AnalyzeOutcome {
    /// No changed file matched; the tool was not started.
    NoFiles,
    /// The tool ran to completion. Its exit code may still report findings.
    Completed {
        files: Vec<PathBuf>,
        result: ToolResult,
    },
    /// The tool was killed after running past the configured timeout.
    Cancelled { timeout: Duration },
}

pub struct AnalyzeOperation<G, E, R> {
    git_provider: G,
    environment_provider: E,
    tool_runner: R,
}

impl<G, E, R> AnalyzeOperation<G, E, R>
where
    G: GitProvider,
    E: EnvironmentProvider,
    R: ToolRunner,
{
    pub fn new(git_provider: G, environment_provider: E, tool_runner: R) -> Self {
        Self {
            git_provider,
            environment_provider,
            tool_runner,
        }
    }

    /// Runs the configured tool over the files `compare` changed since it
    /// forked from `base`.
    ///
    /// # Errors
    ///
    /// Returns [`OperationError::Analysis`] wrapping the cause if the diff or
    /// environment cannot be resolved or the tool cannot be started.
    pub async fn execute(&self, input: &AnalyzeInput) -> Result<AnalyzeOutcome> {
        info!(base = %input.base, compare = %input.compare, "running analysis on branch comparison");

        self.run_pipeline(input).await.map_err(|source| {
            error!(
                base = %input.base,
                compare = %input.compare,
                error = %source,
                "analysis on branch comparison failed"
            );
            OperationError::Analysis {
                base: input.base.to_string(),
                compare: input.compare.to_string(),
                source: Box::new(source),
            }
        })
    }

    async fn run_pipeline(&self, input: &AnalyzeInput) -> Result<AnalyzeOutcome> {
        let config = &input.config;

        let files = resolve_changed_files(
            &self.git_provider,
            &input.repo_root,
            &input.base,
            &input.compare,
            config.extension(),
        )?;

        if files.is_empty() {
            info!(extension = config.extension(), "no matching files changed");
            return Ok(AnalyzeOutcome::NoFiles);
        }

        let config_path = self.locate_tool_config(input);
        let env = self
            .environment_provider
            .resolve(
                &input.repo_root,
                config.environment_names(),
                config.environment_vars(),
            )
            .await?;

        let request = RunRequest::new(config.executable(), input.repo_root.clone(), env)
            .with_report_args(config.report_args().to_vec())
            .with_config_path(config_path)
            .with_files(files.clone())
            .with_timeout(config.timeout());

        match self.tool_runner.run(&request).await {
            Ok(result) => {
                info!(code = result.code, "analysis tool finished");
                Ok(AnalyzeOutcome::Completed { files, result })
            }
            Err(OperationError::Runner(RunnerError::TimedOut { timeout, .. })) => {
                warn!(?timeout, "analysis tool cancelled after timeout");
                Ok(AnalyzeOutcome::Cancelled { timeout })
            }
            Err(e) => Err(e),
        }
    }

    // Best effort: a missing or unreadable rule file only drops the --rcfile argument.
    fn locate_tool_config(&self, input: &AnalyzeInput) -> Option<PathBuf> {
        let name = input.config.tool_config_file()?;
        let pattern = format!("*{name}*");

        match self.git_provider.tracked_files(&input.repo_root, &pattern) {
            Ok(found) => found.into_iter().next(),
            Err(e) => {
                warn!(%pattern, error = %e, "tool config lookup failed, continuing without it");
                None
            }
        }
    }
}
