mod envs;
mod files;
mod run;

use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Duration;

use clap::{Args, Subcommand};
use difflint_config::LintConfig;
use difflint_operations::BranchRef;
use difflint_operations::traits::GitProvider;

use crate::error::Result;

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Run the analysis tool over files changed on a branch
    Run(RunArgs),
    /// List the files a branch changed since it forked
    Files(FilesArgs),
    /// List runtime-environment directories below the repository root
    Envs(EnvsArgs),
}

#[derive(Args)]
pub(crate) struct BranchArgs {
    /// Branch the comparison branch forked from
    #[arg(long)]
    pub base: String,

    /// Branch whose changes are analyzed (default: current branch)
    #[arg(long)]
    pub compare: Option<String>,
}

#[derive(Args)]
pub(crate) struct RunArgs {
    #[command(flatten)]
    pub branches: BranchArgs,

    /// Analysis executable (default: pylint)
    #[arg(long)]
    pub executable: Option<String>,

    /// Only analyze changed files with this extension (default: py)
    #[arg(long)]
    pub extension: Option<String>,

    /// Name of the tool's tracked rule file; an empty value disables the lookup
    #[arg(long = "config-file", value_name = "NAME")]
    pub config_file: Option<String>,

    /// Stop the tool after this many seconds
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,
}

#[derive(Args)]
pub(crate) struct FilesArgs {
    #[command(flatten)]
    pub branches: BranchArgs,

    /// Only list changed files with this extension (default: py)
    #[arg(long)]
    pub extension: Option<String>,

    /// Print only the number of files
    #[arg(long)]
    pub count: bool,
}

#[derive(Args)]
pub(crate) struct EnvsArgs {
    /// Directory name to look for, may be repeated (default: venv, .venv)
    #[arg(long = "name", value_name = "NAME")]
    pub names: Vec<String>,
}

impl Commands {
    pub(crate) fn execute(self, start_path: &Path, quiet: bool) -> Result<ExitCode> {
        match self {
            Self::Run(args) => run::run(args, start_path, quiet),
            Self::Files(args) => files::run(args, start_path),
            Self::Envs(args) => envs::run(args, start_path),
        }
    }
}

/// Repository root, base branch, and comparison branch for a command.
pub(crate) struct Target {
    pub repo_root: PathBuf,
    pub base: BranchRef,
    pub compare: BranchRef,
}

impl Target {
    pub(crate) fn resolve<G: GitProvider>(
        git_provider: &G,
        start_path: &Path,
        branches: &BranchArgs,
    ) -> Result<Self> {
        let repo_root = git_provider.repository_root(start_path)?;
        let compare = match &branches.compare {
            Some(name) => name.clone(),
            None => git_provider.current_branch(&repo_root)?,
        };

        Ok(Self {
            repo_root,
            base: BranchRef::new(branches.base.as_str()),
            compare: BranchRef::new(compare),
        })
    }
}

impl RunArgs {
    fn apply_to(&self, mut config: LintConfig) -> LintConfig {
        if let Some(executable) = &self.executable {
            config = config.with_executable(executable);
        }
        if let Some(extension) = &self.extension {
            config = config.with_extension(extension);
        }
        if let Some(name) = &self.config_file {
            config = config.with_tool_config_file(name);
        }
        if let Some(secs) = self.timeout {
            config = config.with_timeout(Some(Duration::from_secs(secs)));
        }
        config
    }
}
