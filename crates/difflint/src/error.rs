use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("failed to determine current directory")]
    CurrentDir(#[source] std::io::Error),

    #[error(transparent)]
    Operation(#[from] difflint_operations::OperationError),

    #[error(transparent)]
    Config(#[from] difflint_config::ConfigError),

    #[error("failed to start async runtime")]
    Runtime(#[source] std::io::Error),

    #[error("analysis tool was stopped after {}s", timeout.as_secs())]
    TimedOut { timeout: Duration },
}

pub type Result<T> = std::result::Result<T, CliError>;
