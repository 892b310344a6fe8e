mod error;
mod runner;

pub use error::RunnerError;
pub use runner::{KILLED_EXIT_CODE, NO_FILES_MESSAGE, RunRequest, ToolResult, run};

pub type Result<T> = std::result::Result<T, RunnerError>;
