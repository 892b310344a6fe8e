mod environment_provider;
mod git_provider;
mod tool_runner;

pub use environment_provider::EnvironmentProvider;
pub use git_provider::GitProvider;
pub use tool_runner::ToolRunner;
