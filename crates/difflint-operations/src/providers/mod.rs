mod environment;
mod git;
mod runner;

pub use environment::SystemEnvironmentProvider;
pub use git::Git2Provider;
pub use runner::ProcessToolRunner;
