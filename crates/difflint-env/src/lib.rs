mod environment;
mod error;
mod walker;

pub use environment::{
    DEFAULT_ENVIRONMENT_NAMES, ENVIRONMENT_ROOT_VAR, EnvironmentComposer, ProcessEnvironment,
    binary_dir, find_environment_root,
};
pub use error::EnvError;
pub use walker::search;

pub type Result<T> = std::result::Result<T, EnvError>;
