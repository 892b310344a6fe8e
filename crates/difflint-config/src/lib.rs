mod config;
mod error;
mod file;

pub use config::{
    CONFIG_FILE_NAME, DEFAULT_EXECUTABLE, DEFAULT_EXTENSION, DEFAULT_REPORT_ARGS,
    DEFAULT_TOOL_CONFIG_FILE, LintConfig, load_config, parse_config,
};
pub use error::ConfigError;

pub type Result<T> = std::result::Result<T, ConfigError>;
