use std::collections::BTreeMap;
use std::path::Path;
use std::time::Duration;

use crate::error::ConfigError;
use crate::file::ConfigFile;

pub const CONFIG_FILE_NAME: &str = ".difflint.toml";
pub const DEFAULT_EXECUTABLE: &str = "pylint";
pub const DEFAULT_EXTENSION: &str = "py";
pub const DEFAULT_TOOL_CONFIG_FILE: &str = ".pylintrc";
pub const DEFAULT_REPORT_ARGS: &[&str] = &["--disable=import-error", "--output=pylint_report.txt"];

const DEFAULT_ENVIRONMENT_NAMES: &[&str] = &["venv", ".venv"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LintConfig {
    executable: String,
    extension: String,
    tool_config_file: Option<String>,
    report_args: Vec<String>,
    timeout: Option<Duration>,
    environment_names: Vec<String>,
    environment_vars: BTreeMap<String, String>,
}

impl Default for LintConfig {
    fn default() -> Self {
        Self {
            executable: DEFAULT_EXECUTABLE.to_string(),
            extension: DEFAULT_EXTENSION.to_string(),
            tool_config_file: Some(DEFAULT_TOOL_CONFIG_FILE.to_string()),
            report_args: DEFAULT_REPORT_ARGS.iter().map(ToString::to_string).collect(),
            timeout: None,
            environment_names: DEFAULT_ENVIRONMENT_NAMES
                .iter()
                .map(ToString::to_string)
                .collect(),
            environment_vars: BTreeMap::new(),
        }
    }
}

impl LintConfig {
    #[must_use]
    pub fn executable(&self) -> &str {
        &self.executable
    }

    /// Extension without the leading dot.
    #[must_use]
    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// Name of the tool's own rule file, looked up among tracked files.
    #[must_use]
    pub fn tool_config_file(&self) -> Option<&str> {
        self.tool_config_file.as_deref()
    }

    #[must_use]
    pub fn report_args(&self) -> &[String] {
        &self.report_args
    }

    #[must_use]
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    #[must_use]
    pub fn environment_names(&self) -> &[String] {
        &self.environment_names
    }

    #[must_use]
    pub fn environment_vars(&self) -> &BTreeMap<String, String> {
        &self.environment_vars
    }

    #[must_use]
    pub fn with_executable(mut self, executable: impl Into<String>) -> Self {
        self.executable = executable.into();
        self
    }

    #[must_use]
    pub fn with_extension(mut self, extension: &str) -> Self {
        self.extension = normalize_extension(extension);
        self
    }

    /// An empty name disables the lookup.
    #[must_use]
    pub fn with_tool_config_file(mut self, name: &str) -> Self {
        self.tool_config_file = (!name.is_empty()).then(|| name.to_string());
        self
    }

    #[must_use]
    pub fn with_report_args(mut self, args: Vec<String>) -> Self {
        self.report_args = args;
        self
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    #[must_use]
    pub fn with_environment_names(mut self, names: Vec<String>) -> Self {
        self.environment_names = names;
        self
    }
}

/// Loads `.difflint.toml` from `repo_root`, falling back to defaults when the
/// file does not exist.
///
/// # Errors
///
/// Returns [`ConfigError`] if the file exists but cannot be read, parsed, or
/// contains invalid values.
pub fn load_config(repo_root: &Path) -> Result<LintConfig, ConfigError> {
    let path = repo_root.join(CONFIG_FILE_NAME);

    let content = match std::fs::read_to_string(&path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(LintConfig::default()),
        Err(source) => return Err(ConfigError::Read { path, source }),
    };

    parse_config(&content, &path)
}

/// # Errors
///
/// Returns [`ConfigError::Parse`] for malformed TOML or unknown keys and
/// [`ConfigError::Invalid`] for values that cannot be used.
pub fn parse_config(content: &str, path: &Path) -> Result<LintConfig, ConfigError> {
    let file: ConfigFile = toml::from_str(content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    let invalid = |reason| ConfigError::Invalid {
        path: path.to_path_buf(),
        reason,
    };

    let mut config = LintConfig::default();

    if let Some(tool) = file.tool {
        if let Some(executable) = tool.executable {
            if executable.trim().is_empty() {
                return Err(invalid("tool.executable cannot be empty"));
            }
            config.executable = executable;
        }
        if let Some(extension) = tool.extension {
            let extension = normalize_extension(&extension);
            if extension.is_empty() {
                return Err(invalid("tool.extension cannot be empty"));
            }
            config.extension = extension;
        }
        if let Some(name) = tool.config_file {
            config = config.with_tool_config_file(&name);
        }
        if let Some(args) = tool.report_args {
            config.report_args = args;
        }
        if let Some(secs) = tool.timeout_secs {
            if secs == 0 {
                return Err(invalid("tool.timeout-secs must be greater than zero"));
            }
            config.timeout = Some(Duration::from_secs(secs));
        }
    }

    if let Some(environment) = file.environment {
        if let Some(names) = environment.names {
            if names.iter().any(|n| n.is_empty() || n.contains(['/', '\\'])) {
                return Err(invalid("environment.names must be plain directory names"));
            }
            config.environment_names = names;
        }
        config.environment_vars = environment.vars;
    }

    Ok(config)
}

fn normalize_extension(extension: &str) -> String {
    extension.trim().trim_start_matches('.').to_string()
}
