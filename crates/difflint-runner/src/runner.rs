use std::ffi::OsString;
use std::path::PathBuf;
use std::process::{ExitStatus, Stdio};
use std::time::Duration;

use difflint_env::ProcessEnvironment;
use tokio::io::{AsyncRead, AsyncReadExt};
use tokio::process::{Child, Command};
use tracing::{debug, info, warn};

use crate::{Result, RunnerError};

/// Reported in place of tool output when there was nothing to analyze.
pub const NO_FILES_MESSAGE: &str = "No changed files to analyze.";

/// Exit code reported when the process ended without one (killed by a signal).
pub const KILLED_EXIT_CODE: i32 = 1;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolResult {
    pub code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl ToolResult {
    #[must_use]
    pub fn no_files() -> Self {
        Self {
            code: 0,
            stdout: NO_FILES_MESSAGE.to_string(),
            stderr: String::new(),
        }
    }

    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.code == 0
    }
}

/// Everything needed to start one analysis process.
#[derive(Debug, Clone)]
pub struct RunRequest {
    pub executable: String,
    pub report_args: Vec<String>,
    pub config_path: Option<PathBuf>,
    pub files: Vec<PathBuf>,
    pub cwd: PathBuf,
    /// Complete child environment; nothing is inherited on top of it.
    pub env: ProcessEnvironment,
    pub timeout: Option<Duration>,
}

impl RunRequest {
    #[must_use]
    pub fn new(executable: impl Into<String>, cwd: PathBuf, env: ProcessEnvironment) -> Self {
        Self {
            executable: executable.into(),
            report_args: Vec::new(),
            config_path: None,
            files: Vec::new(),
            cwd,
            env,
            timeout: None,
        }
    }

    #[must_use]
    pub fn with_report_args(mut self, args: Vec<String>) -> Self {
        self.report_args = args;
        self
    }

    #[must_use]
    pub fn with_config_path(mut self, path: Option<PathBuf>) -> Self {
        self.config_path = path;
        self
    }

    #[must_use]
    pub fn with_files(mut self, files: Vec<PathBuf>) -> Self {
        self.files = files;
        self
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Report flags, then `--rcfile <path>` if set, then the files.
    #[must_use]
    pub fn arguments(&self) -> Vec<OsString> {
        let mut args: Vec<OsString> = self.report_args.iter().map(OsString::from).collect();

        if let Some(config) = &self.config_path {
            args.push(OsString::from("--rcfile"));
            args.push(config.clone().into_os_string());
        }

        args.extend(self.files.iter().map(|f| f.clone().into_os_string()));
        args
    }
}

/// Runs the tool described by `request` to completion.
///
/// An empty file list never starts a process and yields [`ToolResult::no_files`].
/// A non-zero exit code is a normal result, not an error.
///
/// # Errors
///
/// Returns [`RunnerError::Spawn`] if the executable cannot be started,
/// [`RunnerError::Output`] if its output cannot be read, and
/// [`RunnerError::TimedOut`] if the timeout elapsed (the process is killed).
pub async fn run(request: &RunRequest) -> Result<ToolResult> {
    if request.files.is_empty() {
        debug!(executable = %request.executable, "no files, skipping tool run");
        return Ok(ToolResult::no_files());
    }

    let args = request.arguments();
    info!(
        executable = %request.executable,
        file_count = request.files.len(),
        rcfile = ?request.config_path,
        "running analysis tool"
    );
    debug!(?args, cwd = %request.cwd.display(), "tool arguments");

    let mut child = Command::new(&request.executable)
        .args(&args)
        .current_dir(&request.cwd)
        .env_clear()
        .envs(request.env.iter())
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true)
        .spawn()
        .map_err(|source| RunnerError::Spawn {
            executable: request.executable.clone(),
            source,
        })?;

    let collected = match request.timeout {
        Some(limit) => {
            if let Ok(collected) = tokio::time::timeout(limit, collect_output(&mut child)).await {
                collected
            } else {
                warn!(executable = %request.executable, ?limit, "tool timed out, killing it");
                if let Err(e) = child.kill().await {
                    warn!(error = %e, "failed to kill timed out tool");
                }
                return Err(RunnerError::TimedOut {
                    executable: request.executable.clone(),
                    timeout: limit,
                });
            }
        }
        None => collect_output(&mut child).await,
    };

    let (status, stdout, stderr) = collected.map_err(|source| RunnerError::Output {
        executable: request.executable.clone(),
        source,
    })?;

    let code = status.code().unwrap_or(KILLED_EXIT_CODE);
    debug!(code, "tool finished");

    Ok(ToolResult {
        code,
        stdout: String::from_utf8_lossy(&stdout).into_owned(),
        stderr: String::from_utf8_lossy(&stderr).into_owned(),
    })
}

// Drains both pipes while waiting so a chatty tool cannot block on a full pipe.
async fn collect_output(child: &mut Child) -> std::io::Result<(ExitStatus, Vec<u8>, Vec<u8>)> {
    let stdout = child.stdout.take();
    let stderr = child.stderr.take();

    tokio::try_join!(child.wait(), read_all(stdout), read_all(stderr))
}

async fn read_all<R: AsyncRead + Unpin>(stream: Option<R>) -> std::io::Result<Vec<u8>> {
    let mut buf = Vec::new();
    if let Some(mut stream) = stream {
        stream.read_to_end(&mut buf).await?;
    }
    Ok(buf)
}
