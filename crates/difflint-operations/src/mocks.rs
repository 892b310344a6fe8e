use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use difflint_env::{EnvError, ProcessEnvironment};
use difflint_git::{FileChange, GitError};
use difflint_runner::{RunRequest, RunnerError, ToolResult};

use crate::Result;
use crate::traits::{EnvironmentProvider, GitProvider, ToolRunner};

pub struct MockGitProvider {
    root: PathBuf,
    branch_tips: HashMap<String, String>,
    changed_files: Vec<FileChange>,
    tracked_files: Vec<PathBuf>,
    current_branch: String,
    has_merge_base: bool,
    fail_diff: bool,
    fail_tracked_files: bool,
    not_a_repository: bool,
    diff_requests: Mutex<Vec<(String, String)>>,
    tracked_patterns: Mutex<Vec<String>>,
}

impl MockGitProvider {
    #[must_use]
    pub fn new() -> Self {
        Self {
            root: PathBuf::from("/repo"),
            branch_tips: HashMap::new(),
            changed_files: Vec::new(),
            tracked_files: Vec::new(),
            current_branch: "main".to_string(),
            has_merge_base: true,
            fail_diff: false,
            fail_tracked_files: false,
            not_a_repository: false,
            diff_requests: Mutex::new(Vec::new()),
            tracked_patterns: Mutex::new(Vec::new()),
        }
    }

    #[must_use]
    pub fn with_branch_tip(mut self, branch: &str, sha: &str) -> Self {
        self.branch_tips.insert(branch.to_string(), sha.to_string());
        self
    }

    #[must_use]
    pub fn with_changed_files(mut self, files: Vec<FileChange>) -> Self {
        self.changed_files = files;
        self
    }

    #[must_use]
    pub fn with_tracked_files(mut self, files: Vec<PathBuf>) -> Self {
        self.tracked_files = files;
        self
    }

    #[must_use]
    pub fn without_merge_base(mut self) -> Self {
        self.has_merge_base = false;
        self
    }

    #[must_use]
    pub fn with_failing_diff(mut self) -> Self {
        self.fail_diff = true;
        self
    }

    #[must_use]
    pub fn with_failing_tracked_files(mut self) -> Self {
        self.fail_tracked_files = true;
        self
    }

    #[must_use]
    pub fn not_a_repository(mut self) -> Self {
        self.not_a_repository = true;
        self
    }

    /// `(base, head)` pairs passed to `merge_base_changed_files`.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn diff_requests(&self) -> Vec<(String, String)> {
        self.diff_requests.lock().expect("lock poisoned").clone()
    }

    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn tracked_patterns(&self) -> Vec<String> {
        self.tracked_patterns.lock().expect("lock poisoned").clone()
    }

    fn check_repository(&self, path: &Path) -> Result<()> {
        if self.not_a_repository {
            return Err(GitError::NotARepository {
                path: path.to_path_buf(),
            }
            .into());
        }
        Ok(())
    }
}

impl Default for MockGitProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl GitProvider for MockGitProvider {
    fn repository_root(&self, start_path: &Path) -> Result<PathBuf> {
        self.check_repository(start_path)?;
        Ok(self.root.clone())
    }

    fn latest_commit_sha(&self, repo_root: &Path, branch: &str) -> Result<Option<String>> {
        self.check_repository(repo_root)?;
        Ok(self.branch_tips.get(branch).cloned())
    }

    fn merge_base_changed_files(
        &self,
        repo_root: &Path,
        base: &str,
        head: &str,
    ) -> Result<Option<Vec<FileChange>>> {
        self.check_repository(repo_root)?;
        self.diff_requests
            .lock()
            .expect("lock poisoned")
            .push((base.to_string(), head.to_string()));

        if self.fail_diff {
            return Err(GitError::MissingDeltaPath.into());
        }
        if !self.has_merge_base {
            return Ok(None);
        }
        Ok(Some(self.changed_files.clone()))
    }

    fn tracked_files(&self, repo_root: &Path, pattern: &str) -> Result<Vec<PathBuf>> {
        self.check_repository(repo_root)?;
        self.tracked_patterns
            .lock()
            .expect("lock poisoned")
            .push(pattern.to_string());

        if self.fail_tracked_files {
            return Err(GitError::DetachedHead.into());
        }
        Ok(self.tracked_files.clone())
    }

    fn current_branch(&self, repo_root: &Path) -> Result<String> {
        self.check_repository(repo_root)?;
        Ok(self.current_branch.clone())
    }
}

type EnvironmentRequest = (PathBuf, Vec<String>, BTreeMap<String, String>);

pub struct MockEnvironmentProvider {
    environment: ProcessEnvironment,
    discovered: Vec<PathBuf>,
    fail: bool,
    resolve_requests: Mutex<Vec<EnvironmentRequest>>,
}

impl MockEnvironmentProvider {
    #[must_use]
    pub fn new() -> Self {
        Self {
            environment: ProcessEnvironment::new().with("PATH", "/usr/bin"),
            discovered: Vec::new(),
            fail: false,
            resolve_requests: Mutex::new(Vec::new()),
        }
    }

    #[must_use]
    pub fn with_environment(mut self, environment: ProcessEnvironment) -> Self {
        self.environment = environment;
        self
    }

    #[must_use]
    pub fn with_discovered(mut self, paths: Vec<PathBuf>) -> Self {
        self.discovered = paths;
        self
    }

    #[must_use]
    pub fn failing(mut self) -> Self {
        self.fail = true;
        self
    }

    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn resolve_calls(&self) -> usize {
        self.resolve_requests.lock().expect("lock poisoned").len()
    }

    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn last_request(&self) -> Option<EnvironmentRequest> {
        self.resolve_requests
            .lock()
            .expect("lock poisoned")
            .last()
            .cloned()
    }

    fn failure(path: &Path) -> EnvError {
        EnvError::ReadDir {
            path: path.to_path_buf(),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        }
    }
}

impl Default for MockEnvironmentProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EnvironmentProvider for MockEnvironmentProvider {
    async fn resolve(
        &self,
        base_dir: &Path,
        names: &[String],
        extra_vars: &BTreeMap<String, String>,
    ) -> Result<ProcessEnvironment> {
        self.resolve_requests.lock().expect("lock poisoned").push((
            base_dir.to_path_buf(),
            names.to_vec(),
            extra_vars.clone(),
        ));

        if self.fail {
            return Err(Self::failure(base_dir).into());
        }
        Ok(self.environment.clone())
    }

    fn discover(&self, root: &Path, _names: &[String]) -> Result<Vec<PathBuf>> {
        if self.fail {
            return Err(Self::failure(root).into());
        }
        Ok(self.discovered.clone())
    }
}

enum RunnerFailure {
    Spawn,
    TimedOut,
}

pub struct MockToolRunner {
    result: ToolResult,
    failure: Option<RunnerFailure>,
    requests: Mutex<Vec<RunRequest>>,
}

impl MockToolRunner {
    #[must_use]
    pub fn new() -> Self {
        Self {
            result: ToolResult {
                code: 0,
                stdout: String::new(),
                stderr: String::new(),
            },
            failure: None,
            requests: Mutex::new(Vec::new()),
        }
    }

    #[must_use]
    pub fn with_result(mut self, result: ToolResult) -> Self {
        self.result = result;
        self
    }

    #[must_use]
    pub fn failing_to_spawn(mut self) -> Self {
        self.failure = Some(RunnerFailure::Spawn);
        self
    }

    #[must_use]
    pub fn timing_out(mut self) -> Self {
        self.failure = Some(RunnerFailure::TimedOut);
        self
    }

    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn requests(&self) -> Vec<RunRequest> {
        self.requests.lock().expect("lock poisoned").clone()
    }
}

impl Default for MockToolRunner {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ToolRunner for MockToolRunner {
    async fn run(&self, request: &RunRequest) -> Result<ToolResult> {
        self.requests
            .lock()
            .expect("lock poisoned")
            .push(request.clone());

        match self.failure {
            Some(RunnerFailure::Spawn) => Err(RunnerError::Spawn {
                executable: request.executable.clone(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
            }
            .into()),
            Some(RunnerFailure::TimedOut) => Err(RunnerError::TimedOut {
                executable: request.executable.clone(),
                timeout: request.timeout.unwrap_or(Duration::ZERO),
            }
            .into()),
            None => Ok(self.result.clone()),
        }
    }
}
