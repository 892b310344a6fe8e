use async_trait::async_trait;
use difflint_runner::{RunRequest, ToolResult};

use crate::Result;
use crate::traits::ToolRunner;

/// Starts the tool as a child process.
pub struct ProcessToolRunner;

impl ProcessToolRunner {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for ProcessToolRunner {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ToolRunner for ProcessToolRunner {
    async fn run(&self, request: &RunRequest) -> Result<ToolResult> {
        Ok(difflint_runner::run(request).await?)
    }
}
