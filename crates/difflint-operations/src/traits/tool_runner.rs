use async_trait::async_trait;
use difflint_runner::{RunRequest, ToolResult};

use crate::Result;

#[async_trait]
pub trait ToolRunner: Send + Sync {
    /// # Errors
    ///
    /// Returns an error if the tool cannot be started, its output cannot be
    /// read, or it runs past the request's timeout.
    async fn run(&self, request: &RunRequest) -> Result<ToolResult>;
}
