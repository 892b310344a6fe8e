use std::path::PathBuf;

use difflint_runner::ToolResult;

pub(crate) trait OutputFormatter {
    fn format_no_files(&self) -> String;
    fn format_summary(&self, file_count: usize, result: &ToolResult) -> String;
    fn format_paths(&self, paths: &[PathBuf]) -> String;
}
