use std::fmt::Write;
use std::path::PathBuf;

use difflint_runner::{NO_FILES_MESSAGE, ToolResult};

use super::OutputFormatter;

pub(crate) struct PlainTextFormatter;

impl OutputFormatter for PlainTextFormatter {
    fn format_no_files(&self) -> String {
        format!("{NO_FILES_MESSAGE}\n")
    }

    fn format_summary(&self, file_count: usize, result: &ToolResult) -> String {
        let status = if result.is_clean() {
            "clean"
        } else {
            "findings reported"
        };
        format!(
            "\nAnalyzed {file_count} file(s): {status} (exit code {})\n",
            result.code
        )
    }

    fn format_paths(&self, paths: &[PathBuf]) -> String {
        paths.iter().fold(String::new(), |mut output, path| {
            let _ = writeln!(output, "{}", path.display());
            output
        })
    }
}
