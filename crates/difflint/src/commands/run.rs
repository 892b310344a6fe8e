use std::path::Path;
use std::process::ExitCode;

use difflint_config::load_config;
use difflint_operations::operations::{AnalyzeInput, AnalyzeOperation, AnalyzeOutcome};
use difflint_operations::providers::{Git2Provider, ProcessToolRunner, SystemEnvironmentProvider};

use super::{RunArgs, Target};
use crate::error::{CliError, Result};
use crate::output::{OutputFormatter, PlainTextFormatter};

pub(crate) fn run(args: RunArgs, start_path: &Path, quiet: bool) -> Result<ExitCode> {
    let git_provider = Git2Provider::new();
    let target = Target::resolve(&git_provider, start_path, &args.branches)?;
    let config = args.apply_to(load_config(&target.repo_root)?);

    let operation = AnalyzeOperation::new(
        git_provider,
        SystemEnvironmentProvider::new(),
        ProcessToolRunner::new(),
    );
    let input = AnalyzeInput {
        repo_root: target.repo_root,
        base: target.base,
        compare: target.compare,
        config,
    };

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(CliError::Runtime)?;
    let outcome = runtime.block_on(operation.execute(&input))?;

    let formatter = PlainTextFormatter;

    match outcome {
        AnalyzeOutcome::NoFiles => {
            print!("{}", formatter.format_no_files());
            Ok(ExitCode::SUCCESS)
        }
        AnalyzeOutcome::Completed { files, result } => {
            print!("{}", result.stdout);
            eprint!("{}", result.stderr);
            if !quiet {
                eprint!("{}", formatter.format_summary(files.len(), &result));
            }
            Ok(tool_exit_code(result.code))
        }
        AnalyzeOutcome::Cancelled { timeout } => Err(CliError::TimedOut { timeout }),
    }
}

fn tool_exit_code(code: i32) -> ExitCode {
    // Negative codes come from signals or Windows NTSTATUS values.
    if code < 0 {
        return ExitCode::FAILURE;
    }
    ExitCode::from(u8::try_from(code.min(255)).unwrap_or(u8::MAX))
}
