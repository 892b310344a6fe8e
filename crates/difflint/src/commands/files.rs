use std::path::Path;
use std::process::ExitCode;

use difflint_config::load_config;
use difflint_operations::operations::{ChangedFilesInput, ChangedFilesOperation};
use difflint_operations::providers::Git2Provider;

use super::{FilesArgs, Target};
use crate::error::Result;
use crate::output::{OutputFormatter, PlainTextFormatter};

pub(crate) fn run(args: FilesArgs, start_path: &Path) -> Result<ExitCode> {
    let git_provider = Git2Provider::new();
    let target = Target::resolve(&git_provider, start_path, &args.branches)?;

    let mut config = load_config(&target.repo_root)?;
    if let Some(extension) = &args.extension {
        config = config.with_extension(extension);
    }

    let operation = ChangedFilesOperation::new(git_provider);
    let files = operation.execute(&ChangedFilesInput {
        repo_root: target.repo_root,
        base: target.base,
        compare: target.compare,
        extension: config.extension().to_string(),
    })?;

    if args.count {
        println!("{}", files.len());
    } else {
        print!("{}", PlainTextFormatter.format_paths(&files));
    }
    Ok(ExitCode::SUCCESS)
}
