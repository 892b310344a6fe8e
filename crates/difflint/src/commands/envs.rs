use std::path::Path;
use std::process::ExitCode;

use difflint_config::load_config;
use difflint_operations::operations::{DiscoverEnvironmentsInput, DiscoverEnvironmentsOperation};
use difflint_operations::providers::{Git2Provider, SystemEnvironmentProvider};
use difflint_operations::traits::GitProvider;

use super::EnvsArgs;
use crate::error::Result;
use crate::output::{OutputFormatter, PlainTextFormatter};

pub(crate) fn run(args: EnvsArgs, start_path: &Path) -> Result<ExitCode> {
    let root = Git2Provider::new().repository_root(start_path)?;

    let names = if args.names.is_empty() {
        load_config(&root)?.environment_names().to_vec()
    } else {
        args.names
    };

    let operation = DiscoverEnvironmentsOperation::new(SystemEnvironmentProvider::new());
    let found = operation.execute(&DiscoverEnvironmentsInput { root, names })?;

    print!("{}", PlainTextFormatter.format_paths(&found));
    Ok(ExitCode::SUCCESS)
}
