use std::env;
use std::sync::Once;

use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

/// Overrides the default level when neither `--verbose` nor `--quiet` is given.
const LOG_LEVEL_VAR: &str = "DIFFLINT_LOG_LEVEL";

pub(crate) fn init(verbose: bool, quiet: bool) {
    static INIT: Once = Once::new();

    INIT.call_once(|| {
        let level = if verbose {
            Level::DEBUG
        } else if quiet {
            Level::ERROR
        } else {
            env::var(LOG_LEVEL_VAR)
                .ok()
                .and_then(|value| value.parse().ok())
                .unwrap_or(Level::WARN)
        };

        let mut filter = EnvFilter::from_default_env();

        // RUST_LOG, when set, is used as is.
        if env::var("RUST_LOG").is_err() {
            match directive_for(level).parse() {
                Ok(directive) => filter = filter.add_directive(directive),
                Err(e) => eprintln!("warning: ignoring log level directive: {e}"),
            }
        }

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
            .init();
    });
}

// Every crate of the workspace shares the `difflint` target prefix.
fn directive_for(level: Level) -> String {
    format!("difflint={}", level.as_str().to_ascii_lowercase())
}
