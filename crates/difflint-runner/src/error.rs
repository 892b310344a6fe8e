use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RunnerError {
    #[error("failed to start '{executable}'")]
    Spawn {
        executable: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to collect output of '{executable}'")]
    Output {
        executable: String,
        #[source]
        source: std::io::Error,
    },

    #[error("'{executable}' did not finish within {}s", timeout.as_secs_f64())]
    TimedOut {
        executable: String,
        timeout: Duration,
    },
}
