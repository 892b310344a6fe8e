use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EnvError {
    #[error("failed to list directory '{path}'")]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("search root '{path}' is not a directory")]
    NotADirectory { path: PathBuf },

    #[error("failed to make '{path}' absolute")]
    AbsolutePath {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot add '{path}' to the search path")]
    SearchPath {
        path: PathBuf,
        #[source]
        source: std::env::JoinPathsError,
    },
}
