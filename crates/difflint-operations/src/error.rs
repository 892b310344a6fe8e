use thiserror::Error;

#[derive(Debug, Error)]
pub enum OperationError {
    #[error(transparent)]
    Git(#[from] difflint_git::GitError),

    #[error(transparent)]
    Environment(#[from] difflint_env::EnvError),

    #[error(transparent)]
    Runner(#[from] difflint_runner::RunnerError),

    #[error("analysis of '{compare}' against '{base}' failed")]
    Analysis {
        base: String,
        compare: String,
        #[source]
        source: Box<OperationError>,
    },
}

pub type Result<T> = std::result::Result<T, OperationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn analysis_error_names_both_branches() {
        let err = OperationError::Analysis {
            base: "main".to_string(),
            compare: "feature/login".to_string(),
            source: Box::new(difflint_git::GitError::DetachedHead.into()),
        };

        let msg = err.to_string();

        assert!(msg.contains("main"));
        assert!(msg.contains("feature/login"));
    }

    #[test]
    fn analysis_error_keeps_cause() {
        let err = OperationError::Analysis {
            base: "main".to_string(),
            compare: "dev".to_string(),
            source: Box::new(difflint_git::GitError::DetachedHead.into()),
        };

        let source = std::error::Error::source(&err).map(ToString::to_string);

        assert_eq!(source.as_deref(), Some("HEAD is detached, not on a branch"));
    }

    #[test]
    fn git_error_converts_via_from() {
        let err: OperationError = difflint_git::GitError::DetachedHead.into();

        assert!(matches!(err, OperationError::Git(_)));
    }
}
