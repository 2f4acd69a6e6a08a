use crate::constraint::ConstraintParseError;
use pragma_check_types::SourcePath;

#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    #[error("invalid version pragma in {path}")]
    Constraint {
        path: SourcePath,
        #[source]
        source: ConstraintParseError,
    },

    #[error("{path} declares conflicting version pragmas `{first}` and `{second}`")]
    DuplicatePragma {
        path: SourcePath,
        first: String,
        second: String,
    },
}
