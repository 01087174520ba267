use crate::path::PathError;
use crate::pattern::PatternError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RouteError {
    #[error(
        "route at '{path}' starts with a variable segment and needs an explicit name"
    )]
    AnonymousVariableRoute { path: String },
    #[error("root route '{path}' has no segment to derive a name from; supply one explicitly")]
    MissingName { path: String },
    #[error(transparent)]
    Path(#[from] PathError),
    #[error(transparent)]
    Pattern(#[from] PatternError),
}

pub type RouteResult<T> = Result<T, RouteError>;
