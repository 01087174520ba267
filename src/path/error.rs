use thiserror::Error;

#[derive(Debug, Error)]
pub enum PathError {
    #[error("route path '{path}' must start with '/'")]
    MissingLeadingSlash { path: String },
}

pub type PathResult<T> = Result<T, PathError>;
