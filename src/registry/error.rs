use thiserror::Error;

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("a route named '{name}' is already registered")]
    DuplicateName { name: String },
    #[error("a route with path '{path}' is already registered")]
    DuplicatePath { path: String },
}

pub type RegistryResult<T> = Result<T, RegistryError>;
