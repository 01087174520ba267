use crate::registry::RegistryError;
use crate::route::RouteError;
use crate::screen::ScreenError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RouterError {
    #[error("no route named '{name}' is installed")]
    NameNotFound { name: String },
    #[error("no installed route matches path '{path}'")]
    PathNotFound { path: String },
    #[error(transparent)]
    Route(#[from] RouteError),
    #[error(transparent)]
    Registry(#[from] RegistryError),
    #[error(transparent)]
    Screen(#[from] ScreenError),
}

pub type RouterResult<T> = Result<T, RouterError>;
