use crate::screen::ScreenId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScreenError {
    #[error("no constructor registered for screen '{screen}'")]
    UnknownScreen { screen: ScreenId },
}

pub type ScreenResult<T> = Result<T, ScreenError>;
