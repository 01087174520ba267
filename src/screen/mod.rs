mod error;
mod factory;

pub use error::{ScreenError, ScreenResult};
pub use factory::{CachingScreenFactory, Screen, ScreenCtor, ScreenFactory, ScreenHandle, ScreenId};
