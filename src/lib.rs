pub mod locator;
pub mod matcher;
pub mod path;
pub mod pattern;
pub mod registry;
pub mod route;
pub mod router;
pub mod screen;
mod types;

pub use path::{PathError, PathResult};
pub use pattern::{PatternError, PatternResult, PatternToken, TokenList};
pub use registry::{RegistryError, RegistryResult, RouteMap};
pub use route::{Route, RouteError, RouteNode, RouteResult};
pub use router::{Router, RouterError, RouterResult};
pub use screen::{
    CachingScreenFactory, Screen, ScreenCtor, ScreenError, ScreenFactory, ScreenHandle, ScreenId,
    ScreenResult,
};
pub use types::RouteParams;
