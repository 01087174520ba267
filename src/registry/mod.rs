mod error;
mod map;
mod stats;

pub use error::{RegistryError, RegistryResult};
pub use map::RouteMap;
pub use stats::RegistryMetrics;
