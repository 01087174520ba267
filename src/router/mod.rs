mod errors;
mod service;

pub use errors::{RouterError, RouterResult};
pub use service::Router;
