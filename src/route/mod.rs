mod error;
mod node;
mod tree;

pub use error::{RouteError, RouteResult};
pub use node::RouteNode;
pub use tree::Route;
