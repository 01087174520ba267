mod params;
mod resolver;

pub use resolver::{extract_params, interpret};
