mod error;
mod segments;

pub use error::{PathError, PathResult};
pub use segments::{compose_paths, require_leading_slash, segment_count, split_segments};
