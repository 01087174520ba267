mod compiler;
mod error;
mod token;

pub use compiler::{VARIABLE_MARKER, compile};
pub use error::{PatternError, PatternResult};
pub use token::{PatternToken, TokenList};
