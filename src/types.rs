use std::collections::HashMap;

/// Extracted variable bindings for one matched path, name to raw segment text.
pub type RouteParams = HashMap<String, String>;

pub(crate) type CapturedParam = (String, String);
