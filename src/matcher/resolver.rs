use crate::matcher::params::{CaptureList, captures_to_map};
use crate::path::split_segments;
use crate::pattern::PatternToken;
use crate::types::RouteParams;
use smallvec::SmallVec;

/// Decides whether a candidate path matches a compiled pattern.
///
/// The segment count is a hard structural filter: a candidate with a
/// different number of segments never matches, whatever the tokens say.
/// Past that filter, every segment is paired positionally with its token and
/// all pairings must match; the first failure short-circuits.
#[tracing::instrument(level = "trace", skip(pattern), fields(path = %path, tokens = pattern.len() as u64))]
pub fn interpret(pattern: &[PatternToken], path: &str) -> bool {
    let segments = split_segments(path);

    if segments.len() != pattern.len() {
        return false;
    }

    segments
        .iter()
        .zip(pattern.iter())
        .all(|(segment, token)| token.matches(segment))
}

/// Collects the variable bindings a candidate path produces against a
/// pattern, in token order.
///
/// This does not require a match: on a non-matching pair it returns whatever
/// bindings line up positionally. Callers that need match guarantees check
/// [`interpret`] first.
pub fn extract_params(pattern: &[PatternToken], path: &str) -> RouteParams {
    let segments = split_segments(path);
    let mut captures: CaptureList = SmallVec::new();

    for (segment, token) in segments.iter().zip(pattern.iter()) {
        if let Some((name, value)) = token.capture(segment) {
            captures.push((name.to_string(), value.to_string()));
        }
    }

    captures_to_map(captures)
}
