use crate::path::{PathError, PathResult};

/// Splits a path into its `/`-delimited segments.
///
/// Leading and trailing slashes are insignificant and stripped before
/// splitting, so `/` and the empty string both yield zero segments. Interior
/// empty segments produced by `//` are kept: they count toward the segment
/// total and can never satisfy a pattern token.
pub fn split_segments(path: &str) -> Vec<&str> {
    let trimmed = path.trim_matches('/');

    if trimmed.is_empty() {
        return Vec::new();
    }

    trimmed.split('/').collect()
}

pub fn segment_count(path: &str) -> usize {
    split_segments(path).len()
}

/// Joins a parent path and a child path into one composed path.
///
/// The result is `/` followed by the parent's segments and then the child's
/// segments. Composing two roots yields `/`.
pub fn compose_paths(parent: &str, child: &str) -> String {
    let mut segments = split_segments(parent);
    segments.extend(split_segments(child));

    if segments.is_empty() {
        return "/".to_string();
    }

    let mut out = String::with_capacity(parent.len() + child.len() + 1);
    for segment in segments {
        out.push('/');
        out.push_str(segment);
    }
    out
}

pub fn require_leading_slash(path: &str) -> PathResult<()> {
    if !path.starts_with('/') {
        return Err(PathError::MissingLeadingSlash {
            path: path.to_string(),
        });
    }
    Ok(())
}
