use crate::path::split_segments;
use crate::pattern::{PatternError, PatternResult, PatternToken, TokenList};

/// Marker that opens a variable segment, as in `/profile/:id`.
pub const VARIABLE_MARKER: char = ':';

/// Compiles a declared path into its ordered token list.
///
/// The path is stripped of leading and trailing slashes and split on `/`;
/// each segment becomes one token. The root path `/` compiles to an empty
/// list, which matches only the empty path.
#[tracing::instrument(level = "trace", fields(path = %path))]
pub fn compile(path: &str) -> PatternResult<TokenList> {
    let mut tokens = TokenList::new();

    for segment in split_segments(path) {
        tokens.push(compile_segment(path, segment)?);
    }

    Ok(tokens)
}

fn compile_segment(path: &str, segment: &str) -> PatternResult<PatternToken> {
    if segment.is_empty() {
        return Err(PatternError::EmptySegment {
            path: path.to_string(),
        });
    }

    if let Some(name) = segment.strip_prefix(VARIABLE_MARKER) {
        validate_parameter_name(segment, name)?;
        return Ok(PatternToken::Variable(name.to_string()));
    }

    if segment.contains(VARIABLE_MARKER) {
        return Err(PatternError::MixedParameterLiteralSyntax {
            segment: segment.to_string(),
        });
    }

    Ok(PatternToken::Literal(segment.to_string()))
}

fn validate_parameter_name(segment: &str, name: &str) -> PatternResult<()> {
    let bytes = name.as_bytes();

    if bytes.is_empty() {
        return Err(PatternError::ParameterNameEmpty {
            segment: segment.to_string(),
        });
    }

    if !(bytes[0].is_ascii_alphabetic() || bytes[0] == b'_') {
        return Err(PatternError::ParameterInvalidStart {
            segment: segment.to_string(),
            name: name.to_string(),
            found: bytes[0] as char,
        });
    }

    for &b in &bytes[1..] {
        if !(b.is_ascii_alphanumeric() || b == b'_') {
            return Err(PatternError::ParameterInvalidCharacter {
                segment: segment.to_string(),
                name: name.to_string(),
                invalid: b as char,
            });
        }
    }

    Ok(())
}
