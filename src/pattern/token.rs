use smallvec::SmallVec;

/// Compiled form of one path segment.
///
/// A pattern is an ordered token list, one token per declared segment, and
/// matching is strictly positional: token `i` is evaluated against segment
/// `i` of the candidate path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternToken {
    /// Matches a segment equal to the stored text, verbatim.
    Literal(String),
    /// Matches any non-empty segment and binds it under the stored name.
    Variable(String),
}

pub type TokenList = SmallVec<[PatternToken; 4]>;

impl PatternToken {
    pub fn matches(&self, segment: &str) -> bool {
        match self {
            Self::Literal(text) => segment == text,
            Self::Variable(_) => !segment.is_empty(),
        }
    }

    /// Returns the parameter binding this token contributes, if any.
    ///
    /// Literal tokens never bind. Variable tokens bind their name to the raw
    /// segment text; no coercion happens at this layer.
    pub fn capture<'a>(&self, segment: &'a str) -> Option<(&str, &'a str)> {
        match self {
            Self::Literal(_) => None,
            Self::Variable(name) => Some((name.as_str(), segment)),
        }
    }

    pub fn is_variable(&self) -> bool {
        matches!(self, Self::Variable(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literal_requires_exact_equality() {
        let token = PatternToken::Literal("profile".to_string());
        assert!(token.matches("profile"));
        assert!(!token.matches("profiles"));
        assert!(!token.matches(""));
        assert!(token.capture("profile").is_none());
    }

    #[test]
    fn variable_matches_any_non_empty_segment() {
        let token = PatternToken::Variable("id".to_string());
        assert!(token.matches("42"));
        assert!(token.matches("anything"));
        assert!(!token.matches(""));
        assert_eq!(token.capture("42"), Some(("id", "42")));
    }
}
