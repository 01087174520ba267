use thiserror::Error;

#[derive(Debug, Error)]
pub enum PatternError {
    #[error("path '{path}' contains an empty segment")]
    EmptySegment { path: String },
    #[error("parameter segment '{segment}' is missing a name")]
    ParameterNameEmpty { segment: String },
    #[error(
        "parameter name '{name}' in segment '{segment}' must start with an alphabetic character or underscore (found '{found}')"
    )]
    ParameterInvalidStart {
        segment: String,
        name: String,
        found: char,
    },
    #[error(
        "parameter name '{name}' in segment '{segment}' contains invalid character '{invalid}'"
    )]
    ParameterInvalidCharacter {
        segment: String,
        name: String,
        invalid: char,
    },
    #[error("segment '{segment}' mixes parameter and literal syntax")]
    MixedParameterLiteralSyntax { segment: String },
}

pub type PatternResult<T> = Result<T, PatternError>;
