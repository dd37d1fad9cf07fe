/// Parsing errors.
///
/// Defines every error the parser can report. Lexing never fails on its own;
/// unrecognized input surfaces here once the parser meets it.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation, including
/// those reported by builtin functions.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Any failure of running source text: either it did not parse, or its
/// evaluation failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The source text could not be parsed.
    Parse(ParseError),
    /// The program failed while being evaluated.
    Runtime(RuntimeError),
}

impl From<ParseError> for Error {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

impl From<RuntimeError> for Error {
    fn from(e: RuntimeError) -> Self {
        Self::Runtime(e)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "{e}"),
            Self::Runtime(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Runtime(e) => Some(e),
        }
    }
}
