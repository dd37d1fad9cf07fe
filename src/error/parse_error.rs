#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while parsing.
///
/// Parsing stops at the first error; no partially built tree is returned.
pub enum ParseError {
    /// A specific token was required but another one was found.
    UnexpectedToken {
        /// Description of what the parser required.
        expected: String,
        /// The token actually found.
        found:    String,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// The token cannot start an expression.
    NoPrefixParseRule {
        /// The offending token.
        found: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// The token cannot continue an expression.
    NoInfixParseRule {
        /// The offending token.
        found: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// An integer literal does not fit in a 64-bit signed integer.
    InvalidIntegerLiteral {
        /// The literal as written.
        literal: String,
        /// The source line where the error occurred.
        line:    usize,
    },
}

impl ParseError {
    /// Gets the line the error was detected on.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::UnexpectedToken { line, .. }
            | Self::NoPrefixParseRule { line, .. }
            | Self::NoInfixParseRule { line, .. }
            | Self::InvalidIntegerLiteral { line, .. } => *line,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { expected,
                                    found,
                                    line, } => {
                write!(f, "Error on line {line}: Expected {expected}, found {found}.")
            },
            Self::NoPrefixParseRule { found, line } => {
                write!(f, "Error on line {line}: Expected an expression, found {found}.")
            },
            Self::NoInfixParseRule { found, line } => {
                write!(f, "Error on line {line}: {found} cannot continue an expression.")
            },
            Self::InvalidIntegerLiteral { literal, line } => write!(f,
                                                                    "Error on line {line}: Integer literal {literal} is too large."),
        }
    }
}

impl std::error::Error for ParseError {}
