use crate::error::ErrorKind;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during tokenizing or parsing.
pub enum ParseError {
    /// Found text that no token shape matches.
    UnrecognizedToken {
        /// The unmatched text.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A required keyword such as `is` or `->` was not found.
    MissingKeyword {
        /// The keyword that was expected.
        keyword: &'static str,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// A statement that needs an expression has none.
    MissingExpression {
        /// The statement keyword.
        statement: &'static str,
        /// The source line where the error occurred.
        line:      usize,
    },
    /// The header of a block or an `if` line has the wrong shape.
    MalformedHeader {
        /// The construct being parsed, such as `repeat`.
        construct: &'static str,
        /// Details describing what is wrong.
        details:   String,
        /// The source line where the error occurred.
        line:      usize,
    },
    /// A comparison or boolean operator keyword is not recognized.
    UnknownOperator {
        /// The operator token.
        operator: String,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// A name was expected but some other token was found.
    ExpectedName {
        /// The token encountered.
        found: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A literal name such as `True` or `none` was used as a variable or
    /// parameter name.
    ReservedName {
        /// The name that was rejected.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A `function` header appeared inside another block.
    NestedFunction {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Input ended before a block's `end`.
    UnterminatedBlock {
        /// The construct that was left open.
        construct: &'static str,
        /// The line the block was opened on.
        line:      usize,
    },
}

impl ParseError {
    /// Returns the taxonomy category of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::UnrecognizedToken { .. } => ErrorKind::Tokenization,
            _ => ErrorKind::Parse,
        }
    }

    /// Returns the source line the error was reported on.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::UnrecognizedToken { line, .. }
            | Self::MissingKeyword { line, .. }
            | Self::MissingExpression { line, .. }
            | Self::MalformedHeader { line, .. }
            | Self::UnknownOperator { line, .. }
            | Self::ExpectedName { line, .. }
            | Self::ReservedName { line, .. }
            | Self::NestedFunction { line }
            | Self::UnterminatedBlock { line, .. } => *line,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnrecognizedToken { token, line } => {
                write!(f, "Error on line {line}: Unrecognized token: {token}.")
            },

            Self::MissingKeyword { keyword, line } => {
                write!(f, "Error on line {line}: Expected keyword '{keyword}' but none found.")
            },

            Self::MissingExpression { statement, line } => write!(f,
                                                                  "Error on line {line}: '{statement}' requires an expression."),

            Self::MalformedHeader { construct,
                                    details,
                                    line, } => {
                write!(f, "Error on line {line}: Malformed '{construct}': {details}.")
            },

            Self::UnknownOperator { operator, line } => {
                write!(f, "Error on line {line}: Unknown operator '{operator}'.")
            },

            Self::ExpectedName { found, line } => {
                write!(f, "Error on line {line}: Expected a name, found '{found}'.")
            },

            Self::ReservedName { name, line } => {
                write!(f, "Error on line {line}: '{name}' is a literal and cannot be assigned to.")
            },

            Self::NestedFunction { line } => write!(f,
                                                    "Error on line {line}: Functions can only be defined at the top level."),

            Self::UnterminatedBlock { construct, line } => write!(f,
                                                                  "Error on line {line}: '{construct}' block is missing its 'end'."),
        }
    }
}

impl std::error::Error for ParseError {}
