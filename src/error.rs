/// Error categories.
///
/// Defines the `ErrorKind` taxonomy every concrete error maps onto, so that
/// hosts can tell a name error from a type error without matching on message
/// text.
pub mod kind;
/// Parsing errors.
///
/// Defines all error types that can occur during tokenization and parsing of
/// source lines. Parse errors include malformed block headers, missing
/// keywords and unterminated blocks, and always carry the offending line.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised while running a program.
/// Runtime errors include undefined names, type mismatches, out of range
/// indexing, arity mismatches, division by zero and runaway loops.
pub mod runtime_error;

pub use kind::ErrorKind;
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Any error that can end a run: either the source failed to parse, or the
/// program failed while executing.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// The source was rejected before anything executed.
    Parse(ParseError),
    /// An instruction failed during execution.
    Runtime(RuntimeError),
}

impl Error {
    /// Returns the taxonomy category of the wrapped error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Parse(e) => e.kind(),
            Self::Runtime(e) => e.kind(),
        }
    }

    /// Returns the source line the error was reported on.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::Parse(e) => e.line(),
            Self::Runtime(e) => e.line(),
        }
    }
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
