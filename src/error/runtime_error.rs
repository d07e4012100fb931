use crate::error::ErrorKind;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while running a program.
pub enum RuntimeError {
    /// Tried to read an undefined variable.
    UnknownVariable {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Called a function the program does not define.
    UnknownFunction {
        /// The name of the function.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Applied `of` to a name that is not a built-in function.
    UnknownBuiltin {
        /// The name that was looked up.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A value had an unexpected or incompatible type.
    TypeError {
        /// Details about the type mismatch.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// Tried to access a list element outside the allowed bounds.
    IndexOutOfBounds {
        /// The 1-based index that was requested.
        index: i64,
        /// The length of the indexed value.
        len:   usize,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// The wrong number of arguments was supplied to a function.
    ArgumentCountMismatch {
        /// The function being called.
        name:     String,
        /// The number of parameters the function declares.
        expected: usize,
        /// The number of arguments actually supplied.
        found:    usize,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// Attempted division by zero.
    DivisionByZero {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A `repeat` loop ran for as many iterations as the configured ceiling.
    InfiniteLoopSuspected {
        /// The iteration ceiling that was reached.
        limit: usize,
        /// The line of the `repeat` header.
        line:  usize,
    },
    /// Function calls nested deeper than the configured limit.
    RecursionLimit {
        /// The maximum call depth.
        limit: usize,
        /// The source line of the call that exceeded it.
        line:  usize,
    },
    /// Integer arithmetic overflowed.
    Overflow {
        /// The source line where the error occurred.
        line: usize,
    },
    /// An integer literal does not fit in 64 bits.
    LiteralTooLarge {
        /// The source line where the error occurred.
        line: usize,
    },
    /// `otherwise` ran with no enclosing `if`.
    OtherwiseWithoutIf {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A token sequence does not form a valid expression.
    Malformed {
        /// Details about what could not be evaluated.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// Writing program output failed.
    Output {
        /// The underlying I/O error message.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
}

impl RuntimeError {
    /// Returns the taxonomy category of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::UnknownVariable { .. }
            | Self::UnknownFunction { .. }
            | Self::UnknownBuiltin { .. } => ErrorKind::Name,
            Self::TypeError { .. } => ErrorKind::Type,
            Self::IndexOutOfBounds { .. } => ErrorKind::Index,
            Self::ArgumentCountMismatch { .. } => ErrorKind::Arity,
            Self::DivisionByZero { .. } => ErrorKind::DivisionByZero,
            Self::InfiniteLoopSuspected { .. } => ErrorKind::InfiniteLoopSuspected,
            Self::RecursionLimit { .. } => ErrorKind::RecursionLimit,
            Self::Overflow { .. }
            | Self::LiteralTooLarge { .. }
            | Self::OtherwiseWithoutIf { .. }
            | Self::Malformed { .. }
            | Self::Output { .. } => ErrorKind::Eval,
        }
    }

    /// Returns the source line the error was reported on.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::UnknownVariable { line, .. }
            | Self::UnknownFunction { line, .. }
            | Self::UnknownBuiltin { line, .. }
            | Self::TypeError { line, .. }
            | Self::IndexOutOfBounds { line, .. }
            | Self::ArgumentCountMismatch { line, .. }
            | Self::DivisionByZero { line }
            | Self::InfiniteLoopSuspected { line, .. }
            | Self::RecursionLimit { line, .. }
            | Self::Overflow { line }
            | Self::LiteralTooLarge { line }
            | Self::OtherwiseWithoutIf { line }
            | Self::Malformed { line, .. }
            | Self::Output { line, .. } => *line,
        }
    }
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownVariable { name, line } => {
                write!(f, "Error on line {line}: Unknown variable '{name}'.")
            },
            Self::UnknownFunction { name, line } => {
                write!(f, "Error on line {line}: Unknown function '{name}'.")
            },
            Self::UnknownBuiltin { name, line } => {
                write!(f, "Error on line {line}: '{name}' is not a built-in function.")
            },
            Self::TypeError { details, line } => {
                write!(f, "Error on line {line}: Type error: {details}.")
            },
            Self::IndexOutOfBounds { index, len, line } => write!(f,
                                                                  "Error on line {line}: Index {index} is out of bounds for length {len}."),
            Self::ArgumentCountMismatch { name,
                                          expected,
                                          found,
                                          line, } => write!(f,
                                                            "Error on line {line}: '{name}' expects {expected} arguments, but {found} were given."),
            Self::DivisionByZero { line } => write!(f, "Error on line {line}: Division by zero."),
            Self::InfiniteLoopSuspected { limit, line } => write!(f,
                                                                  "Error on line {line}: Loop exceeded {limit} iterations; infinite loop suspected."),
            Self::RecursionLimit { limit, line } => write!(f,
                                                           "Error on line {line}: Function calls nested deeper than {limit} levels."),
            Self::Overflow { line } => write!(f,
                                              "Error on line {line}: Integer overflow while trying to compute result."),
            Self::LiteralTooLarge { line } => {
                write!(f, "Error on line {line}: Literal is too large.")
            },
            Self::OtherwiseWithoutIf { line } => {
                write!(f, "Error on line {line}: 'otherwise' without a matching 'if'.")
            },
            Self::Malformed { details, line } => {
                write!(f, "Error on line {line}: Invalid expression: {details}.")
            },
            Self::Output { details, line } => {
                write!(f, "Error on line {line}: Failed to write output: {details}.")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
