/// The error taxonomy of the language.
///
/// Every `ParseError` and `RuntimeError` variant belongs to exactly one kind.
/// The `Display` form is the name shown to users, e.g. `NameError`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A source line contained text no token shape matches.
    Tokenization,
    /// A line or block is structurally malformed.
    Parse,
    /// An undefined variable, function or built-in was referenced.
    Name,
    /// An operator or built-in was applied to incompatible values.
    Type,
    /// A list was indexed outside its bounds.
    Index,
    /// A function was called with the wrong number of arguments.
    Arity,
    /// The right operand of a division was zero.
    DivisionByZero,
    /// A `repeat` loop hit the iteration ceiling.
    InfiniteLoopSuspected,
    /// Function calls nested deeper than the configured limit.
    RecursionLimit,
    /// Any other malformed expression or invalid runtime state.
    Eval,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Tokenization => "TokenizationError",
            Self::Parse => "ParseError",
            Self::Name => "NameError",
            Self::Type => "TypeError",
            Self::Index => "IndexError",
            Self::Arity => "ArityError",
            Self::DivisionByZero => "DivisionByZero",
            Self::InfiniteLoopSuspected => "InfiniteLoopSuspected",
            Self::RecursionLimit => "RecursionLimit",
            Self::Eval => "EvalError",
        };
        f.write_str(name)
    }
}
