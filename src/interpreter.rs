/// The evaluator module executes parsed programs.
///
/// The evaluator walks a program's instructions, evaluates expressions and
/// conditions, applies built-in functions, manages variable state and the
/// branch marker stack, and produces output. It is the core execution engine
/// of the interpreter.
///
/// # Responsibilities
/// - Evaluates token sequences into values using the left-to-right operator
///   fold.
/// - Handles conditionals, loops and function calls with save/restore
///   scoping.
/// - Reports runtime errors such as unknown names, type mismatches, division
///   by zero or runaway loops.
pub mod evaluator;
/// The lexer module tokenizes source lines for further parsing.
///
/// The lexer reads raw source lines, strips comments, and produces one token
/// list per non-blank line. Tokens cover numbers, quoted text, words,
/// bracketed and parenthesized forms, parameter lists and single symbols.
///
/// # Responsibilities
/// - Converts each line into tokens that keep their exact source text.
/// - Records 1-based line numbers.
/// - Reports text no token shape accepts.
pub mod lexer;
/// The parser module builds a [`Program`](crate::program::Program) from
/// tokenized lines.
///
/// The parser dispatches on each line's first token and consumes nested
/// `function`, `repeat` and `foreach` bodies up to their matching `end`.
///
/// # Responsibilities
/// - Converts lines into instructions and function definitions.
/// - Validates block structure and statement shapes, reporting errors with
///   line numbers.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// This module declares the values used during execution: integers, floats,
/// booleans, text, lists and the absent marker. It also provides conversion,
/// truthiness, formatting and comparison.
///
/// # Responsibilities
/// - Defines the `Value` enum and all supported value variants.
/// - Implements ordering and equality between values.
/// - Formats values for `output` and `str`.
pub mod value;
