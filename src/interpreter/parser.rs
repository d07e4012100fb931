/// Parser entry points and the top-level loop.
///
/// Walks the tokenized lines once, routing `function` headers to function
/// parsing and every other line to statement parsing.
pub mod core;

/// Block parsing.
///
/// Consumes the body lines of `function`, `repeat` and `foreach` blocks up to
/// their matching `end`, tracking nested `if` depth.
pub mod block;

/// Statement parsing.
///
/// The keyword-indexed dispatch that turns one line into one instruction.
pub mod statement;

/// Utility functions for the parser.
///
/// Helpers for names, operators and header validation shared by statements
/// and blocks.
pub mod utils;
