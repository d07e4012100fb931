/// Arithmetic operator evaluation logic.
///
/// Handles `add`, `subtract`, `multiply` and `divide` in both their word and
/// symbol forms, including integer overflow checks and floor division.
pub mod binary;

/// Function calls.
///
/// Binds arguments for user-defined functions and restores the caller's
/// variables and execution stack afterwards.
pub mod call;

/// Condition evaluation.
///
/// Evaluates comparisons, `and`/`or` combinators, and the textual boolean
/// expressions used by `if` lines.
pub mod condition;

/// Core evaluation types.
///
/// Contains the evaluation result type, interpreter limits, and the variable
/// environment expressions are evaluated against.
pub mod core;

/// Expression evaluation.
///
/// Turns a flat token sequence into a value: literals, list literals,
/// variables, indexing, built-in application and the left-to-right operator
/// fold.
pub mod expression;

/// The built-in function registry.
pub mod function;

/// Execution of `repeat` and `foreach` loops.
pub mod loops;

/// The instruction-walking interpreter.
///
/// Dispatches each instruction to its execution rule and tracks which
/// branches are active.
pub mod runner;

/// The execution stack of branch markers.
pub mod stack;
