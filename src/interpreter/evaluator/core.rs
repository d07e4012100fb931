use std::collections::HashMap;

use crate::{error::RuntimeError, interpreter::value::core::Value};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Default number of `repeat` iterations allowed before a loop is reported as
/// non-terminating.
pub const DEFAULT_MAX_ITERATIONS: usize = 10_000;
/// Default limit on nested function calls.
pub const DEFAULT_MAX_CALL_DEPTH: usize = 100;

/// Runtime limits applied by the interpreter.
///
/// ## Example
/// ```
/// use clu::interpreter::evaluator::core::Config;
///
/// let config = Config::default().with_max_iterations(50);
///
/// assert_eq!(config.max_iterations, 50);
/// assert_eq!(config.max_call_depth, 100);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Iterations a single `repeat` loop may run.
    pub max_iterations: usize,
    /// Function calls that may be active at once.
    pub max_call_depth: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self { max_iterations: DEFAULT_MAX_ITERATIONS,
               max_call_depth: DEFAULT_MAX_CALL_DEPTH, }
    }
}

impl Config {
    /// Sets the `repeat` iteration limit.
    #[must_use]
    pub const fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Sets the function call depth limit.
    #[must_use]
    pub const fn with_max_call_depth(mut self, max_call_depth: usize) -> Self {
        self.max_call_depth = max_call_depth;
        self
    }
}

/// The variable bindings expressions are evaluated against.
///
/// There is a single mapping for the whole run. Function calls do not nest
/// scopes; they take a [`snapshot`](Self::snapshot) of the mapping before
/// binding parameters and [`restore`](Self::restore) it afterwards.
///
/// ## Usage
///
/// The interpreter owns one `Environment` per run. Expression and condition
/// evaluation (`evaluate()`, `evaluate_condition()`,
/// `evaluate_condition_text()`) only read from it, so it can also be used on
/// its own:
///
/// ```
/// use clu::interpreter::{evaluator::core::Environment, lexer::tokenize_line, value::core::Value};
///
/// let mut env = Environment::new();
/// env.set("x", Value::Integer(4));
///
/// let tokens = tokenize_line("x multiply 2 add 1", 1).unwrap();
/// assert_eq!(env.evaluate(&tokens, 1).unwrap(), Value::Integer(9));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Environment {
    variables: HashMap<String, Value>,
}

impl Environment {
    /// Creates an environment with no variables.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up a variable.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.variables.get(name)
    }

    /// Looks up a variable, failing with `UnknownVariable` if it is unbound.
    pub fn lookup(&self, name: &str, line: usize) -> EvalResult<&Value> {
        self.variables
            .get(name)
            .ok_or_else(|| RuntimeError::UnknownVariable { name: name.to_string(),
                                                           line })
    }

    /// Binds `name` to `value`, replacing any previous binding.
    pub fn set(&mut self, name: impl Into<String>, value: Value) {
        self.variables.insert(name.into(), value);
    }

    /// Returns every binding.
    #[must_use]
    pub const fn variables(&self) -> &HashMap<String, Value> {
        &self.variables
    }

    /// Copies the whole mapping so it can be put back after a call.
    #[must_use]
    pub fn snapshot(&self) -> HashMap<String, Value> {
        self.variables.clone()
    }

    /// Replaces the whole mapping with an earlier snapshot.
    pub fn restore(&mut self, snapshot: HashMap<String, Value>) {
        self.variables = snapshot;
    }

    /// Consumes the environment, returning its bindings.
    #[must_use]
    pub fn into_variables(self) -> HashMap<String, Value> {
        self.variables
    }
}
