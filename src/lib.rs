//! # clu
//!
//! clu is an interpreter for CLU, a small line-oriented scripting language
//! that reads like English. It tokenizes source lines, parses them into a
//! program of instructions and function definitions, and runs that program
//! with a tree-walking interpreter.
//!
//! ```
//! use clu::{Config, run_source};
//!
//! let report = run_source("var nums is 1, 2, 3\noutput sum of nums", Config::default());
//!
//! assert_eq!(report.output, vec!["6"]);
//! assert!(report.error.is_none());
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use std::{collections::BTreeMap, io::Write};

pub use crate::{
    error::{Error, ErrorKind},
    interpreter::{
        evaluator::{core::Config, runner::Interpreter},
        parser::core::{parse, parse_source},
        value::core::Value,
    },
    program::Program,
};

/// Provides unified error types for parsing and execution.
///
/// This module defines all errors that can be raised while tokenizing,
/// parsing, or running a program. Every error carries the source line it
/// was raised on and maps onto a small taxonomy of error kinds.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches line numbers and detailed messages for context.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation and the value
/// domain to provide a complete runtime for CLU programs.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, and value
///   types.
/// - Provides entry points for parsing and running programs.
pub mod interpreter;
/// The parsed form of a program.
///
/// Declares `Instruction`, `Function` and `Program`: immutable data built by
/// the parser and read by the interpreter.
pub mod program;
/// General utilities for safe numeric conversion.
///
/// # Responsibilities
/// - Safely convert between `i64` and `f64` without silent data loss.
/// - Floor division and 1-based index translation.
pub mod util;

/// Everything a front end needs after a run.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    /// Output lines, one per executed `output`.
    pub output:    Vec<String>,
    /// Variables when the run ended, sorted by name.
    pub variables: BTreeMap<String, Value>,
    /// The error that ended the run, if any.
    pub error:     Option<Error>,
}

impl Report {
    /// Returns `true` if the program parsed and ran to completion.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.error.is_none()
    }
}

/// Parses and runs `source`, capturing everything a front end displays.
///
/// Parse errors stop before anything runs. A runtime error stops the run;
/// the output and variables up to that point are still reported.
///
/// # Examples
/// ```
/// use clu::{Config, ErrorKind, run_source};
///
/// let report = run_source("var x is 1\noutput x\noutput missing", Config::default());
///
/// assert_eq!(report.output, vec!["1"]);
/// assert_eq!(report.error.unwrap().kind(), ErrorKind::Name);
/// ```
#[must_use]
pub fn run_source(source: &str, config: Config) -> Report {
    let (variables, buffer, error) = execute(source, config, Vec::new());

    let output = String::from_utf8_lossy(&buffer).lines()
                                                 .map(str::to_string)
                                                 .collect();

    Report { output,
             variables,
             error }
}

/// Parses and runs `source`, writing output to `out` as it is produced.
///
/// # Errors
/// Returns the parse or runtime error that stopped the run.
///
/// # Examples
/// ```
/// use clu::{Config, run_to};
///
/// let mut out = Vec::new();
/// let variables = run_to("var greeting is 'hi'\noutput greeting", Config::default(), &mut out).unwrap();
///
/// assert_eq!(out, b"hi\n");
/// assert_eq!(variables.len(), 1);
/// ```
pub fn run_to<W: Write>(source: &str,
                        config: Config,
                        out: W)
                        -> Result<BTreeMap<String, Value>, Error> {
    match execute(source, config, out) {
        (_, _, Some(e)) => Err(e),
        (variables, _, None) => Ok(variables),
    }
}

fn execute<W: Write>(source: &str,
                     config: Config,
                     out: W)
                     -> (BTreeMap<String, Value>, W, Option<Error>) {
    let program = match parse_source(source) {
        Ok(program) => program,
        Err(e) => return (BTreeMap::new(), out, Some(e.into())),
    };

    let mut interpreter = Interpreter::with_config(&program, out, config);
    let error = interpreter.run().err().map(Error::from);
    let (variables, out) = interpreter.into_parts();

    (variables.into_iter().collect(), out, error)
}
