use tracing::{debug, warn};

use crate::{
    error::ParseError,
    interpreter::{
        lexer::{TokenizedLine, tokenize},
        parser::{block::parse_function, statement::parse_statement},
    },
    program::Program,
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses source lines into a [`Program`].
///
/// This is the entry point for parsing. The lines are tokenized first; any
/// tokenization or structural error aborts parsing and no partial program is
/// returned.
///
/// # Errors
/// Returns the first `ParseError` found, carrying its source line.
///
/// # Example
/// ```
/// use clu::interpreter::parser::core::parse;
///
/// let program = parse(&["function greet -> name", "output 'Hi ' + name", "end", "greet 'Ann'"])
///     .unwrap();
///
/// assert_eq!(program.instructions.len(), 1);
/// assert_eq!(program.functions["greet"].params, vec!["name".to_string()]);
/// ```
pub fn parse<S: AsRef<str>>(lines: &[S]) -> ParseResult<Program> {
    let tokenized = tokenize(lines)?;
    parse_tokenized(&tokenized)
}

/// Parses a complete source text, splitting it into lines first.
///
/// # Errors
/// Returns the first `ParseError` found.
pub fn parse_source(source: &str) -> ParseResult<Program> {
    parse(&source.lines().collect::<Vec<_>>())
}

/// Parses already tokenized lines into a [`Program`].
///
/// A single forward pass: a line starting with `function` opens a function
/// definition that consumes lines up to its matching `end`; any other line is
/// parsed as a statement and appended to the top-level instructions.
/// When two functions share a name the later definition wins.
///
/// # Errors
/// Returns the first `ParseError` found.
pub fn parse_tokenized(lines: &[TokenizedLine]) -> ParseResult<Program> {
    let mut program = Program::new();
    let mut lines = lines.iter();

    while let Some(current) = lines.next() {
        if current.tokens.first().is_some_and(|t| t.is("function")) {
            let function = parse_function(current, &mut lines)?;
            debug!(name = %function.name, params = ?function.params, line = function.line,
                   "defined function");

            if let Some(previous) = program.add_function(function) {
                warn!(name = %previous.name, line = previous.line,
                      "function definition replaced by a later one");
            }
        } else {
            program.add_instruction(parse_statement(current, &mut lines)?);
        }
    }

    debug!(instructions = program.instructions.len(),
           functions = program.functions.len(),
           "parsed program");

    Ok(program)
}
