use crate::{
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenizedLine},
        parser::{
            core::ParseResult,
            statement::parse_statement,
            utils::{expect_name, parse_params},
        },
    },
    program::{Function, Instruction},
};

/// Parses the body of a block up to its matching `end`.
///
/// Every body line is parsed as a statement. `if` lines open a nesting level
/// so that the `end` closing them is kept in the body as an instruction; the
/// first `end` at nesting level zero closes the block itself and is consumed.
/// Nested `repeat` and `foreach` blocks consume their own `end` recursively.
///
/// # Parameters
/// - `lines`: Line iterator positioned after the block header.
/// - `construct`: The block keyword, for error messages.
/// - `opened_on`: Line number of the block header.
///
/// # Returns
/// The body instructions, in source order.
///
/// # Errors
/// - `NestedFunction` if a `function` header appears in the body.
/// - `UnterminatedBlock` if the input ends before the matching `end`.
/// - Propagates any error from statement parsing.
pub fn parse_block<'a, I>(lines: &mut I,
                          construct: &'static str,
                          opened_on: usize)
                          -> ParseResult<Vec<Instruction>>
    where I: Iterator<Item = &'a TokenizedLine>
{
    let mut body = Vec::new();
    let mut depth = 0usize;

    while let Some(current) = lines.next() {
        match current.tokens.first().map(Token::as_str) {
            Some("end") if depth == 0 => return Ok(body),
            Some("end") => depth -= 1,
            Some("if") => depth += 1,
            Some("function") => return Err(ParseError::NestedFunction { line: current.line }),
            _ => {},
        }

        body.push(parse_statement(current, lines)?);
    }

    Err(ParseError::UnterminatedBlock { construct,
                                        line: opened_on })
}

/// Parses a function definition.
///
/// Syntax:
/// ```text
///     function NAME
///     function NAME -> PARAM
///     function NAME -> PARAM1/PARAM2/...
/// ```
/// followed by body lines and a closing `end`.
///
/// # Parameters
/// - `header`: The `function` header line.
/// - `lines`: Line iterator positioned after the header.
///
/// # Returns
/// The parsed [`Function`].
///
/// # Errors
/// - `ExpectedName` if the function name is missing or not a name.
/// - `MissingKeyword` if a third token is present but is not `->`.
/// - `MalformedHeader` if `->` is not followed by exactly one parameter list.
/// - Propagates errors from the body.
pub fn parse_function<'a, I>(header: &TokenizedLine, lines: &mut I) -> ParseResult<Function>
    where I: Iterator<Item = &'a TokenizedLine>
{
    let line = header.line;
    let tokens = &header.tokens;

    let name = expect_name(tokens.get(1), line)?;

    let params = match tokens.get(2) {
        None => Vec::new(),
        Some(Token::Arrow) => {
            if tokens.len() != 4 {
                return Err(ParseError::MalformedHeader {
                    construct: "function",
                    details: "expected a single parameter list after '->'".to_string(),
                    line,
                });
            }
            parse_params(&tokens[3], line)?
        },
        Some(_) => return Err(ParseError::MissingKeyword { keyword: "->",
                                                           line }),
    };

    let body = parse_block(lines, "function", line)?;

    Ok(Function { name,
                  params,
                  body,
                  line })
}
