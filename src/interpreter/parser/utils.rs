use std::collections::HashSet;

use crate::{
    error::ParseError,
    interpreter::{lexer::Token, parser::core::ParseResult},
    program::ConditionOp,
};

/// Returns the identifier held by `token`.
///
/// # Errors
/// `ExpectedName` if the token is missing or is not a plain word.
pub(in crate::interpreter::parser) fn expect_name(token: Option<&Token>,
                                                  line: usize)
                                                  -> ParseResult<String> {
    match token {
        Some(Token::Word(name)) => Ok(name.clone()),
        Some(other) => Err(ParseError::ExpectedName { found: other.to_string(),
                                                      line }),
        None => Err(ParseError::ExpectedName { found: "end of line".to_string(),
                                               line }),
    }
}

/// Returns the name of a variable being bound, rejecting the literal names
/// `true`, `false`, `none` and `null` in any case.
///
/// # Errors
/// `ExpectedName` as for [`expect_name`], `ReservedName` for a literal name.
pub(in crate::interpreter::parser) fn expect_binding(token: Option<&Token>,
                                                     line: usize)
                                                     -> ParseResult<String> {
    let name = expect_name(token, line)?;
    check_binding(&name, line)?;
    Ok(name)
}

/// Fails with `ReservedName` if `name` reads as a literal.
pub(in crate::interpreter::parser) fn check_binding(name: &str, line: usize) -> ParseResult<()> {
    if ["true", "false", "none", "null"].iter().any(|lit| name.eq_ignore_ascii_case(lit)) {
        return Err(ParseError::ReservedName { name: name.to_string(),
                                              line });
    }
    Ok(())
}

/// Splits a parameter token (`a` or `a/b/c`) into parameter names.
///
/// Every part must be an identifier and names must be unique.
pub(in crate::interpreter::parser) fn parse_params(token: &Token,
                                                   line: usize)
                                                   -> ParseResult<Vec<String>> {
    let text = match token {
        Token::Word(name) => {
            check_binding(name, line)?;
            return Ok(vec![name.clone()]);
        },
        Token::ParamList(list) => list,
        other => {
            return Err(ParseError::ExpectedName { found: other.to_string(),
                                                  line });
        },
    };

    let mut seen = HashSet::new();
    let mut params = Vec::new();

    for part in text.split('/') {
        if !is_identifier(part) {
            return Err(ParseError::ExpectedName { found: part.to_string(),
                                                  line });
        }
        check_binding(part, line)?;
        if !seen.insert(part) {
            return Err(ParseError::MalformedHeader { construct: "function",
                                                     details:
                                                         format!("parameter '{part}' is declared twice"),
                                                     line });
        }
        params.push(part.to_string());
    }

    Ok(params)
}

/// Parses the operator keyword of a `repeat` header.
///
/// # Errors
/// `UnknownOperator` if the token is not a condition keyword.
pub(in crate::interpreter::parser) fn parse_condition_op(token: &Token,
                                                         line: usize)
                                                         -> ParseResult<ConditionOp> {
    ConditionOp::from_keyword(token.as_str()).ok_or_else(|| {
                                                 ParseError::UnknownOperator { operator:
                                                                                   token.to_string(),
                                                                               line }
                                             })
}

/// Returns `true` if `text` is a valid identifier.
fn is_identifier(text: &str) -> bool {
    let mut chars = text.chars();
    chars.next()
         .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
    && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
