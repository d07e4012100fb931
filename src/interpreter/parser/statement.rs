use crate::{
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenizedLine, join_tokens},
        parser::{
            block::parse_block,
            core::ParseResult,
            utils::{check_binding, expect_binding, expect_name, parse_condition_op},
        },
    },
    program::{Condition, ConditionOp, Instruction, InstructionKind},
};

/// Parses a single line into an instruction.
///
/// Dispatches on the first token:
/// - `var`: assignment.
/// - `output`: output.
/// - `if`: one of the three conditional forms.
/// - `otherwise`, `end`: branch markers.
/// - `repeat`, `foreach`: loops, which consume their body lines from `lines`.
///
/// Any other line is a function call, except for the two assignment
/// shorthands `NAME is EXPR` and `NAME add EXPR`.
///
/// # Parameters
/// - `current`: The line to parse.
/// - `lines`: Line iterator positioned after `current`, used by block
///   statements.
///
/// # Returns
/// The parsed [`Instruction`].
pub fn parse_statement<'a, I>(current: &TokenizedLine, lines: &mut I) -> ParseResult<Instruction>
    where I: Iterator<Item = &'a TokenizedLine>
{
    let line = current.line;
    let tokens = current.tokens.as_slice();

    let Some(first) = tokens.first() else {
        return Err(ParseError::ExpectedName { found: "empty line".to_string(),
                                              line });
    };

    let kind = match first.as_str() {
        "var" => parse_assignment(&tokens[1..], line)?,
        "output" => {
            if tokens.len() < 2 {
                return Err(ParseError::MissingExpression { statement: "output",
                                                           line });
            }
            InstructionKind::Output { expr: join_tokens(&tokens[1..]) }
        },
        "if" => parse_if(tokens, line)?,
        "otherwise" => InstructionKind::Otherwise,
        "end" => InstructionKind::End,
        "repeat" => parse_repeat(tokens, line, lines)?,
        "foreach" => parse_foreach(tokens, line, lines)?,
        "function" => return Err(ParseError::NestedFunction { line }),
        _ => parse_call(tokens, line)?,
    };

    Ok(Instruction::new(kind, line))
}

/// Parses `NAME is EXPR`, the part of an assignment after `var`.
fn parse_assignment(tokens: &[Token], line: usize) -> ParseResult<InstructionKind> {
    let Some(is_at) = tokens.iter().position(|t| t.is("is")) else {
        return Err(ParseError::MissingKeyword { keyword: "is",
                                                line });
    };

    if is_at != 1 {
        return Err(ParseError::MalformedHeader { construct: "var",
                                                 details:
                                                     "expected 'var NAME is EXPRESSION'".to_string(),
                                                 line });
    }

    let name = expect_binding(tokens.first(), line)?;
    let expr = tokens[is_at + 1..].to_vec();

    if expr.is_empty() {
        return Err(ParseError::MissingExpression { statement: "var",
                                                   line });
    }

    Ok(InstructionKind::Assign { name, expr })
}

/// Parses an `if` line.
///
/// Three shapes are tried in order:
/// 1. `if LEFT OP RIGHT` with a comparison keyword as `OP`.
/// 2. A boolean expression: the condition uses `and`, `or` or `not`, or
///    starts with a boolean literal. The remainder is kept as text.
/// 3. `if FLAG`.
///
/// # Errors
/// `MalformedHeader` if the line matches none of the shapes.
fn parse_if(tokens: &[Token], line: usize) -> ParseResult<InstructionKind> {
    if tokens.len() == 4
       && let Some(op) = ConditionOp::from_keyword(tokens[2].as_str())
       && op.is_comparison()
    {
        return Ok(InstructionKind::If(Condition { left: vec![tokens[1].clone()],
                                                  op,
                                                  right: vec![tokens[3].clone()] }));
    }

    let rest = &tokens[1..];

    let is_boolean_expression = rest.iter().any(|t| t.is("and") || t.is("or") || t.is("not"))
                                || rest.first().is_some_and(Token::is_bool_literal);
    if is_boolean_expression {
        return Ok(InstructionKind::IfComplex { condition: join_tokens(rest) });
    }

    if let [token] = rest {
        return Ok(InstructionKind::IfBool { token: token.clone() });
    }

    Err(ParseError::MalformedHeader { construct: "if",
                                      details: format!("cannot read condition '{}'",
                                                       join_tokens(rest)),
                                      line })
}

/// Parses a `repeat` header and its body.
///
/// Syntax: `repeat VAR OP BOUND...`, where everything after the operator is
/// the bound expression.
fn parse_repeat<'a, I>(tokens: &[Token], line: usize, lines: &mut I) -> ParseResult<InstructionKind>
    where I: Iterator<Item = &'a TokenizedLine>
{
    if tokens.len() < 4 {
        return Err(ParseError::MalformedHeader { construct: "repeat",
                                                 details:
                                                     "expected 'repeat VAR OPERATOR BOUND'".to_string(),
                                                 line });
    }

    let op = parse_condition_op(&tokens[2], line)?;
    let condition = Condition { left: vec![tokens[1].clone()],
                                op,
                                right: tokens[3..].to_vec() };

    let body = parse_block(lines, "repeat", line)?;

    Ok(InstructionKind::Repeat { condition, body })
}

/// Parses a `foreach VAR in LIST` header and its body.
fn parse_foreach<'a, I>(tokens: &[Token],
                        line: usize,
                        lines: &mut I)
                        -> ParseResult<InstructionKind>
    where I: Iterator<Item = &'a TokenizedLine>
{
    if tokens.len() != 4 || !tokens[2].is("in") {
        return Err(ParseError::MalformedHeader { construct: "foreach",
                                                 details:
                                                     "expected 'foreach VAR in LIST'".to_string(),
                                                 line });
    }

    let var = expect_binding(tokens.get(1), line)?;
    let list = expect_name(tokens.get(3), line)?;
    let body = parse_block(lines, "foreach", line)?;

    Ok(InstructionKind::Foreach { var, list, body })
}

/// Parses a line with no statement keyword.
///
/// `NAME is EXPR` and `NAME add EXPR` are assignments; anything else is a call
/// of the function `NAME`, with one argument per remaining token. Bare commas
/// between arguments are dropped.
fn parse_call(tokens: &[Token], line: usize) -> ParseResult<InstructionKind> {
    let name = expect_name(tokens.first(), line)?;

    match tokens {
        [_, is, expr @ ..] if is.is("is") && !expr.is_empty() => {
            check_binding(&name, line)?;
            Ok(InstructionKind::Assign { name,
                                         expr: expr.to_vec() })
        },
        [_, is] if is.is("is") => Err(ParseError::MissingExpression { statement: "is",
                                                                     line }),
        [_, add, _] if add.is("add") => {
            check_binding(&name, line)?;
            Ok(InstructionKind::Assign { name,
                                         expr: tokens.to_vec() })
        },
        _ => {
            let args = tokens[1..].iter().filter(|t| !t.is(",")).cloned().collect();
            Ok(InstructionKind::Call { name, args })
        },
    }
}
