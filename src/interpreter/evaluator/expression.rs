use std::rc::Rc;

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::{
            binary::{ArithmeticOp, negate},
            core::{Environment, EvalResult},
            function::core::Builtin,
        },
        lexer::{Token, tokenize_line},
        value::core::Value,
    },
    util::num::surface_index_to_offset,
};

impl Environment {
    /// Evaluates a token sequence and returns the resulting value.
    ///
    /// This is the main entry point for expression evaluation. The rules are
    /// tried in order against the whole sequence:
    ///
    /// 1. A single boolean literal (`True`, `False`, `true`, `false`).
    /// 2. A list literal: an odd number of tokens with a comma at every second
    ///    position, such as `1 , 2 , 3`. Each element is a single value.
    /// 3. A left-to-right fold over terms separated by `add`/`+`,
    ///    `subtract`/`-`, `multiply`/`*` and `divide`/`/`, without precedence.
    ///
    /// A term is `NAME of TERM` (built-in application, right-recursive), a
    /// leading `-` negating the following term, or a single token. A lone
    /// term is just a fold with no operators. A `-` directly before an integer
    /// literal is read as one negative literal.

    ///
    /// # Parameters
    /// - `tokens`: Expression tokens.
    /// - `line`: Source line number for error reporting.
    ///
    /// # Returns
    /// The value, or a `RuntimeError`:
    /// - `UnknownVariable` / `UnknownBuiltin` for unresolved names.
    /// - `TypeError`, `IndexOutOfBounds`, `DivisionByZero`, `Overflow` from
    ///   operators, indexing and built-ins.
    /// - `Malformed` if the tokens do not form an expression.
    ///
    /// # Example
    /// ```
    /// use clu::interpreter::{evaluator::core::Environment, lexer::tokenize_line, value::core::Value};
    ///
    /// let env = Environment::new();
    ///
    /// let tokens = tokenize_line("sum of (1, 2, 3) multiply 2", 1).unwrap();
    /// assert_eq!(env.evaluate(&tokens, 1).unwrap(), Value::Integer(12));
    ///
    /// let tokens = tokenize_line("1 add 2 multiply 3", 1).unwrap();
    /// assert_eq!(env.evaluate(&tokens, 1).unwrap(), Value::Integer(9));
    /// ```
    pub fn evaluate(&self, tokens: &[Token], line: usize) -> EvalResult<Value> {
        match tokens {
            [] => Err(RuntimeError::Malformed { details: "empty expression".to_string(),
                                                line }),
            [single] if single.is_bool_literal() => Ok(Value::Boolean(single.as_str()
                                                                            .eq_ignore_ascii_case("true"))),
            _ if is_list_literal(tokens) => self.eval_list_literal(tokens, line),
            _ => self.eval_fold(tokens, line),
        }
    }

    /// Tokenizes `text` and evaluates it.
    ///
    /// Empty text evaluates to an empty list, which makes `()` the empty list
    /// literal.
    pub fn evaluate_text(&self, text: &str, line: usize) -> EvalResult<Value> {
        let tokens = retokenize(text, line)?;
        if tokens.is_empty() {
            return Ok(Value::List(Rc::new(Vec::new())));
        }
        self.evaluate(&tokens, line)
    }

    /// Evaluates `1 , 2 , x` into a list, element by element.
    fn eval_list_literal(&self, tokens: &[Token], line: usize) -> EvalResult<Value> {
        let items = tokens.iter()
                          .step_by(2)
                          .map(|token| self.eval_single(token, line))
                          .collect::<EvalResult<Vec<_>>>()?;
        Ok(Value::List(Rc::new(items)))
    }

    /// Folds terms and operators from left to right.
    fn eval_fold(&self, tokens: &[Token], line: usize) -> EvalResult<Value> {
        let (mut acc, mut pos) = self.eval_term(tokens, 0, line)?;

        while let Some(op_token) = tokens.get(pos) {
            let op = ArithmeticOp::from_token(op_token).ok_or_else(|| {
                         RuntimeError::Malformed { details: format!("expected an operator, found '{op_token}'"),
                                                   line }
                     })?;

            if pos + 1 >= tokens.len() {
                return Err(RuntimeError::Malformed { details: format!("'{op}' is missing its right operand"),
                                                     line });
            }

            let (right, next) = self.eval_term(tokens, pos + 1, line)?;
            acc = op.apply(&acc, &right, line)?;
            pos = next;
        }

        Ok(acc)
    }

    /// Evaluates the term starting at `pos`, returning its value and the
    /// position after it.
    fn eval_term(&self, tokens: &[Token], pos: usize, line: usize) -> EvalResult<(Value, usize)> {
        let Some(token) = tokens.get(pos) else {
            return Err(RuntimeError::Malformed { details: "expected a value".to_string(),
                                                 line });
        };

        if token.is("-") {
            if let Some(Token::Integer(text)) = tokens.get(pos + 1) {
                let value = format!("-{text}").parse()
                                              .map_err(|_| RuntimeError::LiteralTooLarge { line })?;
                return Ok((Value::Integer(value), pos + 2));
            }

            let (value, next) = self.eval_term(tokens, pos + 1, line)?;
            return Ok((negate(&value, line)?, next));
        }

        if let Some(name) = token.as_word()
           && tokens.get(pos + 1).is_some_and(|t| t.is("of"))
        {
            let builtin =
                Builtin::from_name(name).ok_or_else(|| RuntimeError::UnknownBuiltin { name: name.to_string(),
                                                                                       line })?;
            let (arg, next) = self.eval_term(tokens, pos + 2, line)?;
            return Ok((builtin.apply(arg, line)?, next));
        }

        Ok((self.eval_single(token, line)?, pos + 1))
    }

    /// Resolves a single token: a literal, a group, a call form, an indexed
    /// name, or a variable.
    fn eval_single(&self, token: &Token, line: usize) -> EvalResult<Value> {
        match token {
            Token::Float(text) => {
                text.parse()
                    .map(Value::Float)
                    .map_err(|_| RuntimeError::Malformed { details: format!("invalid float '{text}'"),
                                                           line })
            },
            Token::Integer(text) => {
                text.parse()
                    .map(Value::Integer)
                    .map_err(|_| RuntimeError::LiteralTooLarge { line })
            },
            Token::Text(_) => Ok(Value::from(token.unquoted().unwrap_or_default())),
            Token::Group(text) => self.evaluate_text(&text[1..text.len() - 1], line),
            Token::Call(text) => self.eval_call_form(text, line),
            Token::Indexed(text) => self.eval_index(text, line),
            Token::Word(name) => self.eval_name(name, line),
            other => Err(RuntimeError::Malformed { details: format!("unexpected '{other}'"),
                                                   line }),
        }
    }

    /// Resolves a bare name: a variable, a boolean literal, or the absent
    /// marker.
    fn eval_name(&self, name: &str, line: usize) -> EvalResult<Value> {
        if let Some(value) = self.get(name) {
            return Ok(value.clone());
        }

        match name.to_ascii_lowercase().as_str() {
            "true" => Ok(Value::Boolean(true)),
            "false" => Ok(Value::Boolean(false)),
            "none" | "null" => Ok(Value::Absent),
            _ => Err(RuntimeError::UnknownVariable { name: name.to_string(),
                                                     line }),
        }
    }

    /// Evaluates `name(expr)` as `name of (expr)`.
    fn eval_call_form(&self, text: &str, line: usize) -> EvalResult<Value> {
        let (name, rest) = split_bracketed(text, '(');
        let builtin = Builtin::from_name(name).ok_or_else(|| {
                                                   RuntimeError::UnknownBuiltin { name: name.to_string(),
                                                                                  line }
                                               })?;
        let arg = self.evaluate_text(rest, line)?;
        builtin.apply(arg, line)
    }

    /// Evaluates `name[index]` with a 1-based index.
    ///
    /// Lists yield the element; text yields a one-character text.
    fn eval_index(&self, text: &str, line: usize) -> EvalResult<Value> {
        let (name, index_text) = split_bracketed(text, '[');
        let base = self.lookup(name, line)?;

        let index = match self.evaluate_text(index_text, line)? {
            Value::Integer(index) => index,
            other => {
                return Err(RuntimeError::TypeError { details: format!("index must be an int, found {}",
                                                                      other.type_name()),
                                                     line });
            },
        };

        match base {
            Value::List(items) => {
                let offset = surface_index_to_offset(index, items.len(), line)?;
                Ok(items[offset].clone())
            },
            Value::Text(s) => {
                let chars = s.chars().collect::<Vec<_>>();
                let offset = surface_index_to_offset(index, chars.len(), line)?;
                Ok(Value::Text(chars[offset].to_string()))
            },
            other => Err(RuntimeError::TypeError { details: format!("cannot index {}",
                                                                    other.type_name()),
                                                   line }),
        }
    }
}

/// Tokenizes an expression fragment at run time.
///
/// # Errors
/// `Malformed` if the fragment contains unrecognized text.
pub fn retokenize(text: &str, line: usize) -> EvalResult<Vec<Token>> {
    tokenize_line(text, line).map_err(|e| RuntimeError::Malformed { details: e.to_string(),
                                                                    line })
}

/// Returns `true` for `a , b , c`: odd length, commas exactly at the odd
/// positions.
fn is_list_literal(tokens: &[Token]) -> bool {
    tokens.len() >= 3
    && tokens.len() % 2 == 1
    && tokens.iter()
             .enumerate()
             .all(|(i, token)| token.is(",") == (i % 2 == 1))
}

/// Splits `name(inner)` or `name[inner]` into `name` and `inner`.
fn split_bracketed(text: &str, open: char) -> (&str, &str) {
    match text.find(open) {
        Some(at) => (&text[..at], &text[at + 1..text.len() - 1]),
        None => (text, ""),
    }
}
