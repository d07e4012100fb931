use std::rc::Rc;

use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, lexer::Token, value::core::Value},
    util::num::floor_div,
};

/// An arithmetic operator of the left-to-right expression fold.
///
/// Every operator has a word form and a symbol form with identical meaning.
/// All four share one precedence level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArithmeticOp {
    /// `add` or `+`
    Add,
    /// `subtract` or `-`
    Subtract,
    /// `multiply` or `*`
    Multiply,
    /// `divide` or `/`
    Divide,
}

impl ArithmeticOp {
    /// Recognizes an operator token.
    ///
    /// ```
    /// use clu::interpreter::{evaluator::binary::ArithmeticOp, lexer::Token};
    ///
    /// assert_eq!(ArithmeticOp::from_token(&Token::Word("add".into())), Some(ArithmeticOp::Add));
    /// assert_eq!(ArithmeticOp::from_token(&Token::Symbol("/".into())), Some(ArithmeticOp::Divide));
    /// assert_eq!(ArithmeticOp::from_token(&Token::Word("plus".into())), None);
    /// ```
    #[must_use]
    pub fn from_token(token: &Token) -> Option<Self> {
        match token.as_str() {
            "add" | "+" => Some(Self::Add),
            "subtract" | "-" => Some(Self::Subtract),
            "multiply" | "*" => Some(Self::Multiply),
            "divide" | "/" => Some(Self::Divide),
            _ => None,
        }
    }

    /// Applies the operator to two values.
    ///
    /// - Two integers use checked integer arithmetic; `divide` floors.
    /// - An integer and a float, or two floats, use float arithmetic.
    /// - `add` with a text operand concatenates the `str` forms of both sides.
    /// - `add` of two lists concatenates them.
    ///
    /// # Errors
    /// - `Overflow` if integer arithmetic overflows.
    /// - `DivisionByZero` if the right operand of `divide` is zero.
    /// - `TypeError` for any other combination of operand types.
    pub fn apply(self, left: &Value, right: &Value, line: usize) -> EvalResult<Value> {
        match self {
            Self::Add => add(left, right, line),
            Self::Subtract => {
                numeric(left, right, line, "subtract", i64::checked_sub, |a, b| a - b)
            },
            Self::Multiply => {
                numeric(left, right, line, "multiply", i64::checked_mul, |a, b| a * b)
            },
            Self::Divide => divide(left, right, line),
        }
    }
}

impl std::fmt::Display for ArithmeticOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Add => "add",
            Self::Subtract => "subtract",
            Self::Multiply => "multiply",
            Self::Divide => "divide",
        };
        write!(f, "{s}")
    }
}

/// Adds, concatenates text, or joins lists.
fn add(left: &Value, right: &Value, line: usize) -> EvalResult<Value> {
    match (left, right) {
        (Value::Text(_), _) | (_, Value::Text(_)) => Ok(Value::Text(format!("{left}{right}"))),
        (Value::List(a), Value::List(b)) => {
            let mut joined = Vec::with_capacity(a.len() + b.len());
            joined.extend(a.iter().cloned());
            joined.extend(b.iter().cloned());
            Ok(Value::List(Rc::new(joined)))
        },
        _ => numeric(left, right, line, "add", i64::checked_add, |a, b| a + b),
    }
}

/// Applies an arithmetic operation to two numbers.
///
/// Integers use `int_op`, whose `None` result is reported as overflow. Any
/// float operand promotes both sides and uses `float_op`.
fn numeric(left: &Value,
           right: &Value,
           line: usize,
           op_name: &str,
           int_op: fn(i64, i64) -> Option<i64>,
           float_op: fn(f64, f64) -> f64)
           -> EvalResult<Value> {
    match (left, right) {
        (Value::Integer(a), Value::Integer(b)) => {
            int_op(*a, *b).map(Value::Integer)
                          .ok_or(RuntimeError::Overflow { line })
        },
        _ if left.is_numeric() && right.is_numeric() => {
            Ok(Value::Float(float_op(left.as_f64(line)?, right.as_f64(line)?)))
        },
        _ => Err(unsupported(op_name, left, right, line)),
    }
}

/// Divides two numbers: floor division for integers, true division otherwise.
fn divide(left: &Value, right: &Value, line: usize) -> EvalResult<Value> {
    match (left, right) {
        (Value::Integer(a), Value::Integer(b)) => Ok(Value::Integer(floor_div(*a, *b, line)?)),
        _ if left.is_numeric() && right.is_numeric() => {
            let divisor = right.as_f64(line)?;
            if divisor == 0.0 {
                return Err(RuntimeError::DivisionByZero { line });
            }
            Ok(Value::Float(left.as_f64(line)? / divisor))
        },
        _ => Err(unsupported("divide", left, right, line)),
    }
}

fn unsupported(op_name: &str, left: &Value, right: &Value, line: usize) -> RuntimeError {
    RuntimeError::TypeError { details: format!("cannot {op_name} {} and {}",
                                               left.type_name(),
                                               right.type_name()),
                              line }
}

/// Negates a number.
///
/// # Errors
/// `Overflow` for `-i64::MIN`, `TypeError` for anything but a number.
pub fn negate(value: &Value, line: usize) -> EvalResult<Value> {
    match value {
        Value::Integer(n) => n.checked_neg()
                              .map(Value::Integer)
                              .ok_or(RuntimeError::Overflow { line }),
        Value::Float(r) => Ok(Value::Float(-r)),
        other => Err(RuntimeError::TypeError { details: format!("cannot negate {}",
                                                                other.type_name()),
                                               line }),
    }
}

