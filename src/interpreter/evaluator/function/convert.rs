use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
    util::num::f64_to_i64_truncating,
};

/// Returns the value as text, formatted the way `output` prints it.
///
/// ```
/// use clu::interpreter::{evaluator::function::convert::to_str, value::core::Value};
///
/// let list = Value::from(vec![Value::Integer(1), Value::from("a"), Value::Float(2.0)]);
///
/// assert_eq!(to_str(&list), Value::from("[1, 'a', 2.0]"));
/// assert_eq!(to_str(&Value::Boolean(true)), Value::from("True"));
/// ```
#[must_use]
pub fn to_str(arg: &Value) -> Value {
    Value::Text(arg.to_string())
}

/// Converts a value to an integer.
///
/// Floats truncate toward zero, booleans become `0` or `1`, and text is
/// parsed after trimming surrounding whitespace.
///
/// # Errors
/// - `TypeError` for text that is not an integer, lists, the absent marker,
///   and non-finite floats.
/// - `Overflow` for floats outside the integer range.
pub fn to_int(arg: &Value, line: usize) -> EvalResult<Value> {
    match arg {
        Value::Integer(n) => Ok(Value::Integer(*n)),
        Value::Float(r) => Ok(Value::Integer(f64_to_i64_truncating(*r, line)?)),
        Value::Boolean(b) => Ok(Value::Integer(i64::from(*b))),
        Value::Text(s) => s.trim()
                           .parse()
                           .map(Value::Integer)
                           .map_err(|_| RuntimeError::TypeError { details: format!("cannot convert '{s}' to int"),
                                                                  line }),
        other => Err(cannot_convert(other, "int", line)),
    }
}

/// Converts a value to a float.
///
/// Integers widen, booleans become `0.0` or `1.0`, and text is parsed after
/// trimming surrounding whitespace.
///
/// # Errors
/// `TypeError` for text that is not a number, lists, and the absent marker.
/// `LiteralTooLarge` for integers not exactly representable as floats.
pub fn to_float(arg: &Value, line: usize) -> EvalResult<Value> {
    match arg {
        Value::Integer(_) | Value::Float(_) => Ok(Value::Float(arg.as_f64(line)?)),
        Value::Boolean(b) => Ok(Value::Float(f64::from(u8::from(*b)))),
        Value::Text(s) => s.trim()
                           .parse()
                           .map(Value::Float)
                           .map_err(|_| RuntimeError::TypeError { details: format!("cannot convert '{s}' to float"),
                                                                  line }),
        other => Err(cannot_convert(other, "float", line)),
    }
}

/// Returns the truthiness of a value as a boolean.
#[must_use]
pub fn to_bool(arg: &Value) -> Value {
    Value::Boolean(arg.is_truthy())
}

/// Returns the name of the value's type as text.
#[must_use]
pub fn type_of(arg: &Value) -> Value {
    Value::from(arg.type_name())
}

/// Returns `True` if the value is a boolean.
#[must_use]
pub fn is_bool(arg: &Value) -> Value {
    Value::Boolean(matches!(arg, Value::Boolean(_)))
}

fn cannot_convert(value: &Value, target: &str, line: usize) -> RuntimeError {
    RuntimeError::TypeError { details: format!("cannot convert {} to {target}", value.type_name()),
                              line }
}
