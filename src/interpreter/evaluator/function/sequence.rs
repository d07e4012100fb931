use std::rc::Rc;

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::EvalResult,
            function::core::{Builtin, expect_list},
        },
        value::core::Value,
    },
};

/// Returns the number of elements of a list or characters of a text.
///
/// # Errors
/// `TypeError` for any other value.
pub fn len(arg: &Value, line: usize) -> EvalResult<Value> {
    let count = match arg {
        Value::List(items) => items.len(),
        Value::Text(s) => s.chars().count(),
        other => {
            return Err(RuntimeError::TypeError { details: format!("len needs a list or str, found {}",
                                                                  other.type_name()),
                                                 line });
        },
    };

    i64::try_from(count).map(Value::Integer)
                        .map_err(|_| RuntimeError::Overflow { line })
}

/// Sorts a list, or the characters of a text into a list of one-character
/// texts.
///
/// # Errors
/// `TypeError` for other values, or if two elements cannot be compared.
pub fn sorted(arg: &Value, line: usize) -> EvalResult<Value> {
    let items = match arg {
        Value::List(items) => items.to_vec(),
        Value::Text(s) => s.chars().map(|c| Value::Text(c.to_string())).collect(),
        other => {
            return Err(RuntimeError::TypeError { details: format!("sorted needs a list or str, found {}",
                                                                  other.type_name()),
                                                 line });
        },
    };

    merge_sort(items, line).map(|items| Value::List(Rc::new(items)))
}

/// Stable merge sort that stops at the first pair of values that cannot be
/// compared.
fn merge_sort(mut items: Vec<Value>, line: usize) -> EvalResult<Vec<Value>> {
    if items.len() <= 1 {
        return Ok(items);
    }

    let right = items.split_off(items.len() / 2);
    let left = merge_sort(items, line)?;
    let right = merge_sort(right, line)?;

    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();

    while let (Some(l), Some(r)) = (left.peek(), right.peek()) {
        if r.compare(l, line)?.is_lt() {
            merged.extend(right.next());
        } else {
            merged.extend(left.next());
        }
    }

    merged.extend(left);
    merged.extend(right);
    Ok(merged)
}

/// Reverses a list, or the characters of a text.
///
/// # Errors
/// `TypeError` for any other value.
pub fn reversed(arg: &Value, line: usize) -> EvalResult<Value> {
    match arg {
        Value::List(items) => Ok(Value::List(Rc::new(items.iter().rev().cloned().collect()))),
        Value::Text(s) => Ok(Value::Text(s.chars().rev().collect())),
        other => Err(RuntimeError::TypeError { details: format!("reversed needs a list or str, found {}",
                                                                other.type_name()),
                                               line }),
    }
}

/// Returns the first element of a non-empty list.
///
/// # Errors
/// `TypeError` for a non-list, `IndexOutOfBounds` for an empty list.
pub fn first(arg: &Value, line: usize) -> EvalResult<Value> {
    let items = expect_list(Builtin::First, arg, line)?;
    items.first()
         .cloned()
         .ok_or(RuntimeError::IndexOutOfBounds { index: 1,
                                                 len: 0,
                                                 line })
}

/// Returns the last element of a non-empty list.
///
/// # Errors
/// `TypeError` for a non-list, `IndexOutOfBounds` for an empty list.
pub fn last(arg: &Value, line: usize) -> EvalResult<Value> {
    let items = expect_list(Builtin::Last, arg, line)?;
    items.last()
         .cloned()
         .ok_or(RuntimeError::IndexOutOfBounds { index: -1,
                                                 len: 0,
                                                 line })
}

/// Returns `True` if every element is truthy. `True` for an empty list.
///
/// # Errors
/// `TypeError` for a non-list.
pub fn all(arg: &Value, line: usize) -> EvalResult<Value> {
    let items = expect_list(Builtin::All, arg, line)?;
    Ok(Value::Boolean(items.iter().all(Value::is_truthy)))
}

/// Returns `True` if any element is truthy. `False` for an empty list.
///
/// # Errors
/// `TypeError` for a non-list.
pub fn any(arg: &Value, line: usize) -> EvalResult<Value> {
    let items = expect_list(Builtin::Any, arg, line)?;
    Ok(Value::Boolean(items.iter().any(Value::is_truthy)))
}

/// Returns `True` for an empty list, an empty text, or the absent marker.
///
/// # Errors
/// `TypeError` for numbers and booleans.
pub fn empty(arg: &Value, line: usize) -> EvalResult<Value> {
    match arg {
        Value::List(items) => Ok(Value::Boolean(items.is_empty())),
        Value::Text(s) => Ok(Value::Boolean(s.is_empty())),
        Value::Absent => Ok(Value::Boolean(true)),
        other => Err(RuntimeError::TypeError { details: format!("empty needs a list or str, found {}",
                                                                other.type_name()),
                                               line }),
    }
}

/// Tests membership.
///
/// A list contains `item` if any element equals it; elements of another type
/// never match. A text contains `item` if `item` is a text that occurs in it.
///
/// # Errors
/// `TypeError` if the container is neither a list nor a text, or if a text
/// is searched for a non-text item.
pub fn contains(container: &Value, item: &Value, line: usize) -> EvalResult<Value> {
    match (container, item) {
        (Value::List(items), _) => Ok(Value::Boolean(items.iter().any(|v| v.loosely_equals(item)))),
        (Value::Text(haystack), Value::Text(needle)) => {
            Ok(Value::Boolean(haystack.contains(needle.as_str())))
        },
        (Value::Text(_), other) => {
            Err(RuntimeError::TypeError { details: format!("cannot search a str for {}",
                                                           other.type_name()),
                                          line })
        },
        (other, _) => Err(RuntimeError::TypeError { details: format!("contains needs a list or str, found {}",
                                                                     other.type_name()),
                                                    line }),
    }
}
