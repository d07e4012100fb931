use std::cmp::Ordering;

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

/// Returns the elements of a list argument whose elements are all numbers.
fn numeric_items(builtin: Builtin, arg: &Value, line: usize) -> EvalResult<&[Value]> {
    let items = expect_list(builtin, arg, line)?;

    if let Some(bad) = items.iter().find(|v| !v.is_numeric()) {
        return Err(RuntimeError::TypeError { details: format!("{builtin} needs numbers, found {}",
                                                              bad.type_name()),
                                             line });
    }

    Ok(items)
}

/// Like [`numeric_items`], but the list must also be non-empty.
fn non_empty_numeric_items(builtin: Builtin, arg: &Value, line: usize) -> EvalResult<&[Value]> {
    let items = numeric_items(builtin, arg, line)?;

    if items.is_empty() {
        return Err(RuntimeError::TypeError { details: format!("{builtin} of an empty list"),
                                             line });
    }

    Ok(items)
}

/// Adds up a list of numbers.
///
/// The result is an integer when every element is one, otherwise a float.
/// The sum of an empty list is `0`.
///
/// # Errors
/// - `TypeError` for a non-list or a non-numeric element.
/// - `Overflow` if an integer sum overflows.
pub fn sum(arg: &Value, line: usize) -> EvalResult<Value> {
    let items = numeric_items(Builtin::Sum, arg, line)?;

    if items.iter().all(Value::is_integer) {
        let mut total = 0i64;
        for item in items {
            if let Value::Integer(n) = item {
                total = total.checked_add(*n).ok_or(RuntimeError::Overflow { line })?;
            }
        }
        return Ok(Value::Integer(total));
    }

    let total = items.iter()
                     .map(|item| item.as_f64(line))
                     .sum::<EvalResult<f64>>()?;
    Ok(Value::Float(total))
}

/// Returns the largest element of a non-empty list of numbers.
///
/// # Errors
/// `TypeError` for a non-list, an empty list, or a non-numeric element.
pub fn max(arg: &Value, line: usize) -> EvalResult<Value> {
    extreme(Builtin::Max, arg, line, Ordering::Greater)
}

/// Returns the smallest element of a non-empty list of numbers.
///
/// # Errors
/// `TypeError` for a non-list, an empty list, or a non-numeric element.
pub fn min(arg: &Value, line: usize) -> EvalResult<Value> {
    extreme(Builtin::Min, arg, line, Ordering::Less)
}

/// Keeps the first element that no later element beats in direction `wanted`.
fn extreme(builtin: Builtin, arg: &Value, line: usize, wanted: Ordering) -> EvalResult<Value> {
    let items = non_empty_numeric_items(builtin, arg, line)?;

    let mut best = &items[0];
    for item in &items[1..] {
        if item.compare(best, line)? == wanted {
            best = item;
        }
    }

    Ok(best.clone())
}

/// Returns the mean of a non-empty list of numbers, always as a float.
///
/// # Errors
/// `TypeError` for a non-list, an empty list, or a non-numeric element.
#[allow(clippy::cast_precision_loss)]
pub fn average(arg: &Value, line: usize) -> EvalResult<Value> {
    let items = non_empty_numeric_items(Builtin::Average, arg, line)?;

    let total = items.iter()
                     .map(|item| item.as_f64(line))
                     .sum::<EvalResult<f64>>()?;

    Ok(Value::Float(total / items.len() as f64))
}
