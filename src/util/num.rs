use crate::{error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// Largest integer value exactly representable as an `f64` (`2^53 - 1`).
pub const MAX_SAFE_U64_INT: u64 = 9_007_199_254_740_991;

/// Safely converts an `i64` to `f64` if and only if it is exactly
/// representable.
///
/// ## Errors
/// Returns `Err(error)` if the value exceeds `MAX_SAFE_U64_INT` in absolute
/// value.
///
/// ## Example
/// ```
/// use clu::util::num::{MAX_SAFE_U64_INT, i64_to_f64_checked};
///
/// let result = i64_to_f64_checked(42, "too big!");
/// assert_eq!(result.unwrap(), 42.0);
///
/// let big = MAX_SAFE_U64_INT as i64 + 1;
/// assert!(i64_to_f64_checked(big, "too big!").is_err());
/// ```
#[allow(clippy::cast_precision_loss)]
pub fn i64_to_f64_checked<E>(value: i64, error: E) -> Result<f64, E> {
    if value.unsigned_abs() > MAX_SAFE_U64_INT {
        return Err(error);
    }
    Ok(value as f64)
}

/// Converts an `f64` to `i64` by truncating toward zero, as `int of` does.
///
/// ## Errors
/// - `TypeError` for NaN or infinite values.
/// - `Overflow` if the truncated value is outside the `i64` range.
///
/// ## Example
/// ```
/// use clu::{error::RuntimeError, util::num::f64_to_i64_truncating};
///
/// assert_eq!(f64_to_i64_truncating(-2.9, 1).unwrap(), -2);
///
/// let err = f64_to_i64_truncating(1e20, 4).unwrap_err();
/// assert!(matches!(err, RuntimeError::Overflow { line: 4 }));
/// ```
#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_precision_loss)]
pub fn f64_to_i64_truncating(value: f64, line: usize) -> EvalResult<i64> {
    if !value.is_finite() {
        return Err(RuntimeError::TypeError { details: format!("cannot convert {value} to an integer"),
                                             line });
    }
    let truncated = value.trunc();
    // i64::MAX as f64 rounds up to 2^63, which is itself out of range.
    if truncated < i64::MIN as f64 || truncated >= i64::MAX as f64 {
        return Err(RuntimeError::Overflow { line });
    }
    Ok(truncated as i64)
}

/// Integer division rounding toward negative infinity.
///
/// ## Errors
/// - `DivisionByZero` if `divisor` is zero.
/// - `Overflow` for `i64::MIN / -1`.
///
/// ## Example
/// ```
/// use clu::util::num::floor_div;
///
/// assert_eq!(floor_div(7, 2, 1).unwrap(), 3);
/// assert_eq!(floor_div(-7, 2, 1).unwrap(), -4);
/// assert!(floor_div(1, 0, 1).is_err());
/// ```
pub fn floor_div(dividend: i64, divisor: i64, line: usize) -> EvalResult<i64> {
    if divisor == 0 {
        return Err(RuntimeError::DivisionByZero { line });
    }
    let quotient = dividend.checked_div(divisor)
                           .ok_or(RuntimeError::Overflow { line })?;
    if dividend % divisor != 0 && ((dividend < 0) != (divisor < 0)) {
        Ok(quotient - 1)
    } else {
        Ok(quotient)
    }
}

/// Translates a 1-based language index into a 0-based offset.
///
/// ## Errors
/// `IndexOutOfBounds` unless `1 <= index <= len`.
///
/// ## Example
/// ```
/// use clu::util::num::surface_index_to_offset;
///
/// assert_eq!(surface_index_to_offset(1, 3, 1).unwrap(), 0);
/// assert!(surface_index_to_offset(0, 3, 1).is_err());
/// assert!(surface_index_to_offset(4, 3, 1).is_err());
/// ```
pub fn surface_index_to_offset(index: i64, len: usize, line: usize) -> EvalResult<usize> {
    let out_of_bounds = RuntimeError::IndexOutOfBounds { index, len, line };

    let offset = usize::try_from(index).ok()
                                       .and_then(|i| i.checked_sub(1))
                                       .ok_or_else(|| out_of_bounds.clone())?;
    if offset >= len {
        return Err(out_of_bounds);
    }
    Ok(offset)
}
