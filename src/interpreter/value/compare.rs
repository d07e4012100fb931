use std::cmp::Ordering;

use ordered_float::OrderedFloat;

use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

impl Value {
    /// Orders two values.
    ///
    /// - Integers compare exactly; any float operand compares both sides as
    ///   `OrderedFloat<f64>`.
    /// - Text compares lexicographically, booleans with `False < True`.
    /// - Lists compare element by element, then by length.
    ///
    /// # Errors
    /// `TypeError` for any other pairing, including a boolean against a
    /// number and anything against the absent marker.
    ///
    /// # Example
    /// ```
    /// use std::cmp::Ordering;
    ///
    /// use clu::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::Integer(2).compare(&Value::Float(2.5), 1).unwrap(), Ordering::Less);
    /// assert!(Value::Integer(2).compare(&Value::from("2"), 1).is_err());
    /// ```
    pub fn compare(&self, other: &Self, line: usize) -> EvalResult<Ordering> {
        match (self, other) {
            (Self::Integer(a), Self::Integer(b)) => Ok(a.cmp(b)),
            (Self::Integer(_) | Self::Float(_), Self::Integer(_) | Self::Float(_)) => {
                let left = OrderedFloat(self.as_f64(line)?);
                let right = OrderedFloat(other.as_f64(line)?);
                Ok(left.cmp(&right))
            },
            (Self::Text(a), Self::Text(b)) => Ok(a.cmp(b)),
            (Self::Boolean(a), Self::Boolean(b)) => Ok(a.cmp(b)),
            (Self::List(a), Self::List(b)) => {
                for (left, right) in a.iter().zip(b.iter()) {
                    let ordering = left.compare(right, line)?;
                    if ordering != Ordering::Equal {
                        return Ok(ordering);
                    }
                }
                Ok(a.len().cmp(&b.len()))
            },
            _ => Err(RuntimeError::TypeError { details: format!("cannot compare {} with {}",
                                                                self.type_name(),
                                                                other.type_name()),
                                               line }),
        }
    }

    /// Tests two values for equality.
    ///
    /// The absent marker may be compared with anything and only equals
    /// itself. Lists of different lengths are unequal; otherwise equality
    /// follows [`Value::compare`].
    ///
    /// # Errors
    /// `TypeError` when the shapes cannot be compared.
    pub fn equals(&self, other: &Self, line: usize) -> EvalResult<bool> {
        match (self, other) {
            (Self::Absent, _) | (_, Self::Absent) => {
                Ok(matches!((self, other), (Self::Absent, Self::Absent)))
            },
            (Self::List(a), Self::List(b)) => {
                if a.len() != b.len() {
                    return Ok(false);
                }
                for (left, right) in a.iter().zip(b.iter()) {
                    if !left.equals(right, line)? {
                        return Ok(false);
                    }
                }
                Ok(true)
            },
            _ => Ok(self.compare(other, line)? == Ordering::Equal),
        }
    }

    /// Equality that treats incomparable shapes as unequal instead of failing.
    ///
    /// Used for membership tests, where a list may mix types.
    #[must_use]
    pub fn loosely_equals(&self, other: &Self) -> bool {
        self.equals(other, 0).unwrap_or(false)
    }
}
