use std::rc::Rc;

use crate::{
    error::RuntimeError, interpreter::evaluator::core::EvalResult, util::num::i64_to_f64_checked,
};

/// Represents a runtime value in the interpreter.
///
/// This enum models every value a variable can hold, an expression can
/// produce, or a built-in can return.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A 64-bit signed integer.
    Integer(i64),
    /// A double precision floating-point number.
    Float(f64),
    /// `True` or `False`. Produced by boolean literals and by built-ins such
    /// as `all`, `any` and `empty`.
    Boolean(bool),
    /// A piece of text.
    Text(String),
    /// An ordered list of values of any type. Indexed from 1 in source code.
    List(Rc<Vec<Self>>),
    /// The absent marker, written `none` or `null` in source code.
    Absent,
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Boolean(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl From<Vec<Self>> for Value {
    fn from(v: Vec<Self>) -> Self {
        Self::List(Rc::new(v))
    }
}

impl Value {
    /// Returns the name of the value's type, as reported by `type of`.
    ///
    /// ```
    /// use clu::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::Integer(1).type_name(), "int");
    /// assert_eq!(Value::from("a").type_name(), "str");
    /// assert_eq!(Value::Absent.type_name(), "none");
    /// ```
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Integer(_) => "int",
            Self::Float(_) => "float",
            Self::Boolean(_) => "bool",
            Self::Text(_) => "str",
            Self::List(_) => "list",
            Self::Absent => "none",
        }
    }

    /// Returns the truthiness of the value.
    ///
    /// Numbers are truthy when non-zero, text and lists when non-empty,
    /// booleans are themselves, and the absent marker is false. Used by the
    /// boolean condition forms and by `bool`, `all` and `any`.
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Integer(n) => *n != 0,
            Self::Float(r) => *r != 0.0,
            Self::Boolean(b) => *b,
            Self::Text(s) => !s.is_empty(),
            Self::List(items) => !items.is_empty(),
            Self::Absent => false,
        }
    }

    /// Returns `true` for integers and floats.
    #[must_use]
    pub const fn is_numeric(&self) -> bool {
        matches!(self, Self::Integer(_) | Self::Float(_))
    }

    /// Returns `true` if the value is [`Integer`](Self::Integer).
    #[must_use]
    pub const fn is_integer(&self) -> bool {
        matches!(self, Self::Integer(..))
    }

    /// Converts a numeric value to `f64`.
    ///
    /// # Parameters
    /// - `line`: Source code line number for error reporting.
    ///
    /// # Returns
    /// - `Ok(f64)`: If value is a float or an exactly representable integer.
    /// - `Err(RuntimeError::TypeError | LiteralTooLarge)`: If not numeric or
    ///   not representable.
    pub fn as_f64(&self, line: usize) -> EvalResult<f64> {
        match self {
            Self::Float(r) => Ok(*r),
            Self::Integer(n) => i64_to_f64_checked(*n, RuntimeError::LiteralTooLarge { line }),
            other => Err(RuntimeError::TypeError { details: format!("expected a number, found {}",
                                                                    other.type_name()),
                                                   line }),
        }
    }

    /// Formats the value the way it would be written in source code.
    ///
    /// Identical to the `Display` form except that text is quoted. Integers,
    /// floats and text survive a trip through the lexer and evaluator.
    ///
    /// ```
    /// use clu::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::from("hi").literal(), "'hi'");
    /// assert_eq!(Value::Float(2.0).literal(), "2.0");
    /// ```
    #[must_use]
    pub fn literal(&self) -> String {
        match self {
            Self::Text(s) if s.contains('\'') => format!("\"{s}\""),
            Self::Text(s) => format!("'{s}'"),
            other => other.to_string(),
        }
    }
}

/// Formats a float so that it always reads back as a float: integral values
/// keep one fractional digit.
fn format_float(f: &mut std::fmt::Formatter<'_>, r: f64) -> std::fmt::Result {
    if r.is_finite() && r.fract() == 0.0 {
        write!(f, "{r:.1}")
    } else {
        write!(f, "{r}")
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Float(r) => format_float(f, *r),
            Self::Boolean(true) => write!(f, "True"),
            Self::Boolean(false) => write!(f, "False"),
            Self::Text(s) => write!(f, "{s}"),
            Self::List(items) => {
                write!(f, "[")?;

                for (index, value) in items.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }

                    write!(f, "{}", value.literal())?;
                }

                write!(f, "]")
            },
            Self::Absent => write!(f, "None"),
        }
    }
}
