use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::EvalResult,
            function::{aggregate, convert, sequence},
        },
        value::core::Value,
    },
};

/// A built-in function.
///
/// Built-ins are applied with `NAME of ARG` or `NAME(ARG)` and always take a
/// single value. `contains` takes a two-element list holding the container
/// and the item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Builtin {
    Sum,
    Max,
    Min,
    Average,
    Len,
    Sorted,
    Reversed,
    First,
    Last,
    All,
    Any,
    IsBool,
    Empty,
    Type,
    Contains,
    Str,
    Int,
    Float,
    Bool,
}

impl Builtin {
    /// Every built-in, in registry order.
    pub const ALL: [Self; 19] = [Self::Sum,
                                 Self::Max,
                                 Self::Min,
                                 Self::Average,
                                 Self::Len,
                                 Self::Sorted,
                                 Self::Reversed,
                                 Self::First,
                                 Self::Last,
                                 Self::All,
                                 Self::Any,
                                 Self::IsBool,
                                 Self::Empty,
                                 Self::Type,
                                 Self::Contains,
                                 Self::Str,
                                 Self::Int,
                                 Self::Float,
                                 Self::Bool];

    /// Looks up a built-in by its source name.
    ///
    /// ```
    /// use clu::interpreter::evaluator::function::core::Builtin;
    ///
    /// assert_eq!(Builtin::from_name("is_bool"), Some(Builtin::IsBool));
    /// assert_eq!(Builtin::from_name("print"), None);
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|builtin| builtin.name() == name)
    }

    /// Returns the source name of the built-in.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sum => "sum",
            Self::Max => "max",
            Self::Min => "min",
            Self::Average => "average",
            Self::Len => "len",
            Self::Sorted => "sorted",
            Self::Reversed => "reversed",
            Self::First => "first",
            Self::Last => "last",
            Self::All => "all",
            Self::Any => "any",
            Self::IsBool => "is_bool",
            Self::Empty => "empty",
            Self::Type => "type",
            Self::Contains => "contains",
            Self::Str => "str",
            Self::Int => "int",
            Self::Float => "float",
            Self::Bool => "bool",
        }
    }

    /// Applies the built-in to its argument.
    ///
    /// # Parameters
    /// - `arg`: The evaluated argument.
    /// - `line`: Line number for error reporting.
    ///
    /// # Example
    /// ```
    /// use clu::interpreter::{evaluator::function::core::Builtin, value::core::Value};
    ///
    /// let nums = Value::from(vec![Value::Integer(1), Value::Integer(2), Value::Integer(3)]);
    ///
    /// assert_eq!(Builtin::Sum.apply(nums.clone(), 1).unwrap(), Value::Integer(6));
    /// assert_eq!(Builtin::Average.apply(nums, 1).unwrap(), Value::Float(2.0));
    /// ```
    pub fn apply(self, arg: Value, line: usize) -> EvalResult<Value> {
        match self {
            Self::Sum => aggregate::sum(&arg, line),
            Self::Max => aggregate::max(&arg, line),
            Self::Min => aggregate::min(&arg, line),
            Self::Average => aggregate::average(&arg, line),
            Self::Len => sequence::len(&arg, line),
            Self::Sorted => sequence::sorted(&arg, line),
            Self::Reversed => sequence::reversed(&arg, line),
            Self::First => sequence::first(&arg, line),
            Self::Last => sequence::last(&arg, line),
            Self::All => sequence::all(&arg, line),
            Self::Any => sequence::any(&arg, line),
            Self::Empty => sequence::empty(&arg, line),
            Self::Contains => {
                let [container, item] = expect_pair(self, &arg, line)?;
                sequence::contains(container, item, line)
            },
            Self::IsBool => Ok(convert::is_bool(&arg)),
            Self::Type => Ok(convert::type_of(&arg)),
            Self::Str => Ok(convert::to_str(&arg)),
            Self::Int => convert::to_int(&arg, line),
            Self::Float => convert::to_float(&arg, line),
            Self::Bool => Ok(convert::to_bool(&arg)),
        }
    }
}

impl std::fmt::Display for Builtin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Returns the elements of a list argument, naming the built-in in the error.
///
/// # Errors
/// `TypeError` if `arg` is not a list.
pub fn expect_list(builtin: Builtin, arg: &Value, line: usize) -> EvalResult<&[Value]> {
    match arg {
        Value::List(items) => Ok(items),
        other => Err(RuntimeError::TypeError { details: format!("{builtin} needs a list, found {}",
                                                                other.type_name()),
                                               line }),
    }
}

/// Splits the argument of a two-argument built-in.
///
/// # Errors
/// `ArgumentCountMismatch` unless `arg` is a list of exactly two values.
fn expect_pair(builtin: Builtin, arg: &Value, line: usize) -> EvalResult<[&Value; 2]> {
    let found = match arg {
        Value::List(items) => match items.as_slice() {
            [first, second] => return Ok([first, second]),
            items => items.len(),
        },
        _ => 1,
    };

    Err(RuntimeError::ArgumentCountMismatch { name: builtin.to_string(),
                                              expected: 2,
                                              found,
                                              line })
}
