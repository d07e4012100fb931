use crate::{
    interpreter::{
        evaluator::{
            core::{Environment, EvalResult},
            expression::retokenize,
        },
        value::core::Value,
    },
    program::{Condition, ConditionOp},
};

impl Environment {
    /// Evaluates a structured condition such as an `if` or `repeat` header.
    ///
    /// Both sides are always evaluated, even for `and` and `or`.
    ///
    /// # Example
    /// ```
    /// use clu::{
    ///     interpreter::{evaluator::core::Environment, lexer::tokenize_line, value::core::Value},
    ///     program::{Condition, ConditionOp},
    /// };
    ///
    /// let mut env = Environment::new();
    /// env.set("x", Value::Integer(10));
    ///
    /// let condition = Condition { left:  tokenize_line("x", 1).unwrap(),
    ///                             op:    ConditionOp::Greater,
    ///                             right: tokenize_line("5", 1).unwrap(), };
    ///
    /// assert!(env.evaluate_condition(&condition, 1).unwrap());
    /// ```
    pub fn evaluate_condition(&self, condition: &Condition, line: usize) -> EvalResult<bool> {
        let left = self.evaluate(&condition.left, line)?;
        let right = self.evaluate(&condition.right, line)?;
        apply_condition_op(condition.op, &left, &right, line)
    }

    /// Evaluates the textual boolean expression of an `if` line.
    ///
    /// The text is reduced in this order:
    /// 1. Split once at the first ` and `, else at the first ` or `, and
    ///    combine both halves.
    /// 2. A `not ` prefix negates the rest.
    /// 3. `LEFT OP RIGHT` with a condition keyword is evaluated like a
    ///    structured condition.
    /// 4. Anything else is evaluated as an expression and its truthiness
    ///    taken.
    ///
    /// There is no grouping; `and` binds before `or` only because it is split
    /// first.
    ///
    /// # Example
    /// ```
    /// use clu::interpreter::{evaluator::core::Environment, value::core::Value};
    ///
    /// let mut env = Environment::new();
    /// env.set("x", Value::Integer(3));
    ///
    /// assert!(env.evaluate_condition_text("x greater 1 and not x equal 4", 1).unwrap());
    /// assert!(!env.evaluate_condition_text("False or x less 0", 1).unwrap());
    /// ```
    pub fn evaluate_condition_text(&self, text: &str, line: usize) -> EvalResult<bool> {
        let text = text.trim();

        if let Some((left, right)) = text.split_once(" and ") {
            let left = self.evaluate_condition_text(left, line)?;
            let right = self.evaluate_condition_text(right, line)?;
            return Ok(left && right);
        }

        if let Some((left, right)) = text.split_once(" or ") {
            let left = self.evaluate_condition_text(left, line)?;
            let right = self.evaluate_condition_text(right, line)?;
            return Ok(left || right);
        }

        if let Some(rest) = text.strip_prefix("not ") {
            return Ok(!self.evaluate_condition_text(rest, line)?);
        }

        let tokens = retokenize(text, line)?;

        let split = tokens.iter()
                          .enumerate()
                          .skip(1)
                          .find_map(|(i, t)| ConditionOp::from_keyword(t.as_str()).map(|op| (i, op)));

        if let Some((at, op)) = split
           && at + 1 < tokens.len()
        {
            let left = self.evaluate(&tokens[..at], line)?;
            let right = self.evaluate(&tokens[at + 1..], line)?;
            return apply_condition_op(op, &left, &right, line);
        }

        Ok(self.evaluate(&tokens, line)?.is_truthy())
    }
}

/// Applies a condition operator to two evaluated sides.
///
/// # Errors
/// `TypeError` when a comparison is applied to incompatible values.
pub fn apply_condition_op(op: ConditionOp,
                          left: &Value,
                          right: &Value,
                          line: usize)
                          -> EvalResult<bool> {
    Ok(match op {
        ConditionOp::And => left.is_truthy() && right.is_truthy(),
        ConditionOp::Or => left.is_truthy() || right.is_truthy(),
        ConditionOp::Equal => left.equals(right, line)?,
        ConditionOp::NotEqual => !left.equals(right, line)?,
        ConditionOp::Greater => left.compare(right, line)?.is_gt(),
        ConditionOp::Less => left.compare(right, line)?.is_lt(),
        ConditionOp::GreaterEqual => left.compare(right, line)?.is_ge(),
        ConditionOp::LessEqual => left.compare(right, line)?.is_le(),
    })
}
