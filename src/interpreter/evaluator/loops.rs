use std::{io::Write, rc::Rc};

use tracing::debug;

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::{core::EvalResult, runner::Interpreter},
        value::core::Value,
    },
    program::{Condition, Instruction},
};

impl<W: Write> Interpreter<'_, W> {
    /// Runs a `repeat` loop.
    ///
    /// The condition is checked before every iteration. The execution stack
    /// is reset to its depth at loop entry after each pass through the body.
    ///
    /// # Errors
    /// - `InfiniteLoopSuspected` once the body has run
    ///   `Config::max_iterations` times and the condition still holds.
    /// - Any error from the condition or the body.
    pub(crate) fn run_repeat(&mut self,
                             condition: &Condition,
                             body: &[Instruction],
                             line: usize)
                             -> EvalResult<()> {
        let depth = self.stack.depth();
        let limit = self.config.max_iterations;
        let mut iterations = 0usize;

        debug!(line, "entering repeat loop");

        while self.environment.evaluate_condition(condition, line)? {
            if iterations >= limit {
                return Err(RuntimeError::InfiniteLoopSuspected { limit, line });
            }
            iterations += 1;

            let result = self.execute_block(body);
            self.stack.truncate(depth);
            result?;
        }

        debug!(line, iterations, "repeat loop finished");
        Ok(())
    }

    /// Runs a `foreach` loop over the list held by `list`.
    ///
    /// The list is captured at loop entry, so reassigning it in the body does
    /// not change the iteration. The loop variable keeps its last value
    /// afterwards.
    ///
    /// # Errors
    /// - `UnknownVariable` if `list` is unbound.
    /// - `TypeError` if it does not hold a list.
    /// - Any error from the body.
    pub(crate) fn run_foreach(&mut self,
                              var: &str,
                              list: &str,
                              body: &[Instruction],
                              line: usize)
                              -> EvalResult<()> {
        let items = match self.environment.lookup(list, line)? {
            Value::List(items) => Rc::clone(items),
            other => {
                return Err(RuntimeError::TypeError { details: format!("foreach needs a list, but '{list}' is {}",
                                                                      other.type_name()),
                                                     line });
            },
        };

        let depth = self.stack.depth();
        debug!(line, var, count = items.len(), "entering foreach loop");

        for item in items.iter() {
            self.environment.set(var, item.clone());

            let result = self.execute_block(body);
            self.stack.truncate(depth);
            result?;
        }

        debug!(line, var, "foreach loop finished");
        Ok(())
    }
}
