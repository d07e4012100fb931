use std::{io::Write, slice};

use tracing::debug;

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::{core::EvalResult, runner::Interpreter},
        lexer::Token,
    },
};

impl<W: Write> Interpreter<'_, W> {
    /// Calls a user-defined function.
    ///
    /// Each argument token is evaluated in the caller's variables. The whole
    /// variable mapping is then copied, the parameters are bound over it and
    /// the body runs. Afterwards the copy is put back and the execution stack
    /// is reset to its depth before the call, whether the body succeeded or
    /// not. A function therefore reads and writes the caller's variables while
    /// it runs, but none of its changes survive the call.
    ///
    /// # Parameters
    /// - `name`: Function name.
    /// - `args`: One token per argument.
    /// - `line`: Line number of the call.
    ///
    /// # Errors
    /// - `UnknownFunction` if no function is called `name`.
    /// - `ArgumentCountMismatch` if the argument and parameter counts differ.
    /// - `RecursionLimit` if `Config::max_call_depth` calls are already active.
    /// - Any error from argument evaluation or from the body.
    pub(crate) fn call_function(&mut self, name: &str, args: &[Token], line: usize) -> EvalResult<()> {
        let program = self.program;
        let function =
            program.function(name)
                   .ok_or_else(|| RuntimeError::UnknownFunction { name: name.to_string(),
                                                                  line })?;

        if args.len() != function.params.len() {
            return Err(RuntimeError::ArgumentCountMismatch { name: name.to_string(),
                                                             expected: function.params.len(),
                                                             found: args.len(),
                                                             line });
        }

        let limit = self.config.max_call_depth;
        if self.call_depth >= limit {
            return Err(RuntimeError::RecursionLimit { limit, line });
        }

        let values = args.iter()
                         .map(|arg| self.environment.evaluate(slice::from_ref(arg), line))
                         .collect::<EvalResult<Vec<_>>>()?;

        let snapshot = self.environment.snapshot();
        let depth = self.stack.depth();

        for (param, value) in function.params.iter().zip(values) {
            self.environment.set(param.as_str(), value);
        }

        self.call_depth += 1;
        debug!(name, depth = self.call_depth, line, "calling function");

        let result = self.execute_block(&function.body);

        self.call_depth -= 1;
        self.stack.truncate(depth);
        self.environment.restore(snapshot);

        debug!(name, ok = result.is_ok(), "returned from function");
        result
    }
}
