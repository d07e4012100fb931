use std::{collections::HashMap, io::Write, slice};

use tracing::{debug, trace};

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::{Config, Environment, EvalResult},
            stack::{ExecutionStack, Marker},
        },
        value::core::Value,
    },
    program::{Instruction, InstructionKind, Program},
};

/// Executes a parsed [`Program`].
///
/// The interpreter walks the top-level instructions in order. It owns the
/// variable [`Environment`], the [`ExecutionStack`] that decides which
/// branches run, and the writer that receives one line per `output`.
///
/// ## Example
/// ```
/// use clu::interpreter::{evaluator::runner::Interpreter, parser::core::parse};
///
/// let program = parse(&["var x is 10", "if x greater 5", "output 'big'", "otherwise",
///                       "output 'small'", "end"]).unwrap();
///
/// let mut out = Vec::new();
/// let mut interpreter = Interpreter::new(&program, &mut out);
/// interpreter.run().unwrap();
///
/// assert_eq!(String::from_utf8(out).unwrap(), "big\n");
/// ```
pub struct Interpreter<'p, W: Write> {
    pub(super) program:     &'p Program,
    pub(super) environment: Environment,
    pub(super) stack:       ExecutionStack,
    pub(super) config:      Config,
    pub(super) call_depth:  usize,
    out:                    W,
}

impl<'p, W: Write> Interpreter<'p, W> {
    /// Creates an interpreter with the default [`Config`].
    pub fn new(program: &'p Program, out: W) -> Self {
        Self::with_config(program, out, Config::default())
    }

    /// Creates an interpreter with explicit limits.
    pub fn with_config(program: &'p Program, out: W, config: Config) -> Self {
        Self { program,
               environment: Environment::new(),
               stack: ExecutionStack::new(),
               config,
               call_depth: 0,
               out }
    }

    /// Runs the program's top-level instructions.
    ///
    /// The first runtime error stops the run. Output written before the error
    /// and the variables at that point stay available through
    /// [`variables`](Self::variables).
    ///
    /// # Errors
    /// Any [`RuntimeError`] raised by an instruction.
    pub fn run(&mut self) -> EvalResult<()> {
        let program = self.program;
        debug!(instructions = program.instructions.len(),
               functions = program.functions.len(),
               "running program");

        let result = self.execute_block(&program.instructions);

        if let Err(e) = &result {
            debug!(line = e.line(), "run aborted: {e}");
        }
        result
    }

    /// Executes instructions in order, stopping at the first error.
    pub fn execute_block(&mut self, instructions: &[Instruction]) -> EvalResult<()> {
        for instruction in instructions {
            self.execute(instruction)?;
        }
        Ok(())
    }

    /// Executes a single instruction.
    ///
    /// Conditionals, `otherwise` and `end` always update the execution stack.
    /// Every other instruction is skipped while the current branch is
    /// inactive.
    pub fn execute(&mut self, instruction: &Instruction) -> EvalResult<()> {
        let line = instruction.line;
        trace!(line,
               tag = instruction.tag(),
               active = self.stack.should_execute(),
               "execute");

        match &instruction.kind {
            InstructionKind::If(condition) => {
                self.push_branch(|env| env.evaluate_condition(condition, line))?;
            },
            InstructionKind::IfComplex { condition } => {
                self.push_branch(|env| env.evaluate_condition_text(condition, line))?;
            },
            InstructionKind::IfBool { token } => {
                self.push_branch(|env| {
                        Ok(env.evaluate(slice::from_ref(token), line)?.is_truthy())
                    })?;
            },
            InstructionKind::Otherwise => {
                self.stack
                    .otherwise()
                    .ok_or(RuntimeError::OtherwiseWithoutIf { line })?;
            },
            InstructionKind::End => {
                self.stack.end();
            },
            _ if !self.stack.should_execute() => {},
            InstructionKind::Assign { name, expr } => {
                let value = self.environment.evaluate(expr, line)?;
                self.environment.set(name.as_str(), value);
            },
            InstructionKind::Output { expr } => {
                let value = self.environment.evaluate_text(expr, line)?;
                self.emit(&value, line)?;
            },
            InstructionKind::Repeat { condition, body } => {
                self.run_repeat(condition, body, line)?;
            },
            InstructionKind::Foreach { var, list, body } => {
                self.run_foreach(var, list, body, line)?;
            },
            InstructionKind::Call { name, args } => {
                self.call_function(name, args, line)?;
            },
        }

        Ok(())
    }

    /// Pushes the marker for a conditional. Inside an inactive branch the
    /// condition is not evaluated and `Skip` is pushed.
    fn push_branch<F>(&mut self, condition: F) -> EvalResult<()>
        where F: FnOnce(&Environment) -> EvalResult<bool>
    {
        let marker = if self.stack.should_execute() {
            Marker::from_condition(condition(&self.environment)?)
        } else {
            Marker::Skip
        };
        self.stack.push(marker);
        Ok(())
    }

    /// Writes one output line.
    fn emit(&mut self, value: &Value, line: usize) -> EvalResult<()> {
        writeln!(self.out, "{value}").map_err(|e| RuntimeError::Output { details: e.to_string(),
                                                                         line })
    }

    /// Returns the current variable bindings.
    #[must_use]
    pub const fn variables(&self) -> &HashMap<String, Value> {
        self.environment.variables()
    }

    /// Returns the variable environment.
    #[must_use]
    pub const fn environment(&self) -> &Environment {
        &self.environment
    }

    /// Returns the variable environment for seeding values before a run.
    pub fn environment_mut(&mut self) -> &mut Environment {
        &mut self.environment
    }

    /// Returns the execution stack.
    #[must_use]
    pub const fn stack(&self) -> &ExecutionStack {
        &self.stack
    }

    /// Consumes the interpreter, returning the final variables and the
    /// output writer.
    pub fn into_parts(self) -> (HashMap<String, Value>, W) {
        (self.environment.into_variables(), self.out)
    }
}
