use std::collections::HashMap;

use crate::interpreter::lexer::Token;

/// An operator that can join the two sides of a condition.
///
/// The six comparison keywords compare the evaluated sides; `and` and `or`
/// combine their truthiness.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConditionOp {
    /// `greater`
    Greater,
    /// `less`
    Less,
    /// `equal`
    Equal,
    /// `greater_equal`
    GreaterEqual,
    /// `less_equal`
    LessEqual,
    /// `not_equal`
    NotEqual,
    /// `and`
    And,
    /// `or`
    Or,
}

impl ConditionOp {
    /// Looks up the operator spelled by `keyword`.
    ///
    /// ```
    /// use clu::program::ConditionOp;
    ///
    /// assert_eq!(ConditionOp::from_keyword("less_equal"), Some(ConditionOp::LessEqual));
    /// assert_eq!(ConditionOp::from_keyword("lesser"), None);
    /// ```
    #[must_use]
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        Some(match keyword {
            "greater" => Self::Greater,
            "less" => Self::Less,
            "equal" => Self::Equal,
            "greater_equal" => Self::GreaterEqual,
            "less_equal" => Self::LessEqual,
            "not_equal" => Self::NotEqual,
            "and" => Self::And,
            "or" => Self::Or,
            _ => return None,
        })
    }

    /// Returns `true` for the six comparison operators.
    #[must_use]
    pub const fn is_comparison(self) -> bool {
        !matches!(self, Self::And | Self::Or)
    }
}

impl std::fmt::Display for ConditionOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let keyword = match self {
            Self::Greater => "greater",
            Self::Less => "less",
            Self::Equal => "equal",
            Self::GreaterEqual => "greater_equal",
            Self::LessEqual => "less_equal",
            Self::NotEqual => "not_equal",
            Self::And => "and",
            Self::Or => "or",
        };
        f.write_str(keyword)
    }
}

/// A binary condition `left op right`, as found in `if` and `repeat` headers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Condition {
    /// Tokens of the left-hand expression.
    pub left:  Vec<Token>,
    /// The joining operator.
    pub op:    ConditionOp,
    /// Tokens of the right-hand expression.
    pub right: Vec<Token>,
}

/// The operation an instruction performs, with its operands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstructionKind {
    /// `var name is expr`
    Assign {
        /// The variable being bound.
        name: String,
        /// Tokens of the expression after `is`.
        expr: Vec<Token>,
    },
    /// `output expr`
    Output {
        /// The expression text, rejoined with single spaces.
        expr: String,
    },
    /// `if left op right`
    If(Condition),
    /// `if` followed by a boolean expression using `and`, `or` or `not`.
    IfComplex {
        /// The condition text, rejoined with single spaces.
        condition: String,
    },
    /// `if flag`
    IfBool {
        /// The single token naming the flag.
        token: Token,
    },
    /// `otherwise`
    Otherwise,
    /// `end`
    End,
    /// `repeat left op right ... end`
    Repeat {
        /// The condition re-checked before every iteration.
        condition: Condition,
        /// The loop body.
        body:      Vec<Instruction>,
    },
    /// `foreach var in list ... end`
    Foreach {
        /// The loop variable rebound for every element.
        var:  String,
        /// The variable holding the list.
        list: String,
        /// The loop body.
        body: Vec<Instruction>,
    },
    /// `name arg arg ...`: a user-defined function call.
    Call {
        /// The function name.
        name: String,
        /// One token per argument expression.
        args: Vec<Token>,
    },
}

/// One parsed unit of program behavior.
///
/// Instructions are built once by the parser and never mutated. Block
/// instructions own their bodies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instruction {
    /// The operation and its operands.
    pub kind: InstructionKind,
    /// The 1-based source line the instruction was parsed from.
    pub line: usize,
}

impl Instruction {
    /// Creates an instruction from its kind and source line.
    #[must_use]
    pub const fn new(kind: InstructionKind, line: usize) -> Self {
        Self { kind, line }
    }

    /// Returns the keyword naming this instruction's kind, for diagnostics.
    #[must_use]
    pub const fn tag(&self) -> &'static str {
        match self.kind {
            InstructionKind::Assign { .. } => "assign",
            InstructionKind::Output { .. } => "output",
            InstructionKind::If(_) => "if",
            InstructionKind::IfComplex { .. } => "if_complex",
            InstructionKind::IfBool { .. } => "if_bool",
            InstructionKind::Otherwise => "otherwise",
            InstructionKind::End => "end",
            InstructionKind::Repeat { .. } => "repeat_block",
            InstructionKind::Foreach { .. } => "foreach",
            InstructionKind::Call { .. } => "call",
        }
    }
}

/// A user-defined function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Function {
    /// The function's name, its key in the program's function table.
    pub name:   String,
    /// Parameter names in declaration order.
    pub params: Vec<String>,
    /// The function body.
    pub body:   Vec<Instruction>,
    /// The line of the `function` header.
    pub line:   usize,
}

/// A parsed program: top-level instructions plus the function table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Program {
    /// Top-level instructions in source order.
    pub instructions: Vec<Instruction>,
    /// Functions keyed by name.
    pub functions:    HashMap<String, Function>,
}

impl Program {
    /// Creates an empty program.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a top-level instruction.
    pub fn add_instruction(&mut self, instruction: Instruction) {
        self.instructions.push(instruction);
    }

    /// Registers a function, replacing any earlier definition with the same
    /// name. Returns the replaced definition.
    pub fn add_function(&mut self, function: Function) -> Option<Function> {
        self.functions.insert(function.name.clone(), function)
    }

    /// Looks up a function by name.
    #[must_use]
    pub fn function(&self, name: &str) -> Option<&Function> {
        self.functions.get(name)
    }
}

impl<'a> IntoIterator for &'a Program {
    type IntoIter = std::slice::Iter<'a, Instruction>;
    type Item = &'a Instruction;

    fn into_iter(self) -> Self::IntoIter {
        self.instructions.iter()
    }
}
