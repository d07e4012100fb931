/// A branch marker on the execution stack.
///
/// Each `if` pushes one marker and each `end` pops one. Instructions only run
/// when the top marker is active, or when the stack is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    /// Inside an `if` whose condition held.
    IfTrue,
    /// Inside an `if` whose condition failed; a following `otherwise` runs.
    IfFalse,
    /// Inside the `otherwise` branch of a failed `if`.
    Otherwise,
    /// Inside a branch that never runs, including every `if` nested in one.
    Skip,
}

impl Marker {
    /// Returns the marker pushed for an evaluated condition.
    #[must_use]
    pub const fn from_condition(holds: bool) -> Self {
        if holds { Self::IfTrue } else { Self::IfFalse }
    }

    /// Returns the marker that replaces `self` at an `otherwise`.
    ///
    /// ```
    /// use clu::interpreter::evaluator::stack::Marker;
    ///
    /// assert_eq!(Marker::IfFalse.after_otherwise(), Marker::Otherwise);
    /// assert_eq!(Marker::IfTrue.after_otherwise(), Marker::Skip);
    /// assert_eq!(Marker::Skip.after_otherwise(), Marker::Skip);
    /// ```
    #[must_use]
    pub const fn after_otherwise(self) -> Self {
        match self {
            Self::IfFalse => Self::Otherwise,
            Self::IfTrue | Self::Otherwise | Self::Skip => Self::Skip,
        }
    }

    /// Returns `true` if instructions under this marker run.
    #[must_use]
    pub const fn is_active(self) -> bool {
        matches!(self, Self::IfTrue | Self::Otherwise)
    }
}

/// The interpreter's stack of branch markers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExecutionStack {
    markers: Vec<Marker>,
}

impl ExecutionStack {
    /// Creates an empty stack.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if the stack is empty or its top marker is active.
    ///
    /// ```
    /// use clu::interpreter::evaluator::stack::{ExecutionStack, Marker};
    ///
    /// let mut stack = ExecutionStack::new();
    /// assert!(stack.should_execute());
    ///
    /// stack.push(Marker::IfFalse);
    /// assert!(!stack.should_execute());
    ///
    /// stack.otherwise();
    /// assert!(stack.should_execute());
    /// ```
    #[must_use]
    pub fn should_execute(&self) -> bool {
        self.markers.last().is_none_or(|marker| marker.is_active())
    }

    /// Pushes a marker.
    pub fn push(&mut self, marker: Marker) {
        self.markers.push(marker);
    }

    /// Replaces the top marker for an `otherwise`, returning the new top.
    ///
    /// Returns `None` if the stack is empty.
    pub fn otherwise(&mut self) -> Option<Marker> {
        let next = self.markers.pop()?.after_otherwise();
        self.markers.push(next);
        Some(next)
    }

    /// Pops the top marker for an `end`. Popping an empty stack does nothing.
    pub fn end(&mut self) -> Option<Marker> {
        self.markers.pop()
    }

    /// Returns the number of markers.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.markers.len()
    }

    /// Drops markers above `depth`.
    pub fn truncate(&mut self, depth: usize) {
        self.markers.truncate(depth);
    }

    /// Returns the markers, bottom first.
    #[must_use]
    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }
}
