//! Undo/redo history of visited states.
//!
//! History is a pair of LIFO stacks. Forward moves push the state being
//! left onto the undo stack and discard everything on the redo stack;
//! undo and redo shuttle states between the two.

use super::config::StateId;
use serde::{Deserialize, Serialize};

/// Undo and redo stacks of previously active states.
///
/// Both stacks are stored bottom-to-top: the last element is the most
/// recent entry.
///
/// # Example
///
/// ```rust
/// use waypoint::core::History;
///
/// let mut history = History::new();
/// history.record("off".to_string());
///
/// // Step back from "on" to "off"
/// let previous = history.step_back("on".to_string());
/// assert_eq!(previous.as_deref(), Some("off"));
/// assert_eq!(history.redo_stack(), ["on".to_string()]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct History {
    undo: Vec<StateId>,
    redo: Vec<StateId>,
}

impl History {
    /// Create an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a forward move away from `previous`.
    ///
    /// The redo stack is cleared: a forward move invalidates any undone
    /// states.
    pub fn record(&mut self, previous: StateId) {
        self.undo.push(previous);
        self.redo.clear();
    }

    /// Pop the most recent undo entry, parking `current` on the redo stack.
    ///
    /// Returns `None` and leaves both stacks untouched when there is
    /// nothing to undo.
    pub fn step_back(&mut self, current: StateId) -> Option<StateId> {
        let previous = self.undo.pop()?;
        self.redo.push(current);
        Some(previous)
    }

    /// Pop the most recent redo entry, parking `current` on the undo stack.
    ///
    /// Returns `None` and leaves both stacks untouched when there is
    /// nothing to redo.
    pub fn step_forward(&mut self, current: StateId) -> Option<StateId> {
        let next = self.redo.pop()?;
        self.undo.push(current);
        Some(next)
    }

    /// Empty both stacks.
    pub fn clear(&mut self) {
        self.undo.clear();
        self.redo.clear();
    }

    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    pub fn is_empty(&self) -> bool {
        self.undo.is_empty() && self.redo.is_empty()
    }

    /// States available for undo, oldest first.
    pub fn undo_stack(&self) -> &[StateId] {
        &self.undo
    }

    /// States available for redo, oldest first.
    pub fn redo_stack(&self) -> &[StateId] {
        &self.redo
    }
}
