//! Undo/redo history of visited states.
//!
//! Both stacks are most-recent-last. Recording a new change starts a new
//! branch of history, which discards everything that was undone.

use serde::{Deserialize, Serialize};

/// Two LIFO stacks of state identifiers.
///
/// # Example
///
/// ```rust
/// use fsm::core::History;
///
/// let mut history = History::new();
/// history.record("idle");
///
/// // Current state is "running"; step back to "idle".
/// assert_eq!(history.step_back("running").as_deref(), Some("idle"));
/// assert_eq!(history.redo_stack(), ["running"]);
///
/// // And forward again.
/// assert_eq!(history.step_forward("idle").as_deref(), Some("running"));
/// assert!(!history.can_redo());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct History {
    undo: Vec<String>,
    redo: Vec<String>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the state being left by a forward change.
    ///
    /// Clears the redo stack.
    pub fn record(&mut self, previous: impl Into<String>) {
        self.undo.push(previous.into());
        self.redo.clear();
    }

    /// Pop the most recent undo entry, parking `current` on the redo stack.
    ///
    /// Returns `None` and leaves both stacks untouched when there is nothing
    /// to undo.
    pub fn step_back(&mut self, current: &str) -> Option<String> {
        let previous = self.undo.pop()?;
        self.redo.push(current.to_string());
        Some(previous)
    }

    /// Pop the most recent redo entry, parking `current` on the undo stack.
    pub fn step_forward(&mut self, current: &str) -> Option<String> {
        let next = self.redo.pop()?;
        self.undo.push(current.to_string());
        Some(next)
    }

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

    /// Previously visited states, oldest first.
    pub fn undo_stack(&self) -> &[String] {
        &self.undo
    }

    /// Undone states, oldest undo last.
    pub fn redo_stack(&self) -> &[String] {
        &self.redo
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_history_is_empty() {
        let history = History::new();
        assert!(!history.can_undo());
        assert!(!history.can_redo());
        assert!(history.undo_stack().is_empty());
        assert!(history.redo_stack().is_empty());
    }

    #[test]
    fn record_pushes_and_clears_redo() {
        let mut history = History::new();
        history.record("a");
        history.record("b");
        assert_eq!(history.step_back("c").as_deref(), Some("b"));
        assert!(history.can_redo());

        history.record("b");

        assert_eq!(history.undo_stack(), ["a", "b"]);
        assert!(history.redo_stack().is_empty());
    }

    #[test]
    fn step_back_on_empty_is_noop() {
        let mut history = History::new();
        assert_eq!(history.step_back("a"), None);
        assert!(history.redo_stack().is_empty());
    }

    #[test]
    fn step_forward_on_empty_is_noop() {
        let mut history = History::new();
        history.record("a");
        assert_eq!(history.step_forward("b"), None);
        assert_eq!(history.undo_stack(), ["a"]);
    }

    #[test]
    fn stacks_are_lifo() {
        let mut history = History::new();
        history.record("a");
        history.record("b");

        assert_eq!(history.step_back("c").as_deref(), Some("b"));
        assert_eq!(history.step_back("b").as_deref(), Some("a"));
        assert_eq!(history.redo_stack(), ["c", "b"]);

        assert_eq!(history.step_forward("a").as_deref(), Some("b"));
        assert_eq!(history.step_forward("b").as_deref(), Some("c"));
        assert_eq!(history.undo_stack(), ["a", "b"]);
    }

    #[test]
    fn clear_empties_both_stacks() {
        let mut history = History::new();
        history.record("a");
        history.record("b");
        history.step_back("c");

        history.clear();

        assert!(!history.can_undo());
        assert!(!history.can_redo());
    }

    #[test]
    fn history_serializes_correctly() {
        let mut history = History::new();
        history.record("a");
        history.step_back("b");

        let json = serde_json::to_string(&history).unwrap();
        let deserialized: History = serde_json::from_str(&json).unwrap();

        assert_eq!(history, deserialized);
    }
}
