//! Undo/redo stacks over visited states.

use serde::{Deserialize, Serialize};

/// Navigable record of previously visited states.
///
/// Two stacks, push/pop at the tail. The undo stack holds states left
/// behind by forward transitions, most-recent-last. The redo stack holds
/// states stepped back from via undo, most-recent-undo-last; any fresh
/// forward transition discards it.
///
/// Only the owning [`Machine`](crate::Machine) mutates a `History`; callers
/// get a read-only view through [`Machine::history`](crate::Machine::history).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct History {
    undo: Vec<String>,
    redo: Vec<String>,
}

impl History {
    /// Create an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a forward transition away from `prev`.
    ///
    /// Pushes `prev` on the undo stack and clears the redo stack: a manual
    /// transition invalidates any pending redo path.
    pub(crate) fn record(&mut self, prev: String) {
        self.undo.push(prev);
        self.redo.clear();
    }

    /// Step back one state.
    ///
    /// Exchanges `current` for the most recently recorded state: `current`
    /// goes on the redo stack, the popped state is returned. Returns `None`
    /// without mutating anything when there is nothing to undo.
    pub(crate) fn undo(&mut self, current: String) -> Option<String> {
        let prev = self.undo.pop()?;
        self.redo.push(current);
        Some(prev)
    }

    /// Step forward again after an undo. Mirror image of [`History::undo`].
    pub(crate) fn redo(&mut self, current: String) -> Option<String> {
        let next = self.redo.pop()?;
        self.undo.push(current);
        Some(next)
    }

    /// Drop both stacks.
    pub(crate) fn clear(&mut self) {
        self.undo.clear();
        self.redo.clear();
    }

    /// Whether an undo would succeed.
    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    /// Whether a redo would succeed.
    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    /// States on the undo stack, oldest first.
    pub fn undo_states(&self) -> &[String] {
        &self.undo
    }

    /// States on the redo stack, oldest undo first.
    pub fn redo_states(&self) -> &[String] {
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
    }

    #[test]
    fn record_pushes_and_clears_redo() {
        let mut history = History::new();
        history.record("idle".to_string());
        assert!(history.undo("running".to_string()).is_some());
        assert!(history.can_redo());

        history.record("idle".to_string());
        assert!(!history.can_redo());
    }

    #[test]
    fn undo_exchanges_states() {
        let mut history = History::new();
        history.record("idle".to_string());

        let prev = history.undo("running".to_string());
        assert_eq!(prev.as_deref(), Some("idle"));
        assert_eq!(history.redo_states(), &["running"]);
        assert!(history.undo_states().is_empty());
    }

    #[test]
    fn redo_mirrors_undo() {
        let mut history = History::new();
        history.record("idle".to_string());
        history.undo("running".to_string());

        let next = history.redo("idle".to_string());
        assert_eq!(next.as_deref(), Some("running"));
        assert_eq!(history.undo_states(), &["idle"]);
        assert!(history.redo_states().is_empty());
    }

    #[test]
    fn empty_stacks_return_none_without_mutation() {
        let mut history = History::new();
        assert!(history.undo("idle".to_string()).is_none());
        assert!(history.redo("idle".to_string()).is_none());
        assert_eq!(history, History::new());
    }

    #[test]
    fn clear_drops_both_stacks() {
        let mut history = History::new();
        history.record("a".to_string());
        history.record("b".to_string());
        history.undo("c".to_string());

        history.clear();
        assert!(!history.can_undo());
        assert!(!history.can_redo());
    }
}
