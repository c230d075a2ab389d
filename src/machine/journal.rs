//! Transition audit log.
//!
//! The journal is separate from the undo/redo stacks: it is an append-only
//! account of every state change the machine performed, including the
//! changes made by undo and redo themselves.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One successful state change.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionRecord {
    /// State the machine left.
    pub from: String,
    /// State the machine entered.
    pub to: String,
    /// Event that triggered the change, when it came through
    /// [`Machine::trigger`](crate::Machine::trigger). `None` for manual
    /// transitions, resets, undo and redo.
    pub event: Option<String>,
    /// When the change happened.
    pub at: DateTime<Utc>,
}

/// Append-only log of state changes, chronological order.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct TransitionLog {
    records: Vec<TransitionRecord>,
}

impl TransitionLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record(
        &mut self,
        from: impl Into<String>,
        to: impl Into<String>,
        event: Option<String>,
    ) {
        self.records.push(TransitionRecord {
            from: from.into(),
            to: to.into(),
            event,
            at: Utc::now(),
        });
    }

    pub(crate) fn clear(&mut self) {
        self.records.clear();
    }

    /// All records, oldest first.
    pub fn records(&self) -> &[TransitionRecord] {
        &self.records
    }

    /// The sequence of states the machine moved through: the first record's
    /// `from`, then each record's `to`. Empty when nothing was logged.
    pub fn path(&self) -> Vec<&str> {
        let mut path = Vec::with_capacity(self.records.len() + 1);
        if let Some(first) = self.records.first() {
            path.push(first.from.as_str());
        }
        for record in &self.records {
            path.push(record.to.as_str());
        }
        path
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the log is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
