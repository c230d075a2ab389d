//! Engine errors.

use crate::config::ConfigError;
use thiserror::Error;

/// Errors raised by [`Machine`](crate::Machine) operations.
///
/// A failed operation never leaves partial mutation behind: state, history
/// and journal are exactly as they were before the call.
///
/// Undo/redo exhaustion is deliberately *not* an error. "Nothing to undo"
/// is an ordinary outcome, so [`Machine::undo`](crate::Machine::undo) and
/// [`Machine::redo`](crate::Machine::redo) report it as `false` instead.
#[derive(Debug, Error)]
pub enum MachineError {
    /// The requested state is not declared in the configuration. Raised for
    /// undeclared targets of `change_state`, for transition rules whose
    /// target turned out to be undeclared (a misconfiguration surfacing
    /// lazily), and for triggering from an undeclared current state.
    #[error("unknown state '{state}'")]
    InvalidState { state: String },

    /// The current state has no transition rule for the event. Distinct
    /// from [`MachineError::InvalidState`]: this is "no such event from
    /// here", not "misconfigured target".
    #[error("no transition for event '{event}' from state '{state}'")]
    UnknownTransition { state: String, event: String },

    /// The configuration could not be built.
    #[error(transparent)]
    Configuration(#[from] ConfigError),
}
