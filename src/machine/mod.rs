//! The state machine engine.
//!
//! A [`Machine`] owns an immutable [`Config`] plus three pieces of mutable
//! state: the current state id, the undo/redo [`History`], and the
//! [`TransitionLog`] journal. All mutation goes through the engine's own
//! methods; every failing method leaves the machine untouched.
//!
//! The engine is single-threaded and synchronous. It holds no locks and no
//! external resources; sharing one instance across threads is the caller's
//! problem (wrap it in a mutex).

use crate::config::{Config, StateDef};
use tracing::debug;

pub mod error;
pub mod history;
pub mod journal;

pub use error::MachineError;
pub use history::History;
pub use journal::{TransitionLog, TransitionRecord};

/// Finite state machine engine driven by a declarative [`Config`].
///
/// # Example
///
/// ```rust
/// use turnstile::{Config, Machine};
///
/// let config = Config::builder()
///     .initial("idle")
///     .transition("idle", "start", "running")
///     .transition("running", "stop", "idle")
///     .build()?;
///
/// let mut machine = Machine::new(config);
/// assert_eq!(machine.current_state(), "idle");
///
/// machine.trigger("start")?;
/// assert_eq!(machine.current_state(), "running");
///
/// assert!(machine.undo());
/// assert_eq!(machine.current_state(), "idle");
/// assert!(machine.redo());
/// assert_eq!(machine.current_state(), "running");
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Debug)]
pub struct Machine {
    config: Config,
    state: String,
    history: History,
    journal: TransitionLog,
}

impl Machine {
    /// Create a machine in the configuration's initial state, with empty
    /// history and journal.
    ///
    /// No validation happens here: if `config.initial()` is not a declared
    /// state the machine still constructs, and the misconfiguration
    /// surfaces lazily on the first transition attempt. Run
    /// [`Config::validate`] beforehand for eager checking.
    pub fn new(config: Config) -> Self {
        let state = config.initial().to_string();
        Self {
            config,
            state,
            history: History::new(),
            journal: TransitionLog::new(),
        }
    }

    /// Create a machine from the JSON configuration DSL.
    ///
    /// JSON null means "no configuration supplied" and fails with
    /// [`ConfigError::Missing`](crate::ConfigError::Missing) wrapped in
    /// [`MachineError::Configuration`].
    pub fn from_json(json: &serde_json::Value) -> Result<Self, MachineError> {
        Ok(Self::new(Config::from_json(json)?))
    }

    /// The current state id.
    pub fn current_state(&self) -> &str {
        &self.state
    }

    /// The configuration driving this machine.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Read-only view of the undo/redo stacks.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Read-only view of the transition journal.
    pub fn journal(&self) -> &TransitionLog {
        &self.journal
    }

    /// Move to `target` directly.
    ///
    /// Fails with [`MachineError::InvalidState`] when `target` is not a
    /// declared state, leaving everything unchanged. Moving to the state
    /// the machine is already in is a silent no-op: no history push, no
    /// redo invalidation, no journal entry.
    pub fn change_state(&mut self, target: &str) -> Result<(), MachineError> {
        self.transition_to(target, None)
    }

    /// Fire `event` and follow the current state's transition rule for it.
    ///
    /// Failure modes, all mutation-free:
    /// - [`MachineError::UnknownTransition`] when the current state has no
    ///   rule for `event` ("no such event from here");
    /// - [`MachineError::InvalidState`] when the rule's target is not a
    ///   declared state (a misconfiguration caught lazily, exactly as
    ///   [`Machine::change_state`] would report it), or when the current
    ///   state is itself undeclared (possible only with a never-validated
    ///   configuration whose initial state is bad).
    pub fn trigger(&mut self, event: &str) -> Result<(), MachineError> {
        let def = self
            .config
            .state_def(&self.state)
            .ok_or_else(|| MachineError::InvalidState {
                state: self.state.clone(),
            })?;
        let target = def
            .target(event)
            .ok_or_else(|| MachineError::UnknownTransition {
                state: self.state.clone(),
                event: event.to_string(),
            })?
            .to_string();
        self.transition_to(&target, Some(event))
    }

    /// Move back to the configured initial state.
    ///
    /// Equivalent to `change_state(initial)`, including the no-op rule:
    /// resetting a machine already at its initial state touches nothing.
    pub fn reset(&mut self) -> Result<(), MachineError> {
        let initial = self.config.initial().to_string();
        self.transition_to(&initial, None)
    }

    /// All declared state ids, in declared order.
    pub fn states(&self) -> Vec<&str> {
        self.config.state_ids().iter().map(String::as_str).collect()
    }

    /// Declared state ids that have a transition rule for `event`, in
    /// declared order. Empty when no state handles the event.
    pub fn states_handling(&self, event: &str) -> Vec<&str> {
        self.config
            .state_ids()
            .iter()
            .filter(|id| {
                self.config
                    .state_def(id.as_str())
                    .is_some_and(|def| def.handles(event))
            })
            .map(String::as_str)
            .collect()
    }

    /// Events the current state has transition rules for, sorted. Empty
    /// when the current state is undeclared.
    pub fn events(&self) -> Vec<&str> {
        self.config
            .state_def(&self.state)
            .map(StateDef::events)
            .unwrap_or_default()
    }

    /// Step back to the previously visited state.
    ///
    /// Returns `false` and mutates nothing when the undo stack is empty.
    /// On success the abandoned state goes on the redo stack.
    pub fn undo(&mut self) -> bool {
        match self.history.undo(self.state.clone()) {
            Some(prev) => {
                let from = std::mem::replace(&mut self.state, prev);
                debug!(from = %from, to = %self.state, "undo");
                self.journal.record(from, self.state.clone(), None);
                true
            }
            None => false,
        }
    }

    /// Step forward again after an undo.
    ///
    /// Returns `false` and mutates nothing when the redo stack is empty,
    /// which includes any point after a fresh manual transition discarded
    /// the redo path.
    pub fn redo(&mut self) -> bool {
        match self.history.redo(self.state.clone()) {
            Some(next) => {
                let from = std::mem::replace(&mut self.state, next);
                debug!(from = %from, to = %self.state, "redo");
                self.journal.record(from, self.state.clone(), None);
                true
            }
            None => false,
        }
    }

    /// Whether an undo would succeed.
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Whether a redo would succeed.
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Empty the undo stack, the redo stack and the journal. The current
    /// state is untouched.
    pub fn clear_history(&mut self) {
        self.history.clear();
        self.journal.clear();
    }

    // All state changes funnel through here so the no-op and atomicity
    // rules hold for change_state, trigger and reset alike.
    fn transition_to(&mut self, target: &str, event: Option<&str>) -> Result<(), MachineError> {
        if !self.config.contains(target) {
            return Err(MachineError::InvalidState {
                state: target.to_string(),
            });
        }
        if self.state == target {
            // Self-transitions are absorbed: no history push, no redo clear.
            return Ok(());
        }
        let prev = std::mem::replace(&mut self.state, target.to_string());
        debug!(from = %prev, to = %self.state, event = event, "state changed");
        self.history.record(prev.clone());
        self.journal
            .record(prev, self.state.clone(), event.map(str::to_string));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigError;
    use serde_json::json;

    fn player_config() -> Config {
        Config::builder()
            .initial("idle")
            .transition("idle", "start", "running")
            .transition("running", "stop", "idle")
            .transition("running", "pause", "paused")
            .transition("paused", "resume", "running")
            .build()
            .unwrap()
    }

    #[test]
    fn fresh_machine_starts_at_initial() {
        let machine = Machine::new(player_config());
        assert_eq!(machine.current_state(), "idle");
        assert!(!machine.can_undo());
        assert!(!machine.can_redo());
        assert!(machine.journal().is_empty());
    }

    #[test]
    fn from_json_null_fails_with_missing_configuration() {
        let result = Machine::from_json(&serde_json::Value::Null);
        assert!(matches!(
            result,
            Err(MachineError::Configuration(ConfigError::Missing))
        ));
    }

    #[test]
    fn change_state_moves_and_records() {
        let mut machine = Machine::new(player_config());
        machine.change_state("running").unwrap();

        assert_eq!(machine.current_state(), "running");
        assert_eq!(machine.history().undo_states(), &["idle"]);
        assert_eq!(machine.journal().path(), vec!["idle", "running"]);
    }

    #[test]
    fn change_state_rejects_undeclared_target() {
        let mut machine = Machine::new(player_config());
        machine.change_state("running").unwrap();
        machine.undo();

        let before_history = machine.history().clone();
        let before_len = machine.journal().len();

        let result = machine.change_state("exploded");
        assert!(matches!(
            result,
            Err(MachineError::InvalidState { state }) if state == "exploded"
        ));

        // Atomicity: the failed call changed nothing, redo path included.
        assert_eq!(machine.current_state(), "idle");
        assert_eq!(machine.history(), &before_history);
        assert_eq!(machine.journal().len(), before_len);
        assert!(machine.can_redo());
    }

    #[test]
    fn self_transition_is_absorbed() {
        let mut machine = Machine::new(player_config());
        machine.change_state("running").unwrap();
        machine.undo();
        assert!(machine.can_redo());

        machine.change_state("idle").unwrap();

        // No history push, no redo invalidation, no journal entry.
        assert!(machine.can_redo());
        assert!(machine.history().undo_states().is_empty());
    }

    #[test]
    fn trigger_follows_transition_rule() {
        let mut machine = Machine::new(player_config());
        machine.trigger("start").unwrap();
        assert_eq!(machine.current_state(), "running");

        let record = &machine.journal().records()[0];
        assert_eq!(record.event.as_deref(), Some("start"));
    }

    #[test]
    fn trigger_unknown_event_is_distinct_from_bad_target() {
        let mut machine = Machine::new(player_config());

        // No 'resume' rule from idle.
        let result = machine.trigger("resume");
        assert!(matches!(
            result,
            Err(MachineError::UnknownTransition { state, event })
                if state == "idle" && event == "resume"
        ));
        assert_eq!(machine.current_state(), "idle");
    }

    #[test]
    fn trigger_surfaces_misconfigured_target_lazily() {
        let config = Config::builder()
            .initial("idle")
            .transition("idle", "launch", "orbit")
            .build()
            .unwrap();
        let mut machine = Machine::new(config);

        let result = machine.trigger("launch");
        assert!(matches!(
            result,
            Err(MachineError::InvalidState { state }) if state == "orbit"
        ));
        assert_eq!(machine.current_state(), "idle");
        assert!(machine.journal().is_empty());
    }

    #[test]
    fn trigger_from_undeclared_current_state() {
        let config = Config::new("ghost", [("idle", StateDef::new())]).unwrap();
        let mut machine = Machine::new(config);
        assert_eq!(machine.current_state(), "ghost");

        let result = machine.trigger("anything");
        assert!(matches!(
            result,
            Err(MachineError::InvalidState { state }) if state == "ghost"
        ));
    }

    #[test]
    fn reset_returns_to_initial() {
        let mut machine = Machine::new(player_config());
        machine.trigger("start").unwrap();
        machine.trigger("pause").unwrap();

        machine.reset().unwrap();
        assert_eq!(machine.current_state(), "idle");
        assert_eq!(machine.history().undo_states(), &["idle", "running", "paused"]);
    }

    #[test]
    fn reset_at_initial_touches_nothing() {
        let mut machine = Machine::new(player_config());
        machine.change_state("running").unwrap();
        machine.undo();

        machine.reset().unwrap();
        assert!(machine.can_redo());
        assert!(machine.history().undo_states().is_empty());
    }

    #[test]
    fn states_preserve_declared_order() {
        let machine = Machine::new(player_config());
        assert_eq!(machine.states(), vec!["idle", "running", "paused"]);
    }

    #[test]
    fn states_handling_filters_by_event() {
        let machine = Machine::new(player_config());
        assert_eq!(machine.states_handling("stop"), vec!["running"]);
        assert_eq!(machine.states_handling("start"), vec!["idle"]);
        assert!(machine.states_handling("explode").is_empty());
    }

    #[test]
    fn events_lists_current_state_rules() {
        let mut machine = Machine::new(player_config());
        machine.trigger("start").unwrap();
        assert_eq!(machine.events(), vec!["pause", "stop"]);
    }

    #[test]
    fn undo_redo_round_trip() {
        let mut machine = Machine::new(player_config());
        machine.trigger("start").unwrap();
        machine.trigger("pause").unwrap();

        assert!(machine.undo());
        assert_eq!(machine.current_state(), "running");
        assert!(machine.redo());
        assert_eq!(machine.current_state(), "paused");

        // redo(); undo() is an identity on state too.
        assert!(machine.undo());
        assert_eq!(machine.current_state(), "running");
    }

    #[test]
    fn undo_exhaustion_returns_false() {
        let mut machine = Machine::new(player_config());
        assert!(!machine.undo());
        assert!(!machine.redo());
        assert_eq!(machine.current_state(), "idle");
    }

    #[test]
    fn manual_transition_after_undo_discards_redo_path() {
        let mut machine = Machine::new(player_config());
        machine.trigger("start").unwrap();
        machine.trigger("pause").unwrap();
        machine.undo();

        machine.trigger("stop").unwrap();
        assert!(!machine.redo());
        assert_eq!(machine.current_state(), "idle");
    }

    #[test]
    fn clear_history_keeps_state() {
        let mut machine = Machine::new(player_config());
        machine.trigger("start").unwrap();
        machine.undo();

        machine.clear_history();
        assert_eq!(machine.current_state(), "idle");
        assert!(!machine.can_undo());
        assert!(!machine.can_redo());
        assert!(machine.journal().is_empty());
    }

    #[test]
    fn journal_logs_undo_and_redo() {
        let mut machine = Machine::new(player_config());
        machine.trigger("start").unwrap();
        machine.undo();
        machine.redo();

        assert_eq!(
            machine.journal().path(),
            vec!["idle", "running", "idle", "running"]
        );
    }

    #[test]
    fn from_json_builds_working_machine() {
        let mut machine = Machine::from_json(&json!({
            "initial": "idle",
            "states": [
                {"name": "idle", "transitions": {"start": "running"}},
                {"name": "running", "transitions": {"stop": "idle"}}
            ]
        }))
        .unwrap();

        machine.trigger("start").unwrap();
        assert_eq!(machine.current_state(), "running");
    }
}
