//! Declarative machine configuration.
//!
//! A [`Config`] describes a machine as plain data: an initial state plus a
//! table of states, each carrying an event -> target transition map. States
//! and events are opaque string identifiers; the engine imposes no naming
//! rules on them beyond uniqueness of state ids within the table.
//!
//! Configurations are deliberately not validated at construction time. A
//! `Config` whose `initial` or transition targets reference undeclared
//! states builds fine, and the problem only surfaces when the machine tries
//! to enter the missing state. Call [`Config::validate`] to opt into eager
//! checking.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub mod builder;
pub mod error;

pub use builder::ConfigBuilder;
pub use error::ConfigError;

/// Transition table for a single state: event id -> target state id.
///
/// # Example
///
/// ```rust
/// use turnstile::StateDef;
///
/// let def = StateDef::with_transitions([("start", "running")]);
/// assert_eq!(def.target("start"), Some("running"));
/// assert!(!def.handles("stop"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateDef {
    /// Event identifier -> target state identifier.
    #[serde(default)]
    pub transitions: HashMap<String, String>,
}

impl StateDef {
    /// Create an empty transition table (a state with no outgoing edges).
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a table from `(event, target)` pairs.
    pub fn with_transitions<I, E, T>(transitions: I) -> Self
    where
        I: IntoIterator<Item = (E, T)>,
        E: Into<String>,
        T: Into<String>,
    {
        Self {
            transitions: transitions
                .into_iter()
                .map(|(event, target)| (event.into(), target.into()))
                .collect(),
        }
    }

    /// Target state for `event`, if this state handles it.
    pub fn target(&self, event: &str) -> Option<&str> {
        self.transitions.get(event).map(String::as_str)
    }

    /// Whether this state has a transition rule for `event`.
    pub fn handles(&self, event: &str) -> bool {
        self.transitions.contains_key(event)
    }

    /// Events this state has transition rules for, sorted for stable output.
    pub fn events(&self) -> Vec<&str> {
        let mut events: Vec<&str> = self.transitions.keys().map(String::as_str).collect();
        events.sort_unstable();
        events
    }
}

/// One state entry in the JSON DSL.
#[derive(Clone, Debug, Serialize, Deserialize)]
struct StateEntry {
    name: String,
    #[serde(default)]
    transitions: HashMap<String, String>,
}

/// Raw configuration as accepted by [`Config::from_json`].
#[derive(Clone, Debug, Serialize, Deserialize)]
struct ConfigRaw {
    initial: String,
    states: Vec<StateEntry>,
}

/// Immutable description of a state machine.
///
/// Holds the initial state and the state table. The order in which states
/// were declared is preserved and drives the ordering of
/// [`Machine::states`](crate::Machine::states) and
/// [`Machine::states_handling`](crate::Machine::states_handling).
///
/// # Example
///
/// ```rust
/// use turnstile::Config;
///
/// let config = Config::builder()
///     .initial("idle")
///     .transition("idle", "start", "running")
///     .transition("running", "stop", "idle")
///     .build()?;
///
/// assert_eq!(config.initial(), "idle");
/// assert!(config.contains("running"));
/// config.validate()?;
/// # Ok::<(), turnstile::ConfigError>(())
/// ```
#[derive(Clone, Debug)]
pub struct Config {
    initial: String,
    order: Vec<String>,
    states: HashMap<String, StateDef>,
}

impl Config {
    /// Build a configuration from typed parts.
    ///
    /// The iteration order of `states` becomes the declared order. Fails
    /// with [`ConfigError::DuplicateState`] if a state id repeats. Does not
    /// check that `initial` or transition targets are declared; see
    /// [`Config::validate`].
    pub fn new<I, S>(initial: impl Into<String>, states: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (S, StateDef)>,
        S: Into<String>,
    {
        let mut order = Vec::new();
        let mut table = HashMap::new();
        for (name, def) in states {
            let name = name.into();
            if table.insert(name.clone(), def).is_some() {
                return Err(ConfigError::DuplicateState { state: name });
            }
            order.push(name);
        }
        Ok(Self {
            initial: initial.into(),
            order,
            states: table,
        })
    }

    /// Start a fluent [`ConfigBuilder`].
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::new()
    }

    /// Parse a configuration from the in-memory JSON DSL:
    ///
    /// ```json
    /// {
    ///   "initial": "idle",
    ///   "states": [
    ///     {"name": "idle", "transitions": {"start": "running"}},
    ///     {"name": "running", "transitions": {"stop": "idle"}}
    ///   ]
    /// }
    /// ```
    ///
    /// JSON null means "no configuration supplied" and fails with
    /// [`ConfigError::Missing`]. The `states` array order becomes the
    /// declared order.
    pub fn from_json(json: &serde_json::Value) -> Result<Self, ConfigError> {
        if json.is_null() {
            return Err(ConfigError::Missing);
        }
        let raw: ConfigRaw = serde_json::from_value(json.clone())?;
        Self::new(
            raw.initial,
            raw.states.into_iter().map(|entry| {
                (
                    entry.name,
                    StateDef {
                        transitions: entry.transitions,
                    },
                )
            }),
        )
    }

    pub(crate) fn from_parts(
        initial: String,
        order: Vec<String>,
        states: HashMap<String, StateDef>,
    ) -> Self {
        Self {
            initial,
            order,
            states,
        }
    }

    /// The configured initial state id.
    pub fn initial(&self) -> &str {
        &self.initial
    }

    /// All declared state ids, in declared order.
    pub fn state_ids(&self) -> &[String] {
        &self.order
    }

    /// The transition table for `id`, if declared.
    pub fn state_def(&self, id: &str) -> Option<&StateDef> {
        self.states.get(id)
    }

    /// Whether `id` is a declared state.
    pub fn contains(&self, id: &str) -> bool {
        self.states.contains_key(id)
    }

    /// Number of declared states.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether the state table is empty.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Opt-in eager validation.
    ///
    /// Checks that the initial state and every transition target are
    /// declared states. Never called implicitly: a configuration that fails
    /// `validate` still drives a machine, and the broken references surface
    /// lazily as [`MachineError::InvalidState`](crate::MachineError::InvalidState)
    /// when reached.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.states.contains_key(&self.initial) {
            return Err(ConfigError::UndeclaredInitial {
                state: self.initial.clone(),
            });
        }
        for name in &self.order {
            for (event, target) in &self.states[name].transitions {
                if !self.states.contains_key(target) {
                    return Err(ConfigError::UndeclaredTarget {
                        from: name.clone(),
                        event: event.clone(),
                        to: target.clone(),
                    });
                }
            }
        }
        Ok(())
    }
}
