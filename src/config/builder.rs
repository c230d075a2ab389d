//! Fluent builder for machine configurations.

use crate::config::error::ConfigError;
use crate::config::{Config, StateDef};
use std::collections::HashMap;

/// Builder for [`Config`] values.
///
/// `transition` implicitly declares its source state on first use, so most
/// configurations need no explicit `state` calls; `state` exists for states
/// with no outgoing transitions.
///
/// The builder stays lazy about cross-references: it does not require the
/// initial state or transition targets to be declared. Run
/// [`Config::validate`] after `build` for eager checking.
///
/// # Example
///
/// ```rust
/// use turnstile::Config;
///
/// let config = Config::builder()
///     .initial("draft")
///     .transition("draft", "submit", "review")
///     .transition("review", "approve", "published")
///     .transition("review", "reject", "draft")
///     .state("published")
///     .build()?;
///
/// assert_eq!(config.state_ids(), &["draft", "review", "published"]);
/// # Ok::<(), turnstile::ConfigError>(())
/// ```
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    initial: Option<String>,
    order: Vec<String>,
    states: HashMap<String, StateDef>,
    // First redeclared state id, reported at build().
    duplicate: Option<String>,
}

impl ConfigBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: impl Into<String>) -> Self {
        self.initial = Some(state.into());
        self
    }

    /// Declare a state with no outgoing transitions.
    ///
    /// Declaring the same state twice makes `build` fail with
    /// [`ConfigError::DuplicateState`].
    pub fn state(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        if self.states.contains_key(&name) {
            self.duplicate.get_or_insert(name);
        } else {
            self.order.push(name.clone());
            self.states.insert(name, StateDef::new());
        }
        self
    }

    /// Add a transition rule, declaring `from` if it is not declared yet.
    pub fn transition(
        mut self,
        from: impl Into<String>,
        event: impl Into<String>,
        to: impl Into<String>,
    ) -> Self {
        let from = from.into();
        if !self.states.contains_key(&from) {
            self.order.push(from.clone());
        }
        self.states
            .entry(from)
            .or_default()
            .transitions
            .insert(event.into(), to.into());
        self
    }

    /// Build the configuration.
    ///
    /// Fails with [`ConfigError::DuplicateState`] if a state was declared
    /// twice, [`ConfigError::MissingInitialState`] if `initial` was never
    /// called, and [`ConfigError::NoStates`] if the state table is empty.
    pub fn build(self) -> Result<Config, ConfigError> {
        if let Some(state) = self.duplicate {
            return Err(ConfigError::DuplicateState { state });
        }
        let initial = self.initial.ok_or(ConfigError::MissingInitialState)?;
        if self.order.is_empty() {
            return Err(ConfigError::NoStates);
        }
        Ok(Config::from_parts(initial, self.order, self.states))
    }
}
