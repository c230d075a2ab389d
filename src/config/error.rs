//! Configuration errors.

use thiserror::Error;

/// Errors raised while building or validating a [`Config`](crate::Config).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No configuration was supplied (the declarative input was JSON null).
    #[error("no configuration supplied")]
    Missing,

    /// The declarative input did not match the expected shape.
    #[error("malformed configuration: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("initial state not specified. Call .initial(state) before .build()")]
    MissingInitialState,

    #[error("configuration declares no states")]
    NoStates,

    #[error("state '{state}' declared more than once")]
    DuplicateState { state: String },

    /// Reported by [`Config::validate`](crate::Config::validate) when the
    /// initial state is not in the state table.
    #[error("initial state '{state}' is not a declared state")]
    UndeclaredInitial { state: String },

    /// Reported by [`Config::validate`](crate::Config::validate) when a
    /// transition points at a state missing from the state table.
    #[error("transition from '{from}' on '{event}' targets undeclared state '{to}'")]
    UndeclaredTarget {
        from: String,
        event: String,
        to: String,
    },
}
