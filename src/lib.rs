//! Turnstile: a declarative finite state machine engine with undoable history.
//!
//! A machine is described as plain data: an initial state plus a table of
//! states, each mapping event names to target states. There is no hierarchy
//! of state types to subclass. The engine tracks the current state, applies
//! event-driven transitions, and keeps a navigable history so callers can
//! undo and redo moves.
//!
//! # Core Concepts
//!
//! - **Config**: immutable description of states and transitions, built
//!   fluently, from typed parts, or from an in-memory JSON DSL
//! - **Machine**: the engine; owns the current state and all mutation paths
//! - **History**: undo/redo stacks over visited states
//! - **TransitionLog**: timestamped audit journal of every state change
//!
//! Errors split deliberately: bad configurations and bad transitions are
//! `Result` failures, while "nothing to undo/redo" is ordinary control flow
//! reported as a boolean.
//!
//! # Example
//!
//! ```rust
//! use turnstile::{Config, Machine};
//!
//! let config = Config::builder()
//!     .initial("idle")
//!     .transition("idle", "start", "running")
//!     .transition("running", "pause", "paused")
//!     .transition("running", "stop", "idle")
//!     .transition("paused", "resume", "running")
//!     .build()?;
//!
//! let mut machine = Machine::new(config);
//! machine.trigger("start")?;
//! machine.trigger("pause")?;
//! assert_eq!(machine.current_state(), "paused");
//!
//! assert!(machine.undo());
//! assert_eq!(machine.current_state(), "running");
//! assert!(machine.redo());
//! assert_eq!(machine.current_state(), "paused");
//!
//! // A fresh transition discards the redo path.
//! machine.undo();
//! machine.trigger("stop")?;
//! assert!(!machine.redo());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod config;
pub mod machine;

// Re-export commonly used types
pub use config::{Config, ConfigBuilder, ConfigError, StateDef};
pub use machine::{History, Machine, MachineError, TransitionLog, TransitionRecord};
