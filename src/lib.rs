//! fsm: a configurable finite state machine with undo/redo history
//!
//! A machine is described declaratively: an initial state and, for each
//! state, a table mapping event names to target states. The engine tracks the
//! current state, fires events, validates every request against the
//! configuration and keeps an undo/redo history of visited states.
//!
//! # Core Concepts
//!
//! - **Config**: the immutable machine description (`core::Config`)
//! - **Fsm**: the engine holding the current state and history (`machine::Fsm`)
//! - **History**: two LIFO stacks, undo and redo (`core::History`)
//! - **Builders**: validated construction (`builder::ConfigBuilder`, `fsm_config!`)
//!
//! Forward changes return `Result<(), FsmError>`; history navigation returns
//! `bool`. A rejected operation never mutates the machine.
//!
//! # Example
//!
//! ```rust
//! use fsm::{fsm_config, Fsm};
//!
//! let config = fsm_config! {
//!     initial: idle,
//!     states: {
//!         idle: { go => running },
//!         running: { stop => idle },
//!     }
//! };
//!
//! let mut fsm = Fsm::new(config);
//! fsm.trigger("go").unwrap();
//! fsm.trigger("stop").unwrap();
//! assert_eq!(fsm.state(), "idle");
//!
//! assert!(fsm.undo());
//! assert_eq!(fsm.state(), "running");
//! assert!(fsm.undo());
//! assert!(!fsm.undo());
//!
//! assert_eq!(fsm.states(None), vec!["idle", "running"]);
//! assert_eq!(fsm.states(Some("go")), vec!["idle"]);
//! ```

pub mod builder;
pub mod core;
pub mod machine;

// Re-export commonly used types
pub use builder::{BuildError, ConfigBuilder, StateBuilder};
pub use core::{Config, ConfigIssue, History, StateDef};
pub use machine::{Fsm, FsmError};
