//! Core data types of the state machine.
//!
//! This module contains the plain data the engine works on:
//! - `Config` / `StateDef`, the declarative machine description
//! - `Table`, the ordered mapping both are built from
//! - `History`, the undo/redo stacks
//! - `ConfigIssue`, the defects `Config::validate` reports
//!
//! Nothing here logs or fails at runtime; the engine in
//! [`machine`](crate::machine) owns all state changes.

mod config;
mod history;
mod table;
mod validation;

pub use config::{Config, StateDef};
pub use history::History;
pub use table::Table;
pub use validation::ConfigIssue;
