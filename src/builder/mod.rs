//! Builder API for ergonomic configuration construction.
//!
//! This module provides fluent builders and a macro for writing machine
//! configurations with minimal boilerplate.

pub mod config;
pub mod error;
pub mod macros;
pub mod state;

pub use config::ConfigBuilder;
pub use error::BuildError;
pub use state::StateBuilder;

use crate::core::Config;

/// Build a validated configuration from `(from, event, to)` triples.
///
/// Every state named in a triple, as source or target, is declared in
/// first-seen order. Targets with no triple of their own become terminal
/// states with no transitions.
///
/// # Example
///
/// ```
/// use fsm::builder::from_transitions;
///
/// let config = from_transitions(
///     "idle",
///     [("idle", "go", "running"), ("running", "stop", "idle")],
/// )
/// .unwrap();
///
/// assert_eq!(config.target("idle", "go"), Some("running"));
/// ```
pub fn from_transitions<'a>(
    initial: &str,
    transitions: impl IntoIterator<Item = (&'a str, &'a str, &'a str)>,
) -> Result<Config, BuildError> {
    transitions
        .into_iter()
        .fold(ConfigBuilder::new().initial(initial), |builder, (from, event, to)| {
            builder.transition(from, event, to).sink(to)
        })
        .build()
}
