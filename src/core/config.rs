//! Declarative machine configuration.

use super::table::Table;
use serde::{Deserialize, Serialize};

/// Transitions declared for a single state.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateDef {
    /// Event identifier -> target state identifier
    #[serde(default)]
    pub transitions: Table<String>,
}

impl StateDef {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a transition, returning the updated definition.
    pub fn on(mut self, event: impl Into<String>, target: impl Into<String>) -> Self {
        self.transitions.insert(event, target.into());
        self
    }

    /// Target of `event`, if this state declares it.
    pub fn target(&self, event: &str) -> Option<&str> {
        self.transitions.get(event).map(String::as_str)
    }

    pub fn handles(&self, event: &str) -> bool {
        self.transitions.contains_key(event)
    }
}

/// Machine configuration: the initial state and the state table.
///
/// A configuration is plain data. Constructing one performs no checks; use
/// [`Config::validate`] (or build it through
/// [`ConfigBuilder`](crate::builder::ConfigBuilder)) to catch undeclared
/// initial or target states up front.
///
/// # Example
///
/// ```rust
/// use fsm::core::{Config, StateDef};
///
/// let config = Config::new(
///     "idle",
///     [
///         ("idle", StateDef::new().on("go", "running")),
///         ("running", StateDef::new().on("stop", "idle")),
///     ],
/// );
///
/// assert_eq!(config.target("idle", "go"), Some("running"));
/// assert!(config.has_state("running"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Identifier of the starting state
    pub initial: String,
    /// State identifier -> definition, in declared order
    pub states: Table<StateDef>,
}

impl Config {
    pub fn new<K, I>(initial: impl Into<String>, states: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, StateDef)>,
    {
        Self {
            initial: initial.into(),
            states: states.into_iter().collect(),
        }
    }

    pub fn state(&self, name: &str) -> Option<&StateDef> {
        self.states.get(name)
    }

    pub fn has_state(&self, name: &str) -> bool {
        self.states.contains_key(name)
    }

    /// Declared state identifiers, in order.
    pub fn state_names(&self) -> impl Iterator<Item = &str> {
        self.states.keys()
    }

    /// Target reached by firing `event` from `state`.
    ///
    /// Returns `None` when `state` is undeclared or has no such transition.
    pub fn target(&self, state: &str, event: &str) -> Option<&str> {
        self.state(state).and_then(|def| def.target(event))
    }
}
