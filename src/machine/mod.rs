//! The state machine engine.
//!
//! [`Fsm`] owns its configuration, the current state and the undo/redo
//! history. Forward changes (`change_state`, `trigger`) report rejection
//! through [`FsmError`]; history navigation (`undo`, `redo`) reports
//! availability through a plain `bool`.

mod error;

pub use error::FsmError;

use crate::builder::BuildError;
use crate::core::{Config, History};

/// Finite state machine with undo/redo history.
///
/// # Example
///
/// ```rust
/// use fsm::core::{Config, StateDef};
/// use fsm::machine::Fsm;
///
/// let config = Config::new(
///     "idle",
///     [
///         ("idle", StateDef::new().on("go", "running")),
///         ("running", StateDef::new().on("stop", "idle")),
///     ],
/// );
///
/// let mut fsm = Fsm::new(config);
/// fsm.trigger("go").unwrap();
/// assert_eq!(fsm.state(), "running");
///
/// assert!(fsm.trigger("go").is_err());
/// assert!(fsm.undo());
/// assert_eq!(fsm.state(), "idle");
/// ```
#[derive(Clone, Debug)]
pub struct Fsm {
    config: Config,
    state: String,
    history: History,
}

impl Fsm {
    /// Create a machine in the configured initial state.
    ///
    /// The configuration is taken as-is. See [`Fsm::try_new`] for a
    /// constructor that rejects undeclared initial or target states.
    pub fn new(config: Config) -> Self {
        let state = config.initial.clone();
        tracing::debug!(initial = %state, states = config.states.len(), "fsm created");
        Self {
            config,
            state,
            history: History::new(),
        }
    }

    /// Validate the configuration, then create the machine.
    ///
    /// Every defect is reported at once in [`BuildError::InvalidConfig`].
    pub fn try_new(config: Config) -> Result<Self, BuildError> {
        let issues = config.issues();
        if !issues.is_empty() {
            return Err(BuildError::InvalidConfig(issues));
        }
        Ok(Self::new(config))
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Current state.
    pub fn state(&self) -> &str {
        &self.state
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Whether the current state is declared in the configuration.
    ///
    /// Only a transition to an undeclared target can make this `false`.
    pub fn is_declared(&self) -> bool {
        self.config.has_state(&self.state)
    }

    /// Force the machine into `target`, ignoring the transition table.
    pub fn change_state(&mut self, target: &str) -> Result<(), FsmError> {
        if !self.config.has_state(target) {
            tracing::trace!(state = %self.state, requested = target, "change_state rejected");
            return Err(FsmError::InvalidState {
                state: target.to_string(),
            });
        }

        self.advance(target.to_string());
        tracing::debug!(state = %self.state, "state changed");
        Ok(())
    }

    /// Fire `event` from the current state.
    ///
    /// Fails when the current state declares no transition for `event`; the
    /// same event may be valid elsewhere.
    pub fn trigger(&mut self, event: &str) -> Result<(), FsmError> {
        let Some(target) = self.config.target(&self.state, event) else {
            tracing::trace!(state = %self.state, event, "trigger rejected");
            return Err(FsmError::InvalidEvent {
                state: self.state.clone(),
                event: event.to_string(),
            });
        };

        let target = target.to_string();
        if !self.config.has_state(&target) {
            tracing::warn!(
                from = %self.state,
                event,
                to = %target,
                "transition to undeclared state"
            );
        }

        let from = self.advance(target);
        tracing::debug!(%from, event, to = %self.state, "transition");
        Ok(())
    }

    /// Return to the initial state.
    ///
    /// Not recorded in history: the undo stack is not pushed and the redo
    /// stack is kept.
    pub fn reset(&mut self) {
        self.state.clone_from(&self.config.initial);
        tracing::debug!(state = %self.state, "reset");
    }

    /// Declared states, in order.
    ///
    /// With `Some(event)`, only the states whose transition table contains
    /// `event`.
    pub fn states(&self, event: Option<&str>) -> Vec<&str> {
        self.config
            .states
            .iter()
            .filter(|(_, def)| event.is_none_or(|e| def.handles(e)))
            .map(|(name, _)| name)
            .collect()
    }

    /// Events the current state has transitions for, in declared order.
    pub fn events(&self) -> Vec<&str> {
        self.config
            .state(&self.state)
            .map(|def| def.transitions.keys().collect())
            .unwrap_or_default()
    }

    /// Go back to the previous state. Returns `false` if there is none.
    pub fn undo(&mut self) -> bool {
        match self.history.step_back(&self.state) {
            Some(previous) => {
                tracing::debug!(from = %self.state, to = %previous, "undo");
                self.state = previous;
                true
            }
            None => false,
        }
    }

    /// Re-apply the last undone state. Returns `false` if there is none.
    pub fn redo(&mut self) -> bool {
        match self.history.step_forward(&self.state) {
            Some(next) => {
                tracing::debug!(from = %self.state, to = %next, "redo");
                self.state = next;
                true
            }
            None => false,
        }
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Drop both undo and redo history. The current state is kept.
    pub fn clear_history(&mut self) {
        self.history.clear();
        tracing::debug!(state = %self.state, "history cleared");
    }

    /// Move to `next`, recording the state being left. Returns that state.
    fn advance(&mut self, next: String) -> String {
        let previous = std::mem::replace(&mut self.state, next);
        self.history.record(previous.clone());
        previous
    }
}
