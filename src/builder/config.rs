//! Builder for constructing machine configurations.

use crate::builder::error::BuildError;
use crate::builder::state::StateBuilder;
use crate::core::{Config, StateDef, Table};
use crate::machine::Fsm;
use stillwater::validation::Validation;

/// Builder for constructing a [`Config`] with a fluent API.
///
/// Unlike a struct literal, [`build`](ConfigBuilder::build) validates the
/// result and reports every issue it finds.
///
/// # Example
///
/// ```rust
/// use fsm::builder::{ConfigBuilder, StateBuilder};
///
/// let mut fsm = ConfigBuilder::new()
///     .initial("red")
///     .state(StateBuilder::new("red").on("next", "green"))
///     .state(StateBuilder::new("green").on("next", "yellow"))
///     .state(StateBuilder::new("yellow").on("next", "red"))
///     .build_machine()
///     .unwrap();
///
/// fsm.trigger("next").unwrap();
/// assert_eq!(fsm.state(), "green");
/// ```
#[derive(Clone, Debug, Default)]
pub struct ConfigBuilder {
    initial: Option<String>,
    states: Table<StateDef>,
    // Names passed to `state`, in call order
    declared: Vec<String>,
    duplicate: Option<String>,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: impl Into<String>) -> Self {
        self.initial = Some(state.into());
        self
    }

    /// Declare a state.
    ///
    /// Each state may be passed to `state` once; a repeat is reported by
    /// `build`. Transitions already added for the same name with
    /// [`transition`](ConfigBuilder::transition) are kept, and the
    /// builder's own transitions win on a shared event.
    pub fn state(mut self, builder: StateBuilder) -> Self {
        if self.declared.iter().any(|name| name == builder.name()) {
            self.duplicate.get_or_insert_with(|| builder.name().to_string());
            return self;
        }

        let (name, def) = builder.build();
        self.declared.push(name.clone());
        let merged = def
            .transitions
            .iter()
            .fold(self.states.get(&name).cloned().unwrap_or_default(), |acc, (event, target)| {
                acc.on(event, target.as_str())
            });
        self.states.insert(name, merged);
        self
    }

    /// Declare several states at once.
    pub fn states(self, builders: impl IntoIterator<Item = StateBuilder>) -> Self {
        builders.into_iter().fold(self, Self::state)
    }

    /// Add a single transition, declaring `from` if it is not declared yet.
    ///
    /// The call order relative to [`state`](ConfigBuilder::state) does not
    /// matter; both end up in the same transition table.
    pub fn transition(
        mut self,
        from: impl Into<String>,
        event: impl Into<String>,
        to: impl Into<String>,
    ) -> Self {
        let from = from.into();
        let def = self.states.get(&from).cloned().unwrap_or_default();
        self.states.insert(from, def.on(event, to));
        self
    }

    /// Declare `name` with no transitions unless it is already present.
    ///
    /// Useful for terminal states that only ever appear as targets.
    pub fn sink(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        if !self.states.contains_key(&name) {
            self.states.insert(name, StateDef::new());
        }
        self
    }

    /// Build and validate the configuration.
    pub fn build(self) -> Result<Config, BuildError> {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;

        if let Some(state) = self.duplicate {
            return Err(BuildError::DuplicateState { state });
        }

        let config = Config {
            initial,
            states: self.states,
        };

        match config.validate() {
            Validation::Success(_) => Ok(config),
            Validation::Failure(issues) => {
                Err(BuildError::InvalidConfig(issues.iter().cloned().collect()))
            }
        }
    }

    /// Build the configuration and start a machine on it.
    pub fn build_machine(self) -> Result<Fsm, BuildError> {
        self.build().map(Fsm::new)
    }
}
