//! Builder for a single state's transition table.

use crate::core::StateDef;

/// Builder for one named state with a fluent API.
#[derive(Clone, Debug)]
pub struct StateBuilder {
    name: String,
    def: StateDef,
}

impl StateBuilder {
    /// Start a state with no transitions.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            def: StateDef::new(),
        }
    }

    /// Declare that `event` moves this state to `target`.
    ///
    /// Declaring the same event twice keeps the last target.
    pub fn on(mut self, event: impl Into<String>, target: impl Into<String>) -> Self {
        self.def = self.def.on(event, target);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Finish the state, yielding its name and definition.
    pub fn build(self) -> (String, StateDef) {
        (self.name, self.def)
    }
}
