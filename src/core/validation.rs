//! Configuration checks.
//!
//! Checks run with Stillwater's `Validation`, so a single pass reports every
//! defect in a configuration instead of stopping at the first one.

use super::config::Config;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use thiserror::Error;

/// A single defect found in a [`Config`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigIssue {
    #[error("configuration declares no states")]
    NoStates,

    #[error("initial state '{initial}' is not declared")]
    UnknownInitial { initial: String },

    #[error("transition '{event}' from '{state}' targets undeclared state '{target}'")]
    UnknownTarget {
        state: String,
        event: String,
        target: String,
    },
}

impl Config {
    /// Check the configuration, accumulating ALL issues.
    ///
    /// # Example
    ///
    /// ```rust
    /// use fsm::core::{Config, StateDef};
    /// use stillwater::validation::Validation;
    ///
    /// let config = Config::new("start", [("idle", StateDef::new().on("go", "nowhere"))]);
    ///
    /// match config.validate() {
    ///     Validation::Failure(issues) => assert_eq!(issues.len(), 2),
    ///     Validation::Success(_) => panic!("expected issues"),
    /// }
    /// ```
    pub fn validate(&self) -> Validation<(), NonEmptyVec<ConfigIssue>> {
        let mut checks: Vec<Validation<(), NonEmptyVec<ConfigIssue>>> = Vec::new();

        if self.states.is_empty() {
            checks.push(Validation::fail(ConfigIssue::NoStates));
        }

        if !self.has_state(&self.initial) {
            checks.push(Validation::fail(ConfigIssue::UnknownInitial {
                initial: self.initial.clone(),
            }));
        }

        for (state, def) in self.states.iter() {
            for (event, target) in def.transitions.iter() {
                if !self.has_state(target) {
                    checks.push(Validation::fail(ConfigIssue::UnknownTarget {
                        state: state.to_string(),
                        event: event.to_string(),
                        target: target.clone(),
                    }));
                }
            }
        }

        Validation::all_vec(checks).map(|_| ())
    }

    /// Every issue in declared order; empty when the configuration is sound.
    pub fn issues(&self) -> Vec<ConfigIssue> {
        match self.validate() {
            Validation::Success(_) => Vec::new(),
            Validation::Failure(issues) => issues.iter().cloned().collect(),
        }
    }
}
