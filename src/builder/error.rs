//! Build errors for configuration builders.

use crate::core::ConfigIssue;
use thiserror::Error;

/// Errors that can occur when building a configuration or machine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    #[error("Initial state not specified. Call .initial(state) before .build()")]
    MissingInitialState,

    #[error("State '{state}' declared more than once")]
    DuplicateState { state: String },

    #[error("Invalid configuration: {}", summarize(.0))]
    InvalidConfig(Vec<ConfigIssue>),
}

fn summarize(issues: &[ConfigIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_config_lists_every_issue() {
        let err = BuildError::InvalidConfig(vec![
            ConfigIssue::NoStates,
            ConfigIssue::UnknownInitial {
                initial: "idle".to_string(),
            },
        ]);

        assert_eq!(
            err.to_string(),
            "Invalid configuration: configuration declares no states; initial state 'idle' is not declared"
        );
    }
}
