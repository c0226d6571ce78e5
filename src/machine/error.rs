//! Errors raised by machine operations.

use thiserror::Error;

/// Rejected state change. The machine is left exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FsmError {
    #[error("state '{state}' is not declared in this configuration")]
    InvalidState { state: String },

    #[error("state '{state}' has no transition for event '{event}'")]
    InvalidEvent { state: String, event: String },
}

impl FsmError {
    /// Short machine-readable code for the error kind.
    pub fn code(&self) -> &'static str {
        match self {
            FsmError::InvalidState { .. } => "INVALID_STATE",
            FsmError::InvalidEvent { .. } => "INVALID_EVENT",
        }
    }
}
