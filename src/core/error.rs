//! Errors raised by state machine operations.

use thiserror::Error;

/// Result type alias for state machine operations.
pub type MachineResult<T> = Result<T, MachineError>;

/// Errors that can occur when constructing or driving a state machine.
///
/// Every failing operation leaves the machine exactly as it was before
/// the call.
#[derive(Debug, Error)]
pub enum MachineError {
    /// The machine was created without a configuration.
    #[error("Config is not defined")]
    MissingConfig,

    /// Configuration text could not be parsed.
    #[error("Config could not be parsed: {0}")]
    ConfigParse(#[from] serde_json::Error),

    /// `change_state` was asked to move into an undeclared state.
    #[error("No such state: '{state}'")]
    InvalidState { state: String },

    /// `trigger` was called with an event the current state does not define.
    #[error("No such event '{event}' for current state '{state}'")]
    InvalidEvent { event: String, state: String },
}

impl MachineError {
    /// Whether this error belongs to the configuration family
    /// (absent or unparseable configuration).
    pub fn is_config_error(&self) -> bool {
        matches!(self, Self::MissingConfig | Self::ConfigParse(_))
    }
}
