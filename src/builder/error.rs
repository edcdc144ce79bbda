//! Build errors for the state machine builder.

use thiserror::Error;

/// Errors that can occur when building configurations and machines.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("Initial state not specified. Call .initial(state) before .build()")]
    MissingInitialState,

    #[error("No states defined. Add at least one state or transition")]
    NoStates,

    #[error("Event '{event}' is mapped more than once from state '{state}'")]
    DuplicateTransition { state: String, event: String },
}
