//! Builder API for ergonomic state machine construction.
//!
//! Builders assemble a [`Config`](crate::core::Config) in code instead of
//! JSON, catching missing initial states and conflicting transitions
//! before a machine exists.

pub mod error;
pub mod machine;
pub mod state;

pub use error::BuildError;
pub use machine::StateMachineBuilder;
pub use state::StateBuilder;
