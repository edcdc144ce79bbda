//! Core state machine types and logic.
//!
//! This module contains the whole transition engine:
//! - Declarative configuration of states and their transitions
//! - Undo/redo history of visited states
//! - The state machine that ties them together

mod config;
mod error;
mod history;
mod machine;

pub use config::{Config, ConfigIssue, EventId, StateDefinition, StateId};
pub use error::{MachineError, MachineResult};
pub use history::History;
pub use machine::StateMachine;
