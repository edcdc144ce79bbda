//! Waypoint: a configuration-driven finite state machine
//!
//! A machine is described declaratively: an initial state plus, for every
//! state, the events it accepts and where each event leads. The machine
//! tracks the current state, applies transitions and keeps undo/redo
//! history of the states it has visited.
//!
//! # Core Concepts
//!
//! - **Config**: Read-only description of states and transitions
//! - **StateMachine**: Current state plus undo/redo stacks
//! - **Checkpoint**: Serializable snapshot of a machine's position and history
//!
//! # Example
//!
//! ```rust
//! use waypoint::builder::StateMachineBuilder;
//!
//! let mut machine = StateMachineBuilder::new()
//!     .initial("off")
//!     .transition("off", "turnOn", "on")
//!     .transition("on", "turnOff", "off")
//!     .build()
//!     .unwrap();
//!
//! machine.trigger("turnOn").unwrap().trigger("turnOff").unwrap();
//! assert_eq!(machine.state(), "off");
//!
//! assert!(machine.undo());
//! assert_eq!(machine.state(), "on");
//! assert!(machine.redo());
//! assert_eq!(machine.state(), "off");
//! ```
//!
//! Transition targets are not checked against the declared states when a
//! machine is built; `trigger` will happily move into an undeclared state.
//! Call [`Config::validate`] to catch such configurations up front.

pub mod builder;
pub mod checkpoint;
pub mod core;

// Re-export commonly used types
pub use crate::core::{Config, MachineError, MachineResult, StateDefinition, StateMachine};
