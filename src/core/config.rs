//! Declarative state machine configuration.
//!
//! A configuration names the initial state and, for every state, the
//! events it accepts and the state each event leads to:
//!
//! ```json
//! {
//!   "initial": "off",
//!   "states": {
//!     "off": { "transitions": { "turnOn": "on" } },
//!     "on":  { "transitions": { "turnOff": "off" } }
//!   }
//! }
//! ```
//!
//! Configurations are read-only once handed to a machine. Transition
//! targets are not checked against the declared states; use
//! [`Config::validate`] to lint a configuration up front.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use thiserror::Error;

use super::error::MachineResult;

/// Identifier of a configured state.
pub type StateId = String;

/// Identifier of an event within a state's transition table.
pub type EventId = String;

/// Transitions available from a single state.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateDefinition {
    /// Event identifier -> target state identifier
    #[serde(default)]
    pub transitions: BTreeMap<EventId, StateId>,
}

impl StateDefinition {
    /// Create a state with no outgoing transitions.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a transition, returning the updated definition.
    pub fn on(mut self, event: impl Into<EventId>, target: impl Into<StateId>) -> Self {
        self.transitions.insert(event.into(), target.into());
        self
    }

    /// Whether this state defines a transition for `event`.
    pub fn accepts(&self, event: &str) -> bool {
        self.transitions.contains_key(event)
    }
}

/// Complete machine configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// State the machine starts in and returns to on reset
    pub initial: StateId,
    /// All declared states, keyed by identifier
    pub states: BTreeMap<StateId, StateDefinition>,
}

/// Problems reported by [`Config::validate`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigIssue {
    #[error("Initial state '{initial}' is not declared")]
    UnknownInitial { initial: StateId },

    #[error("Transition '{state}' --{event}--> '{target}' targets an undeclared state")]
    UnknownTarget {
        state: StateId,
        event: EventId,
        target: StateId,
    },
}

impl Config {
    /// Create a configuration from an initial state and state table.
    pub fn new(
        initial: impl Into<StateId>,
        states: impl IntoIterator<Item = (StateId, StateDefinition)>,
    ) -> Self {
        Self {
            initial: initial.into(),
            states: states.into_iter().collect(),
        }
    }

    /// Parse a configuration from JSON.
    pub fn from_json(json: &str) -> MachineResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Whether `state` is a declared state.
    pub fn has_state(&self, state: &str) -> bool {
        self.states.contains_key(state)
    }

    /// Look up a state's definition.
    pub fn state(&self, state: &str) -> Option<&StateDefinition> {
        self.states.get(state)
    }

    /// Target of the transition `event` from `state`, if one is defined.
    pub fn target(&self, state: &str, event: &str) -> Option<&str> {
        self.states
            .get(state)
            .and_then(|definition| definition.transitions.get(event))
            .map(String::as_str)
    }

    /// Lint the configuration, accumulating ALL issues.
    ///
    /// Machines never call this themselves: an undeclared initial state or
    /// transition target is accepted at construction time and only matters
    /// once the machine actually moves there.
    pub fn validate(&self) -> Validation<(), NonEmptyVec<ConfigIssue>> {
        let mut checks: Vec<Validation<(), NonEmptyVec<ConfigIssue>>> = Vec::new();

        if !self.has_state(&self.initial) {
            checks.push(Validation::fail(ConfigIssue::UnknownInitial {
                initial: self.initial.clone(),
            }));
        }

        for (state, definition) in &self.states {
            for (event, target) in &definition.transitions {
                let check = if self.has_state(target) {
                    Validation::success(())
                } else {
                    Validation::fail(ConfigIssue::UnknownTarget {
                        state: state.clone(),
                        event: event.clone(),
                        target: target.clone(),
                    })
                };
                checks.push(check);
            }
        }

        Validation::all_vec(checks).map(|_| ())
    }
}
