//! Builder for constructing state machines.

use crate::builder::error::BuildError;
use crate::builder::state::StateBuilder;
use crate::core::{Config, EventId, StateDefinition, StateId, StateMachine};
use std::collections::BTreeMap;

/// Builder for constructing state machines with a fluent API.
///
/// States can be declared whole with [`state`](Self::state) or one
/// transition at a time with [`transition`](Self::transition); both forms
/// may be mixed and repeated declarations of a state are merged.
#[derive(Clone, Debug, Default)]
pub struct StateMachineBuilder {
    initial: Option<StateId>,
    states: Vec<StateBuilder>,
}

impl StateMachineBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: impl Into<StateId>) -> Self {
        self.initial = Some(state.into());
        self
    }

    /// Declare a state using a builder.
    pub fn state(mut self, state: StateBuilder) -> Self {
        self.states.push(state);
        self
    }

    /// Declare a single transition, declaring `from` if needed.
    ///
    /// `to` is not declared as a state by this call.
    pub fn transition(
        self,
        from: impl Into<StateId>,
        event: impl Into<EventId>,
        to: impl Into<StateId>,
    ) -> Self {
        self.state(StateBuilder::new(from).on(event, to))
    }

    /// Build the configuration.
    /// Returns an error if required fields are missing or transitions conflict.
    pub fn build_config(self) -> Result<Config, BuildError> {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;

        if self.states.is_empty() {
            return Err(BuildError::NoStates);
        }

        let mut states: BTreeMap<StateId, StateDefinition> = BTreeMap::new();
        for state in &self.states {
            let definition = states.entry(state.id().to_string()).or_default();
            state.merge_into(definition)?;
        }

        Ok(Config { initial, states })
    }

    /// Build the state machine.
    pub fn build(self) -> Result<StateMachine, BuildError> {
        Ok(StateMachine::new(self.build_config()?))
    }
}
