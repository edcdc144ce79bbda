//! Builder for a single state and its outgoing transitions.

use crate::builder::error::BuildError;
use crate::core::{EventId, StateDefinition, StateId};

/// Builder for declaring one state with a fluent API.
///
/// # Example
///
/// ```
/// use waypoint::builder::StateBuilder;
///
/// let (id, definition) = StateBuilder::new("locked")
///     .on("coin", "unlocked")
///     .on("push", "locked")
///     .build()
///     .unwrap();
///
/// assert_eq!(id, "locked");
/// assert_eq!(definition.transitions.len(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct StateBuilder {
    id: StateId,
    transitions: Vec<(EventId, StateId)>,
}

impl StateBuilder {
    /// Start declaring the state `id`.
    pub fn new(id: impl Into<StateId>) -> Self {
        Self {
            id: id.into(),
            transitions: Vec::new(),
        }
    }

    /// Map `event` to `target`.
    pub fn on(mut self, event: impl Into<EventId>, target: impl Into<StateId>) -> Self {
        self.transitions.push((event.into(), target.into()));
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Build the state definition.
    /// Returns an error if an event is mapped twice.
    pub fn build(self) -> Result<(StateId, StateDefinition), BuildError> {
        let mut definition = StateDefinition::new();
        self.merge_into(&mut definition)?;
        Ok((self.id, definition))
    }

    /// Add this builder's transitions to an existing definition of the same
    /// state.
    pub(crate) fn merge_into(&self, definition: &mut StateDefinition) -> Result<(), BuildError> {
        for (event, target) in &self.transitions {
            if definition.accepts(event) {
                return Err(BuildError::DuplicateTransition {
                    state: self.id.clone(),
                    event: event.clone(),
                });
            }
            definition
                .transitions
                .insert(event.clone(), target.clone());
        }
        Ok(())
    }
}
