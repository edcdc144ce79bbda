//! Configuration-driven state machine with undo/redo history.

use super::config::{Config, StateId};
use super::error::{MachineError, MachineResult};
use super::history::History;
use tracing::{debug, warn};

/// Finite state machine driven by a [`Config`].
///
/// The machine tracks the current state, applies event-triggered
/// transitions from the configuration and keeps undo/redo history of
/// the states it has visited.
///
/// # Example
///
/// ```rust
/// use waypoint::{Config, StateMachine};
///
/// let config = Config::from_json(r#"{
///     "initial": "off",
///     "states": {
///         "off": { "transitions": { "turnOn": "on" } },
///         "on": { "transitions": { "turnOff": "off" } }
///     }
/// }"#).unwrap();
///
/// let mut machine = StateMachine::new(config);
/// machine.trigger("turnOn").unwrap();
/// assert_eq!(machine.state(), "on");
///
/// assert!(machine.undo());
/// assert_eq!(machine.state(), "off");
/// ```
#[derive(Clone, Debug)]
pub struct StateMachine {
    config: Config,
    current: StateId,
    history: History,
}

impl StateMachine {
    /// Create a machine in the configuration's initial state.
    ///
    /// The initial state is not required to be declared; a machine
    /// started in an undeclared state simply has no transitions.
    pub fn new(config: Config) -> Self {
        if !config.has_state(&config.initial) {
            warn!(initial = %config.initial, "fsm_initial_state_undeclared");
        }
        let current = config.initial.clone();
        Self::from_parts(config, current, History::new())
    }

    /// Create a machine from an optional configuration.
    ///
    /// Fails with [`MachineError::MissingConfig`] when no configuration is
    /// supplied.
    pub fn try_new(config: impl Into<Option<Config>>) -> MachineResult<Self> {
        config
            .into()
            .map(Self::new)
            .ok_or(MachineError::MissingConfig)
    }

    /// Create a machine from JSON configuration text.
    ///
    /// A JSON `null` is treated as an absent configuration.
    pub fn from_json(json: &str) -> MachineResult<Self> {
        let config: Option<Config> = serde_json::from_str(json)?;
        Self::try_new(config)
    }

    pub(crate) fn from_parts(config: Config, current: StateId, history: History) -> Self {
        Self {
            config,
            current,
            history,
        }
    }

    /// Current state identifier.
    pub fn state(&self) -> &str {
        &self.current
    }

    pub fn initial(&self) -> &str {
        &self.config.initial
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Move directly to `state`.
    ///
    /// Fails with [`MachineError::InvalidState`] when `state` is not
    /// declared; the machine is left unchanged.
    pub fn change_state(&mut self, state: &str) -> MachineResult<&mut Self> {
        if !self.config.has_state(state) {
            return Err(MachineError::InvalidState {
                state: state.to_string(),
            });
        }

        debug!(from = %self.current, to = state, "fsm_change_state");
        self.advance(state.to_string());
        Ok(self)
    }

    /// Apply the transition for `event` from the current state.
    ///
    /// Fails with [`MachineError::InvalidEvent`] when the current state
    /// defines no such event; the machine is left unchanged. The target is
    /// used as configured even when it is not a declared state.
    pub fn trigger(&mut self, event: &str) -> MachineResult<&mut Self> {
        let target = self
            .config
            .target(&self.current, event)
            .ok_or_else(|| MachineError::InvalidEvent {
                event: event.to_string(),
                state: self.current.clone(),
            })?
            .to_string();

        if !self.config.has_state(&target) {
            warn!(
                from = %self.current,
                event,
                to = %target,
                "fsm_transition_to_undeclared_state"
            );
        }

        debug!(from = %self.current, event, to = %target, "fsm_trigger");
        self.advance(target);
        Ok(self)
    }

    /// Return to the initial state. Always succeeds and is recorded in
    /// history like any other forward move.
    pub fn reset(&mut self) -> &mut Self {
        debug!(from = %self.current, to = %self.config.initial, "fsm_reset");
        self.advance(self.config.initial.clone());
        self
    }

    /// Declared state identifiers.
    ///
    /// With `Some(event)`, only the states whose transition table contains
    /// `event`. An event no state declares yields an empty list.
    pub fn states(&self, event: Option<&str>) -> Vec<&str> {
        self.config
            .states
            .iter()
            .filter(|(_, definition)| event.is_none_or(|e| definition.accepts(e)))
            .map(|(state, _)| state.as_str())
            .collect()
    }

    /// Events accepted by the current state.
    pub fn events(&self) -> Vec<&str> {
        self.config
            .state(&self.current)
            .map(|definition| definition.transitions.keys().map(String::as_str).collect())
            .unwrap_or_default()
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Step back to the previous state.
    ///
    /// Returns `false` without side effects when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        let Some(previous) = self.history.step_back(self.current.clone()) else {
            return false;
        };

        debug!(from = %self.current, to = %previous, "fsm_undo");
        self.current = previous;
        true
    }

    /// Reapply the most recently undone state.
    ///
    /// Returns `false` without side effects when there is nothing to redo.
    pub fn redo(&mut self) -> bool {
        let Some(next) = self.history.step_forward(self.current.clone()) else {
            return false;
        };

        debug!(from = %self.current, to = %next, "fsm_redo");
        self.current = next;
        true
    }

    /// Forget all undo and redo history. The current state is kept.
    pub fn clear_history(&mut self) {
        debug!(
            undo = self.history.undo_stack().len(),
            redo = self.history.redo_stack().len(),
            "fsm_clear_history"
        );
        self.history.clear();
    }

    fn advance(&mut self, next: StateId) {
        let previous = std::mem::replace(&mut self.current, next);
        self.history.record(previous);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::StateDefinition;

    fn lamp() -> Config {
        Config::new(
            "off",
            [
                ("off".to_string(), StateDefinition::new().on("turnOn", "on")),
                ("on".to_string(), StateDefinition::new().on("turnOff", "off")),
            ],
        )
    }

    fn workflow() -> Config {
        Config::new(
            "draft",
            [
                (
                    "draft".to_string(),
                    StateDefinition::new().on("submit", "review"),
                ),
                (
                    "review".to_string(),
                    StateDefinition::new()
                        .on("approve", "published")
                        .on("reject", "draft"),
                ),
                (
                    "published".to_string(),
                    StateDefinition::new().on("archive", "archived"),
                ),
            ],
        )
    }

    #[test]
    fn starts_in_initial_state_with_empty_history() {
        let machine = StateMachine::new(lamp());

        assert_eq!(machine.state(), "off");
        assert!(machine.history().is_empty());
    }

    #[test]
    fn try_new_requires_config() {
        let result = StateMachine::try_new(None);
        assert!(matches!(result, Err(MachineError::MissingConfig)));

        let machine = StateMachine::try_new(lamp()).unwrap();
        assert_eq!(machine.state(), "off");
    }

    #[test]
    fn from_json_treats_null_as_missing() {
        let result = StateMachine::from_json("null");
        assert!(matches!(result, Err(MachineError::MissingConfig)));
    }

    #[test]
    fn from_json_rejects_malformed_text() {
        let result = StateMachine::from_json("{ \"initial\": ");
        assert!(matches!(result, Err(MachineError::ConfigParse(_))));
    }

    #[test]
    fn undeclared_initial_is_accepted() {
        let mut config = lamp();
        config.initial = "limbo".to_string();

        let machine = StateMachine::new(config);

        assert_eq!(machine.state(), "limbo");
        assert!(machine.events().is_empty());
    }

    #[test]
    fn change_state_moves_and_records_history() {
        let mut machine = StateMachine::new(lamp());

        machine.change_state("on").unwrap();

        assert_eq!(machine.state(), "on");
        assert_eq!(machine.history().undo_stack(), ["off".to_string()]);
    }

    #[test]
    fn change_state_rejects_unknown_state() {
        let mut machine = StateMachine::new(lamp());
        machine.trigger("turnOn").unwrap();
        machine.undo();

        let result = machine.change_state("broken").map(|_| ());

        assert!(matches!(
            result,
            Err(MachineError::InvalidState { ref state }) if state == "broken"
        ));
        assert_eq!(machine.state(), "off");
        assert!(machine.can_redo());
    }

    #[test]
    fn operations_chain() {
        let mut machine = StateMachine::new(workflow());

        machine
            .trigger("submit")
            .unwrap()
            .trigger("approve")
            .unwrap()
            .reset();

        assert_eq!(machine.state(), "draft");
        assert_eq!(machine.history().undo_stack().len(), 3);
    }

    #[test]
    fn trigger_rejects_unknown_event() {
        let mut machine = StateMachine::new(lamp());

        let result = machine.trigger("turnOff").map(|_| ());

        assert!(matches!(
            result,
            Err(MachineError::InvalidEvent { ref event, ref state })
                if event == "turnOff" && state == "off"
        ));
        assert_eq!(machine.state(), "off");
        assert!(machine.history().is_empty());
    }

    #[test]
    fn trigger_follows_undeclared_target() {
        let mut machine = StateMachine::new(workflow());
        machine.trigger("submit").unwrap();
        machine.trigger("approve").unwrap();

        machine.trigger("archive").unwrap();

        assert_eq!(machine.state(), "archived");
        assert!(machine.events().is_empty());

        let result = machine.trigger("archive").map(|_| ());
        assert!(matches!(result, Err(MachineError::InvalidEvent { .. })));
        assert_eq!(machine.state(), "archived");

        assert!(machine.undo());
        assert_eq!(machine.state(), "published");
    }

    #[test]
    fn reset_records_history_and_clears_redo() {
        let mut machine = StateMachine::new(lamp());
        machine.trigger("turnOn").unwrap();
        machine.trigger("turnOff").unwrap();
        machine.undo();
        assert!(machine.can_redo());

        machine.reset();

        assert_eq!(machine.state(), "off");
        assert!(!machine.redo());
        assert_eq!(
            machine.history().undo_stack(),
            ["off".to_string(), "on".to_string()]
        );
    }

    #[test]
    fn states_lists_everything_without_event() {
        let machine = StateMachine::new(workflow());

        assert_eq!(machine.states(None), vec!["draft", "published", "review"]);
    }

    #[test]
    fn states_filters_by_event() {
        let mut machine = StateMachine::new(workflow());
        machine.trigger("submit").unwrap();

        assert_eq!(machine.states(Some("approve")), vec!["review"]);
        assert_eq!(machine.states(Some("submit")), vec!["draft"]);
        assert!(machine.states(Some("teleport")).is_empty());
    }

    #[test]
    fn events_reflect_current_state() {
        let mut machine = StateMachine::new(workflow());
        machine.trigger("submit").unwrap();

        assert_eq!(machine.events(), vec!["approve", "reject"]);
    }

    #[test]
    fn undo_and_redo_are_inverse() {
        let mut machine = StateMachine::new(lamp());
        machine.trigger("turnOn").unwrap();

        assert!(machine.undo());
        assert_eq!(machine.state(), "off");

        assert!(machine.redo());
        assert_eq!(machine.state(), "on");
    }

    #[test]
    fn undo_and_redo_report_unavailability() {
        let mut machine = StateMachine::new(lamp());

        assert!(!machine.undo());
        assert!(!machine.redo());
        assert_eq!(machine.state(), "off");
        assert!(machine.history().is_empty());
    }

    #[test]
    fn redo_is_cleared_by_forward_moves() {
        let mut machine = StateMachine::new(lamp());
        machine.trigger("turnOn").unwrap();
        machine.undo();

        machine.change_state("off").unwrap();

        assert!(!machine.redo());
    }

    #[test]
    fn clear_history_keeps_current_state() {
        let mut machine = StateMachine::new(lamp());
        machine.trigger("turnOn").unwrap();
        machine.trigger("turnOff").unwrap();
        machine.undo();

        machine.clear_history();

        assert_eq!(machine.state(), "on");
        assert!(!machine.can_undo());
        assert!(!machine.can_redo());
    }
}
