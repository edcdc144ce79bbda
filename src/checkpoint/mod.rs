//! Checkpoint and resume functionality for state machines.
//!
//! A checkpoint captures where a machine is and how it got there: the
//! current state plus both history stacks. Configurations are not part of
//! a checkpoint; a machine is restored by pairing a checkpoint with the
//! configuration it was taken from.

use crate::core::{Config, History, StateId, StateMachine};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

pub mod error;

pub use error::CheckpointError;

/// Version identifier for checkpoint format
pub const CHECKPOINT_VERSION: u32 = 1;

/// Serializable snapshot of a machine's instance state.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Checkpoint {
    /// Checkpoint format version
    pub version: u32,

    /// Unique checkpoint identifier
    pub id: String,

    /// When checkpoint was created
    pub timestamp: DateTime<Utc>,

    /// Initial state of the configuration the machine was running
    pub initial: StateId,

    /// Current state of the machine
    pub current: StateId,

    /// Undo and redo stacks
    pub history: History,
}

impl Checkpoint {
    /// Serialize to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, CheckpointError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| CheckpointError::SerializationFailed(e.to_string()))
    }

    /// Deserialize from JSON, rejecting unsupported versions.
    pub fn from_json(json: &str) -> Result<Self, CheckpointError> {
        let checkpoint: Self = serde_json::from_str(json)
            .map_err(|e| CheckpointError::DeserializationFailed(e.to_string()))?;
        checkpoint.check_version()?;
        Ok(checkpoint)
    }

    /// Serialize to the compact bincode format.
    pub fn to_binary(&self) -> Result<Vec<u8>, CheckpointError> {
        bincode::serialize(self).map_err(|e| CheckpointError::SerializationFailed(e.to_string()))
    }

    /// Deserialize from bincode, rejecting unsupported versions.
    pub fn from_binary(bytes: &[u8]) -> Result<Self, CheckpointError> {
        let checkpoint: Self = bincode::deserialize(bytes)
            .map_err(|e| CheckpointError::DeserializationFailed(e.to_string()))?;
        checkpoint.check_version()?;
        Ok(checkpoint)
    }

    fn check_version(&self) -> Result<(), CheckpointError> {
        if self.version > CHECKPOINT_VERSION {
            return Err(CheckpointError::UnsupportedVersion {
                found: self.version,
                supported: CHECKPOINT_VERSION,
            });
        }
        Ok(())
    }
}

impl StateMachine {
    /// Capture the current state and history.
    pub fn checkpoint(&self) -> Checkpoint {
        let checkpoint = Checkpoint {
            version: CHECKPOINT_VERSION,
            id: Uuid::new_v4().to_string(),
            timestamp: Utc::now(),
            initial: self.initial().to_string(),
            current: self.state().to_string(),
            history: self.history().clone(),
        };
        debug!(id = %checkpoint.id, current = %checkpoint.current, "fsm_checkpoint");
        checkpoint
    }

    /// Rebuild a machine from `config` and a checkpoint taken from a machine
    /// running that configuration.
    ///
    /// Fails when the checkpoint's version is unsupported or its initial
    /// state differs from the configuration's.
    pub fn restore(config: Config, checkpoint: Checkpoint) -> Result<Self, CheckpointError> {
        checkpoint.check_version()?;

        if checkpoint.initial != config.initial {
            return Err(CheckpointError::ValidationFailed(format!(
                "checkpoint initial state '{}' does not match configuration initial state '{}'",
                checkpoint.initial, config.initial
            )));
        }

        debug!(id = %checkpoint.id, current = %checkpoint.current, "fsm_restore");
        Ok(Self::from_parts(
            config,
            checkpoint.current,
            checkpoint.history,
        ))
    }
}
