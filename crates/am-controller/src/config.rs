//! Controller configuration.

use crate::{ControllerError, ControllerResult};

/// Everything a controller needs besides its robot id.
///
/// Typically loaded from a JSON file by the application and shared by every
/// robot of a run.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ControllerConfig {
    /// The full multi-group descriptor.
    pub fsm_config: String,

    /// Master RNG seed.  Each robot derives its own stream from it, so the
    /// same seed always reproduces a run.
    #[cfg_attr(feature = "serde", serde(default))]
    pub seed: u64,
}

impl ControllerConfig {
    pub fn new(fsm_config: impl Into<String>, seed: u64) -> Self {
        Self { fsm_config: fsm_config.into(), seed }
    }

    /// Fails when the descriptor is empty or blank.
    pub fn validate(&self) -> ControllerResult<()> {
        if self.fsm_config.trim().is_empty() {
            return Err(ControllerError::Config("fsm_config is empty".into()));
        }
        Ok(())
    }
}
