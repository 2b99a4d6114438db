use am_core::AmError;
use am_descriptor::DescriptorError;
use am_fsm::FsmError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ControllerError {
    #[error("controller configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Core(#[from] AmError),

    #[error(transparent)]
    Descriptor(#[from] DescriptorError),

    #[error("automaton error: {0}")]
    Fsm(#[from] FsmError),

    #[error("{got} sensor snapshots given for a swarm of {expected} robots")]
    SnapshotCountMismatch {
        expected: usize,
        got:      usize,
    },
}

pub type ControllerResult<T> = Result<T, ControllerError>;

/// A failed read or write at the robot boundary.  Logged by the controller
/// and never propagated out of a control step.
#[derive(Debug, Error)]
pub enum BridgeError {
    #[error("{sensor} sensor unavailable: {reason}")]
    Sensor {
        sensor: &'static str,
        reason: String,
    },

    #[error("{actuator} actuator rejected command: {reason}")]
    Actuator {
        actuator: &'static str,
        reason:   String,
    },
}
