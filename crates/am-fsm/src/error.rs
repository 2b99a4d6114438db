use am_behavior::BehaviorError;
use am_core::{GroupId, StateIndex, TransitionIndex};
use am_descriptor::DescriptorError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FsmError {
    #[error("descriptor error: {0}")]
    Descriptor(#[from] DescriptorError),

    #[error("unit error: {0}")]
    Behavior(#[from] BehaviorError),

    #[error("no --nstates_<g> flag in the descriptor")]
    MissingStateCount,

    #[error("{0} declares no states")]
    NoStates(GroupId),

    #[error("marker for {state} of {group} not found")]
    MissingState {
        state: StateIndex,
        group: GroupId,
    },

    #[error("marker for {state} appears before the marker of the previous state")]
    StateOutOfOrder { state: StateIndex },

    #[error("destination marker for {transition} of {state} not found inside the state")]
    MissingTransition {
        state:      StateIndex,
        transition: TransitionIndex,
    },

    #[error("destination marker for {transition} of {state} appears before the previous transition")]
    TransitionOutOfOrder {
        state:      StateIndex,
        transition: TransitionIndex,
    },

    #[error("{origin} stores destination index {stored} but only {available} destinations exist")]
    DestinationIndexOutOfBounds {
        origin:    StateIndex,
        stored:    u32,
        available: usize,
    },

    #[error("state list position {position} holds {found}")]
    NonPositionalState {
        position: usize,
        found:    StateIndex,
    },

    #[error("transition {origin} -> {destination} does not connect two distinct states")]
    InvalidTransition {
        origin:      StateIndex,
        destination: StateIndex,
    },
}

pub type FsmResult<T> = Result<T, FsmError>;
