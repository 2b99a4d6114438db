//! Writing automatons back into descriptor form.
//!
//! The encoder is the inverse of the builder: decoding the output of
//! [`AutomatonSpec::encode`] yields an automaton with the same kinds,
//! parameters, and edges.  Transitions are renumbered densely in the order
//! given.

use am_behavior::{BehaviourKind, ConditionKind, Parameters};
use am_core::{GroupId, StateIndex, TransitionIndex};
use am_descriptor::FlagKey;

use crate::{FiniteStateMachine, FsmError, FsmResult};

/// A guarded edge to `destination`.
#[derive(Clone, Debug, PartialEq)]
pub struct TransitionSpec {
    pub destination: StateIndex,
    pub kind:        ConditionKind,
    pub params:      Parameters,
}

/// One state with its outgoing transitions in evaluation order.
#[derive(Clone, Debug, PartialEq)]
pub struct StateSpec {
    pub kind:        BehaviourKind,
    pub params:      Parameters,
    pub transitions: Vec<TransitionSpec>,
}

impl StateSpec {
    pub fn new(kind: BehaviourKind, params: Parameters) -> Self {
        Self { kind, params, transitions: Vec::new() }
    }

    /// Append a transition (builder style).
    pub fn to(mut self, destination: StateIndex, kind: ConditionKind, params: Parameters) -> Self {
        self.transitions.push(TransitionSpec { destination, kind, params });
        self
    }
}

/// The structure of an automaton, without any run-time state.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AutomatonSpec {
    pub states: Vec<StateSpec>,
}

impl AutomatonSpec {
    pub fn new(states: Vec<StateSpec>) -> Self {
        Self { states }
    }

    /// Capture the structure of a built automaton.
    pub fn from_fsm(fsm: &FiniteStateMachine) -> Self {
        let states = fsm
            .behaviours()
            .iter()
            .map(|b| StateSpec {
                kind:        b.kind(),
                params:      b.params().clone(),
                transitions: fsm
                    .outgoing(b.index())
                    .map(|c| TransitionSpec {
                        destination: c.destination(),
                        kind:        c.kind(),
                        params:      c.params().clone(),
                    })
                    .collect(),
            })
            .collect();
        Self { states }
    }

    /// Descriptor tokens for this automaton as group `group`, starting with
    /// `--nstates_<group>`.
    pub fn encode(&self, group: GroupId) -> FsmResult<Vec<String>> {
        let state_count = self.states.len() as u32;
        let mut out = Vec::new();
        let mut push = |key: FlagKey<'_>, value: String| {
            out.push(key.to_string());
            out.push(value);
        };

        push(FlagKey::StateCount(group), state_count.to_string());
        for (j, spec) in self.states.iter().enumerate() {
            let state = StateIndex(j as u32);
            push(FlagKey::StateKind { state, group }, spec.kind.id().to_string());
            for (name, value) in spec.params.iter() {
                push(FlagKey::StateParam { name, state, group }, value.to_string());
            }
            if spec.transitions.is_empty() {
                continue;
            }

            push(FlagKey::TransitionCount { state, group }, spec.transitions.len().to_string());
            for (i, t) in spec.transitions.iter().enumerate() {
                let transition = TransitionIndex(i as u32);
                let stored = stored_destination(state, t.destination, state_count)?;
                push(FlagKey::TransitionDestination { state, transition, group }, stored.to_string());
                push(FlagKey::TransitionKind { state, transition, group }, t.kind.id().to_string());
                for (name, value) in t.params.iter() {
                    push(FlagKey::TransitionParam { name, state, transition, group }, value.to_string());
                }
            }
        }
        Ok(out)
    }
}

/// Position of `destination` in the possible-destination list of `origin`.
fn stored_destination(origin: StateIndex, destination: StateIndex, state_count: u32) -> FsmResult<u32> {
    if destination == origin || destination.0 >= state_count {
        return Err(FsmError::InvalidTransition { origin, destination });
    }
    Ok(if destination.0 > origin.0 { destination.0 - 1 } else { destination.0 })
}

/// A complete multi-group descriptor: `--ngroups`, one `--g<i>` per group,
/// then each group's automaton.  `groups[i]` is `(robot count, automaton)`.
pub fn encode_descriptor(groups: &[(u32, AutomatonSpec)]) -> FsmResult<String> {
    let mut tokens = vec![FlagKey::GroupCount.to_string(), groups.len().to_string()];
    for (g, (size, _)) in groups.iter().enumerate() {
        tokens.push(FlagKey::GroupSize(GroupId(g as u32)).to_string());
        tokens.push(size.to_string());
    }
    for (g, (_, automaton)) in groups.iter().enumerate() {
        tokens.extend(automaton.encode(GroupId(g as u32))?);
    }
    Ok(tokens.join(" "))
}
