//! Per-unit decoders.
//!
//! Each decoder reads one state (or one transition) out of a [`FlagTable`].
//! Every lookup is confined to the unit's token span: a flag addressed to
//! the right scope but sitting outside the span is treated as absent.

use std::ops::Range;

use am_behavior::{
    BEHAVIOUR_PARAMETERS, Behaviour, BehaviourKind, CONDITION_PARAMETERS, Condition, ConditionKind,
    Parameters,
};
use am_core::{GroupId, StateIndex, TransitionIndex};
use am_descriptor::{DescriptorError, Flag, FlagKey, FlagTable};
use tracing::debug;

use crate::{FsmError, FsmResult};

// ── DecodeContext ─────────────────────────────────────────────────────────────

/// What every decoder needs to know about the automaton being built.
/// Fixed once the state count is read.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct DecodeContext {
    pub group:       GroupId,
    pub state_count: u32,
}

/// Candidate destinations for a transition leaving `origin`: every state
/// index in `0..state_count` except the origin, ascending.
///
/// ```text
/// state_count 4, origin 1  →  [0, 2, 3]
/// ```
pub fn possible_destinations(state_count: u32, origin: StateIndex) -> Vec<StateIndex> {
    (0..state_count)
        .filter(|&s| s != origin.0)
        .map(StateIndex)
        .collect()
}

// ── Lookup helpers ────────────────────────────────────────────────────────────

fn lookup<'t, 'a>(table: &'t FlagTable<'a>, key: &FlagKey<'a>, span: &Range<usize>) -> Option<&'t Flag<'a>> {
    let found = table.get_within(key, span);
    if found.is_none() {
        if let Some(stray) = table.get(key) {
            debug!(flag = stray.text, position = stray.position, ?span, "ignoring flag outside its unit");
        }
    }
    found
}

fn require<'t, 'a>(table: &'t FlagTable<'a>, key: &FlagKey<'a>, span: &Range<usize>) -> FsmResult<&'t Flag<'a>> {
    lookup(table, key, span).ok_or_else(|| DescriptorError::MissingFlag(key.to_string()).into())
}

/// Collect every parameter of `catalog` present in `span`.
fn read_parameters<'a>(
    table:   &FlagTable<'a>,
    catalog: &[&'static str],
    span:    &Range<usize>,
    key_for: impl Fn(&'static str) -> FlagKey<'a>,
) -> FsmResult<Parameters> {
    let mut params = Parameters::new();
    for &name in catalog {
        if let Some(flag) = lookup(table, &key_for(name), span) {
            params.insert(name, flag.parse_f64()?);
        }
    }
    Ok(params)
}

// ── Behaviour decoder ─────────────────────────────────────────────────────────

/// Decode state `state` from the tokens in `span` (its marker up to the next
/// state's marker).  Returns the behaviour and the transitions leaving it.
pub fn decode_behaviour(
    ctx:   &DecodeContext,
    table: &FlagTable<'_>,
    state: StateIndex,
    span:  Range<usize>,
) -> FsmResult<(Behaviour, Vec<Condition>)> {
    let group = ctx.group;

    let kind_id = require(table, &FlagKey::StateKind { state, group }, &span)?.parse_u32()?;
    let kind    = BehaviourKind::from_id(kind_id)?;
    let params  = read_parameters(table, &BEHAVIOUR_PARAMETERS, &span, |name| {
        FlagKey::StateParam { name, state, group }
    })?;
    let behaviour = Behaviour::new(state, kind, params)?;

    let count = match lookup(table, &FlagKey::TransitionCount { state, group }, &span) {
        Some(flag) => flag.parse_u32()?,
        None => 0,
    };

    // Destination markers delimit the transitions inside the state span.  The
    // count is untrusted, so nothing is reserved from it.
    let mut markers = Vec::new();
    for i in 0..count {
        let transition = TransitionIndex(i);
        let key = FlagKey::TransitionDestination { state, transition, group };
        let position = lookup(table, &key, &span)
            .map(|flag| flag.position)
            .ok_or(FsmError::MissingTransition { state, transition })?;
        if markers.last().is_some_and(|&(_, prev)| position <= prev) {
            return Err(FsmError::TransitionOutOfOrder { state, transition });
        }
        markers.push((transition, position));
    }

    let mut conditions = Vec::with_capacity(markers.len());
    for (k, &(transition, start)) in markers.iter().enumerate() {
        let end = markers.get(k + 1).map_or(span.end, |&(_, next)| next);
        if let Some(condition) = decode_condition(ctx, table, state, transition, start..end)? {
            conditions.push(condition);
        }
    }

    debug!(
        %group, %state, %kind,
        params = behaviour.params().len(),
        transitions = conditions.len(),
        "decoded state"
    );
    Ok((behaviour, conditions))
}

// ── Condition decoder ─────────────────────────────────────────────────────────

/// Decode transition `transition` of `origin` from the tokens in `span`.
///
/// Returns `Ok(None)` when the resolved destination is not a state of the
/// automaton; the transition is dropped without error.
pub fn decode_condition(
    ctx:        &DecodeContext,
    table:      &FlagTable<'_>,
    origin:     StateIndex,
    transition: TransitionIndex,
    span:       Range<usize>,
) -> FsmResult<Option<Condition>> {
    let group = ctx.group;
    let state = origin;

    let stored = require(table, &FlagKey::TransitionDestination { state, transition, group }, &span)?
        .parse_u32()?;
    let candidates = possible_destinations(ctx.state_count, origin);
    let destination = *candidates
        .get(stored as usize)
        .ok_or(FsmError::DestinationIndexOutOfBounds {
            origin,
            stored,
            available: candidates.len(),
        })?;
    // Unreachable while candidates come from `0..state_count`; kept so a
    // change to the candidate list cannot yield a dangling edge.
    if destination.0 >= ctx.state_count {
        debug!(%origin, %destination, %transition, "dropping transition to a missing state");
        return Ok(None);
    }

    let kind_id = require(table, &FlagKey::TransitionKind { state, transition, group }, &span)?.parse_u32()?;
    let kind    = ConditionKind::from_id(kind_id)?;
    let params  = read_parameters(table, &CONDITION_PARAMETERS, &span, |name| {
        FlagKey::TransitionParam { name, state, transition, group }
    })?;

    Ok(Some(Condition::new(origin, destination, transition, kind, params)?))
}
