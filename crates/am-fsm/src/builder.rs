//! Whole-automaton decoding.

use am_core::{GroupId, StateIndex};
use am_descriptor::{FlagKey, FlagTable};
use tracing::debug;

use crate::decode::decode_behaviour;
use crate::{DecodeContext, FiniteStateMachine, FsmError, FsmResult};

/// Builds a [`FiniteStateMachine`] from one group's descriptor tokens.
///
/// # Steps
///
/// 1. Index the tokens once into a [`FlagTable`].
/// 2. Take the group and state count `N` from the first `--nstates_<g>`.
/// 3. Locate the markers `--s0_<g>` … `--s<N-1>_<g>`; each state owns the
///    tokens from its marker up to the next one (or the end of the stream).
/// 4. Decode every state and its transitions.
///
/// # Example
///
/// ```rust,ignore
/// let tokens = tokenize("--nstates_0 1 --s0_0 1");
/// let fsm = FsmBuilder::new(&tokens).build()?;
/// assert!(fsm.is_sink(StateIndex(0)));
/// ```
pub struct FsmBuilder<'a> {
    table: FlagTable<'a>,
}

impl<'a> FsmBuilder<'a> {
    pub fn new(tokens: &[&'a str]) -> Self {
        Self { table: FlagTable::from_tokens(tokens) }
    }

    /// The group this descriptor slice belongs to, from its first
    /// `--nstates_<g>` flag.
    pub fn group(&self) -> Option<GroupId> {
        self.table.flags().iter().find_map(|flag| match flag.key {
            FlagKey::StateCount(group) => Some(group),
            _ => None,
        })
    }

    /// Decode the automaton.  Any structural or kind error aborts the build.
    pub fn build(self) -> FsmResult<FiniteStateMachine> {
        let group = self.group().ok_or(FsmError::MissingStateCount)?;
        let state_count = self.table.require(&FlagKey::StateCount(group))?.parse_u32()?;
        if state_count == 0 {
            return Err(FsmError::NoStates(group));
        }
        let ctx = DecodeContext { group, state_count };

        // ── Locate state markers ──────────────────────────────────────────
        // `state_count` is untrusted; a huge count fails on its first missing
        // marker, so nothing is reserved from it.
        let mut markers: Vec<usize> = Vec::new();
        for j in 0..state_count {
            let state = StateIndex(j);
            let position = self
                .table
                .position(&FlagKey::StateKind { state, group })
                .ok_or(FsmError::MissingState { state, group })?;
            if markers.last().is_some_and(|&prev| position <= prev) {
                return Err(FsmError::StateOutOfOrder { state });
            }
            markers.push(position);
        }

        // ── Decode each state's span ──────────────────────────────────────
        let mut behaviours = Vec::with_capacity(markers.len());
        let mut conditions = Vec::new();
        for (j, &start) in markers.iter().enumerate() {
            let end = markers.get(j + 1).copied().unwrap_or(self.table.token_count());
            let (behaviour, outgoing) = decode_behaviour(&ctx, &self.table, StateIndex(j as u32), start..end)?;
            behaviours.push(behaviour);
            conditions.extend(outgoing);
        }

        debug!(%group, states = behaviours.len(), transitions = conditions.len(), "built automaton");
        FiniteStateMachine::new(group, behaviours, conditions)
    }
}

/// Shorthand for `FsmBuilder::new(tokens).build()`.
pub fn build_fsm(tokens: &[&str]) -> FsmResult<FiniteStateMachine> {
    FsmBuilder::new(tokens).build()
}
