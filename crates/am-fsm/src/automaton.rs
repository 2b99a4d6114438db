//! The finite-state runtime.

use am_behavior::{Behaviour, Condition};
use am_core::{GroupId, RobotRng, StateIndex};
use am_robot::RobotState;
use tracing::debug;

use crate::{FsmError, FsmResult};

/// A decoded automaton: states, guarded transitions, and the active state.
///
/// The topology is fixed at construction.  Only the active state and the
/// internal state of behaviours and guards change while running.
///
/// # Per-step semantics
///
/// 1. The transitions leaving the active state are evaluated in ascending
///    transition index against the robot record.
/// 2. The first that fires moves the automaton; the incoming behaviour is
///    reset and the remaining transitions are not evaluated.
/// 3. The (possibly new) active behaviour runs and writes the outputs.
#[derive(Debug)]
pub struct FiniteStateMachine {
    group:      GroupId,
    behaviours: Vec<Behaviour>,
    conditions: Vec<Condition>,
    /// `outgoing[j]` holds indices into `conditions`, sorted by transition index.
    outgoing:   Vec<Vec<usize>>,
    active:     StateIndex,
}

impl FiniteStateMachine {
    /// Assemble an automaton from positional behaviours and their transitions.
    ///
    /// `behaviours[j]` must have index `j`, and every transition must join two
    /// distinct existing states.
    pub fn new(
        group:      GroupId,
        behaviours: Vec<Behaviour>,
        conditions: Vec<Condition>,
    ) -> FsmResult<Self> {
        if behaviours.is_empty() {
            return Err(FsmError::NoStates(group));
        }
        if let Some((position, b)) = behaviours.iter().enumerate().find(|(j, b)| b.index().index() != *j) {
            return Err(FsmError::NonPositionalState { position, found: b.index() });
        }

        let mut outgoing = vec![Vec::new(); behaviours.len()];
        for (c, condition) in conditions.iter().enumerate() {
            let (origin, destination) = (condition.origin(), condition.destination());
            if origin == destination
                || origin.index() >= behaviours.len()
                || destination.index() >= behaviours.len()
            {
                return Err(FsmError::InvalidTransition { origin, destination });
            }
            outgoing[origin.index()].push(c);
        }
        for edges in &mut outgoing {
            edges.sort_by_key(|&c| conditions[c].index());
        }

        Ok(Self {
            group,
            behaviours,
            conditions,
            outgoing,
            active: StateIndex(0),
        })
    }

    /// Advance one step.  Returns the `(from, to)` pair if a transition fired.
    pub fn control_step(
        &mut self,
        robot: &mut RobotState,
        rng:   &mut RobotRng,
    ) -> Option<(StateIndex, StateIndex)> {
        let from = self.active;
        let mut fired = None;
        for &c in &self.outgoing[from.index()] {
            let condition = &mut self.conditions[c];
            if condition.verify(robot, rng) {
                fired = Some((condition.destination(), condition.index()));
                break;
            }
        }

        let transition = fired.map(|(to, index)| {
            debug!(group = %self.group, %from, %to, %index, "transition");
            self.active = to;
            self.behaviours[to.index()].reset();
            (from, to)
        });

        self.behaviours[self.active.index()].control_step(robot, rng);
        transition
    }

    /// Return to state 0 and re-initialize every behaviour and condition.
    /// The topology is untouched, so calling this twice equals calling it once.
    pub fn reset(&mut self) {
        self.active = StateIndex(0);
        self.behaviours.iter_mut().for_each(Behaviour::reset);
        self.conditions.iter_mut().for_each(Condition::reset);
    }

    pub fn group(&self) -> GroupId {
        self.group
    }

    pub fn active(&self) -> StateIndex {
        self.active
    }

    pub fn active_behaviour(&self) -> &Behaviour {
        &self.behaviours[self.active.index()]
    }

    pub fn state_count(&self) -> usize {
        self.behaviours.len()
    }

    pub fn behaviours(&self) -> &[Behaviour] {
        &self.behaviours
    }

    /// Every transition, in decode order.
    pub fn conditions(&self) -> &[Condition] {
        &self.conditions
    }

    /// Transitions leaving `state`, in evaluation order.
    pub fn outgoing(&self, state: StateIndex) -> impl Iterator<Item = &Condition> + '_ {
        self.outgoing
            .get(state.index())
            .into_iter()
            .flatten()
            .map(|&c| &self.conditions[c])
    }

    /// `true` if `state` has no outgoing transitions.
    pub fn is_sink(&self, state: StateIndex) -> bool {
        self.outgoing.get(state.index()).is_none_or(|edges| edges.is_empty())
    }
}
