//! Conditions: the guarded transitions of an automaton.

use std::fmt;

use am_core::{RobotRng, StateIndex, TransitionIndex};
use am_robot::RobotState;

use crate::guards::{FixedProbability, FloorColor, NeighborsCount, ProbColor};
use crate::{BehaviorError, BehaviorResult, Parameters};

// ── ConditionKind ─────────────────────────────────────────────────────────────

/// The closed catalog of condition kinds.
///
/// | Id | Kind                        |
/// |----|-----------------------------|
/// | 0  | black floor                 |
/// | 1  | gray floor                  |
/// | 2  | white floor                 |
/// | 3  | neighbours count            |
/// | 4  | inverted neighbours count   |
/// | 5  | fixed probability           |
/// | 7  | probabilistic colour        |
///
/// Identifier 6 is unassigned.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum ConditionKind {
    BlackFloor,
    GrayFloor,
    WhiteFloor,
    NeighborsCount,
    InvertedNeighborsCount,
    FixedProbability,
    ProbColor,
}

impl ConditionKind {
    pub const ALL: [ConditionKind; 7] = [
        ConditionKind::BlackFloor,
        ConditionKind::GrayFloor,
        ConditionKind::WhiteFloor,
        ConditionKind::NeighborsCount,
        ConditionKind::InvertedNeighborsCount,
        ConditionKind::FixedProbability,
        ConditionKind::ProbColor,
    ];

    /// Decode an optimizer identifier.
    pub fn from_id(id: u32) -> BehaviorResult<ConditionKind> {
        match id {
            0 => Ok(ConditionKind::BlackFloor),
            1 => Ok(ConditionKind::GrayFloor),
            2 => Ok(ConditionKind::WhiteFloor),
            3 => Ok(ConditionKind::NeighborsCount),
            4 => Ok(ConditionKind::InvertedNeighborsCount),
            5 => Ok(ConditionKind::FixedProbability),
            7 => Ok(ConditionKind::ProbColor),
            other => Err(BehaviorError::UnknownCondition(other)),
        }
    }

    pub fn id(self) -> u32 {
        match self {
            ConditionKind::BlackFloor             => 0,
            ConditionKind::GrayFloor              => 1,
            ConditionKind::WhiteFloor             => 2,
            ConditionKind::NeighborsCount         => 3,
            ConditionKind::InvertedNeighborsCount => 4,
            ConditionKind::FixedProbability       => 5,
            ConditionKind::ProbColor              => 7,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ConditionKind::BlackFloor             => "black-floor",
            ConditionKind::GrayFloor              => "gray-floor",
            ConditionKind::WhiteFloor             => "white-floor",
            ConditionKind::NeighborsCount         => "neighbors-count",
            ConditionKind::InvertedNeighborsCount => "inverted-neighbors-count",
            ConditionKind::FixedProbability       => "fixed-probability",
            ConditionKind::ProbColor              => "prob-color",
        }
    }

    fn guard(self) -> Box<dyn Guard> {
        match self {
            ConditionKind::BlackFloor             => Box::new(FloorColor::black()),
            ConditionKind::GrayFloor              => Box::new(FloorColor::gray()),
            ConditionKind::WhiteFloor             => Box::new(FloorColor::white()),
            ConditionKind::NeighborsCount         => Box::new(NeighborsCount::new(false)),
            ConditionKind::InvertedNeighborsCount => Box::new(NeighborsCount::new(true)),
            ConditionKind::FixedProbability       => Box::new(FixedProbability::default()),
            ConditionKind::ProbColor              => Box::new(ProbColor::default()),
        }
    }
}

impl fmt::Display for ConditionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Guard ─────────────────────────────────────────────────────────────────────

/// The predicate evaluated for a transition while its origin is active.
///
/// Like [`ControlLaw`][crate::ControlLaw], `init` runs at construction and on
/// every reset and must default every absent parameter.
pub trait Guard: Send + Sync + 'static {
    fn init(&mut self, params: &Parameters);

    /// `true` if the transition fires this step.
    fn verify(&mut self, robot: &RobotState, rng: &mut RobotRng) -> bool;
}

// ── Condition ─────────────────────────────────────────────────────────────────

/// A directed, guarded edge `origin → destination`.
///
/// `index` is the edge's order among the outgoing edges of `origin`; lower
/// indices are evaluated first.
pub struct Condition {
    origin:      StateIndex,
    destination: StateIndex,
    index:       TransitionIndex,
    kind:        ConditionKind,
    params:      Parameters,
    guard:       Box<dyn Guard>,
}

impl Condition {
    /// Build and initialize a condition.  Fails if a parameter is not finite.
    pub fn new(
        origin:      StateIndex,
        destination: StateIndex,
        index:       TransitionIndex,
        kind:        ConditionKind,
        params:      Parameters,
    ) -> BehaviorResult<Self> {
        params.validate()?;
        let mut condition = Self {
            origin,
            destination,
            index,
            kind,
            guard: kind.guard(),
            params,
        };
        condition.reset();
        Ok(condition)
    }

    pub fn reset(&mut self) {
        self.guard.init(&self.params);
    }

    pub fn verify(&mut self, robot: &RobotState, rng: &mut RobotRng) -> bool {
        self.guard.verify(robot, rng)
    }

    pub fn origin(&self) -> StateIndex {
        self.origin
    }

    pub fn destination(&self) -> StateIndex {
        self.destination
    }

    pub fn index(&self) -> TransitionIndex {
        self.index
    }

    pub fn kind(&self) -> ConditionKind {
        self.kind
    }

    pub fn params(&self) -> &Parameters {
        &self.params
    }
}

impl PartialEq for Condition {
    fn eq(&self, other: &Self) -> bool {
        self.origin == other.origin
            && self.destination == other.destination
            && self.index == other.index
            && self.kind == other.kind
            && self.params == other.params
    }
}

impl fmt::Debug for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Condition")
            .field("origin", &self.origin)
            .field("destination", &self.destination)
            .field("index", &self.index)
            .field("kind", &self.kind)
            .field("params", &self.params)
            .finish_non_exhaustive()
    }
}
