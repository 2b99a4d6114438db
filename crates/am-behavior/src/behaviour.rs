//! Behaviours: the states of an automaton.

use std::fmt;

use am_core::{LedColor, RobotRng, StateIndex};
use am_robot::RobotState;

use crate::laws::{
    AntiPhototaxis, Attraction, Exploration, GoAwayColor, GoToColor, Phototaxis, Repulsion, Stop,
};
use crate::{BehaviorError, BehaviorResult, Parameters};

// ── BehaviourKind ─────────────────────────────────────────────────────────────

/// The closed catalog of behaviour kinds.
///
/// | Id | Kind             |
/// |----|------------------|
/// | 0  | exploration      |
/// | 1  | stop             |
/// | 2  | phototaxis       |
/// | 3  | anti-phototaxis  |
/// | 4  | attraction       |
/// | 5  | repulsion        |
/// | 8  | go to colour     |
/// | 9  | go away colour   |
///
/// Identifiers 6 and 7 are unassigned.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum BehaviourKind {
    Exploration,
    Stop,
    Phototaxis,
    AntiPhototaxis,
    Attraction,
    Repulsion,
    GoToColor,
    GoAwayColor,
}

impl BehaviourKind {
    pub const ALL: [BehaviourKind; 8] = [
        BehaviourKind::Exploration,
        BehaviourKind::Stop,
        BehaviourKind::Phototaxis,
        BehaviourKind::AntiPhototaxis,
        BehaviourKind::Attraction,
        BehaviourKind::Repulsion,
        BehaviourKind::GoToColor,
        BehaviourKind::GoAwayColor,
    ];

    /// Decode an optimizer identifier.
    pub fn from_id(id: u32) -> BehaviorResult<BehaviourKind> {
        match id {
            0 => Ok(BehaviourKind::Exploration),
            1 => Ok(BehaviourKind::Stop),
            2 => Ok(BehaviourKind::Phototaxis),
            3 => Ok(BehaviourKind::AntiPhototaxis),
            4 => Ok(BehaviourKind::Attraction),
            5 => Ok(BehaviourKind::Repulsion),
            8 => Ok(BehaviourKind::GoToColor),
            9 => Ok(BehaviourKind::GoAwayColor),
            other => Err(BehaviorError::UnknownBehaviour(other)),
        }
    }

    pub fn id(self) -> u32 {
        match self {
            BehaviourKind::Exploration    => 0,
            BehaviourKind::Stop           => 1,
            BehaviourKind::Phototaxis     => 2,
            BehaviourKind::AntiPhototaxis => 3,
            BehaviourKind::Attraction     => 4,
            BehaviourKind::Repulsion      => 5,
            BehaviourKind::GoToColor      => 8,
            BehaviourKind::GoAwayColor    => 9,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            BehaviourKind::Exploration    => "exploration",
            BehaviourKind::Stop           => "stop",
            BehaviourKind::Phototaxis     => "phototaxis",
            BehaviourKind::AntiPhototaxis => "anti-phototaxis",
            BehaviourKind::Attraction     => "attraction",
            BehaviourKind::Repulsion      => "repulsion",
            BehaviourKind::GoToColor      => "go-to-color",
            BehaviourKind::GoAwayColor    => "go-away-color",
        }
    }

    /// A fresh, uninitialized control law for this kind.
    fn law(self) -> Box<dyn ControlLaw> {
        match self {
            BehaviourKind::Exploration    => Box::new(Exploration::default()),
            BehaviourKind::Stop           => Box::new(Stop),
            BehaviourKind::Phototaxis     => Box::new(Phototaxis::default()),
            BehaviourKind::AntiPhototaxis => Box::new(AntiPhototaxis::default()),
            BehaviourKind::Attraction     => Box::new(Attraction::default()),
            BehaviourKind::Repulsion      => Box::new(Repulsion::default()),
            BehaviourKind::GoToColor      => Box::new(GoToColor::default()),
            BehaviourKind::GoAwayColor    => Box::new(GoAwayColor::default()),
        }
    }
}

impl fmt::Display for BehaviourKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── ControlLaw ────────────────────────────────────────────────────────────────

/// The numeric control law executed while a behaviour is active.
///
/// `init` derives the law's internal state from its parameters and must
/// supply a default for every absent parameter.  It is called once at
/// construction and again on every reset, so it must fully overwrite any
/// state left by earlier steps.
pub trait ControlLaw: Send + Sync + 'static {
    fn init(&mut self, params: &Parameters);

    /// Read inputs from `robot` and write wheel outputs back into it.
    fn control_step(&mut self, robot: &mut RobotState, rng: &mut RobotRng);
}

// ── Behaviour ─────────────────────────────────────────────────────────────────

/// One state of an automaton: a kind, its positional index, its parameters,
/// and the control law built from them.
pub struct Behaviour {
    index:    StateIndex,
    kind:     BehaviourKind,
    params:   Parameters,
    emission: LedColor,
    law:      Box<dyn ControlLaw>,
}

impl Behaviour {
    /// Build and initialize a behaviour.  Fails if a parameter is not finite.
    pub fn new(index: StateIndex, kind: BehaviourKind, params: Parameters) -> BehaviorResult<Self> {
        params.validate()?;
        let mut behaviour = Self {
            index,
            kind,
            emission: LedColor::Black,
            law: kind.law(),
            params,
        };
        behaviour.reset();
        Ok(behaviour)
    }

    /// Re-derive all internal state from the parameters.
    pub fn reset(&mut self) {
        self.emission = self
            .params
            .get("cle")
            .and_then(LedColor::from_parameter)
            .unwrap_or(LedColor::Black);
        self.law.init(&self.params);
    }

    /// Run one step of the control law.  The LED shows the behaviour's
    /// emission colour.
    pub fn control_step(&mut self, robot: &mut RobotState, rng: &mut RobotRng) {
        robot.set_led(self.emission);
        self.law.control_step(robot, rng);
    }

    pub fn index(&self) -> StateIndex {
        self.index
    }

    pub fn kind(&self) -> BehaviourKind {
        self.kind
    }

    pub fn params(&self) -> &Parameters {
        &self.params
    }
}

impl PartialEq for Behaviour {
    /// Structural equality: the law's run-time state is ignored.
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index && self.kind == other.kind && self.params == other.params
    }
}

impl fmt::Debug for Behaviour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Behaviour")
            .field("index", &self.index)
            .field("kind", &self.kind)
            .field("params", &self.params)
            .finish_non_exhaustive()
    }
}
