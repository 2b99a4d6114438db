//! The per-robot controller.

use am_core::{GroupId, RobotId, RobotRng, StateIndex, Step};
use am_descriptor::{partition, tokenize};
use am_fsm::{FiniteStateMachine, build_fsm};
use am_robot::{ActuatorCommand, RobotState, SensorSnapshot};
use tracing::{debug, info, warn};

use crate::{ActuatorBridge, ControllerConfig, ControllerResult, SensorBridge, gather_snapshot};

/// One robot's automaton together with the state it runs against.
///
/// A controller is built once from the shared descriptor; afterwards its
/// topology never changes.  Each step applies one sensor snapshot, advances
/// the automaton, and reports the resulting actuator command.
#[derive(Debug)]
pub struct Controller {
    robot: RobotId,
    seed:  u64,
    fsm:   FiniteStateMachine,
    state: RobotState,
    rng:   RobotRng,
    step:  Step,
}

impl Controller {
    /// Decode the automaton of `robot`'s group from `config.fsm_config`.
    ///
    /// Fails on an empty descriptor, on a robot outside the declared groups,
    /// and on any structural or kind error in the group's automaton.
    pub fn init(config: &ControllerConfig, robot: RobotId) -> ControllerResult<Self> {
        config.validate()?;
        let tokens = tokenize(&config.fsm_config);
        let (group, slice) = partition(&tokens, robot)?;
        let fsm = build_fsm(&slice)?;

        info!(
            %robot, %group,
            states = fsm.state_count(),
            transitions = fsm.conditions().len(),
            "controller initialized"
        );
        Ok(Self {
            robot,
            seed: config.seed,
            fsm,
            state: RobotState::new(robot),
            rng: RobotRng::new(config.seed, robot),
            step: Step::ZERO,
        })
    }

    /// Apply `snapshot`, advance the automaton by one step, and return the
    /// resulting outputs.  Readings absent from the snapshot keep their
    /// previous values.
    pub fn step(&mut self, snapshot: SensorSnapshot) -> ActuatorCommand {
        snapshot.apply_to(&mut self.state);
        if let Some((from, to)) = self.fsm.control_step(&mut self.state, &mut self.rng) {
            debug!(robot = %self.robot, step = %self.step, %from, %to, "state changed");
        }
        self.step = self.step.next();
        self.state.command()
    }

    /// One bridge-driven step: read every sensor, step, write the wheels and
    /// LED, then clear the neighbour-message buffer.  Bridge failures are
    /// logged and skipped.
    pub fn control_step<S, A>(&mut self, sensors: &mut S, actuators: &mut A) -> ActuatorCommand
    where
        S: SensorBridge + ?Sized,
        A: ActuatorBridge + ?Sized,
    {
        let snapshot = gather_snapshot(sensors, self.robot);
        let command = self.step(snapshot);

        if let Err(err) = actuators.set_wheels(command.left_wheel, command.right_wheel) {
            warn!(robot = %self.robot, error = %err, "wheel write failed");
        }
        if let Err(err) = actuators.set_led(command.led) {
            warn!(robot = %self.robot, error = %err, "LED write failed");
        }
        sensors.clear_messages();
        command
    }

    /// Tell the platform to broadcast this robot's id.  Call once after
    /// [`init`](Self::init); [`reset_with`](Self::reset_with) calls it again.
    pub fn announce<A: ActuatorBridge + ?Sized>(&self, actuators: &mut A) {
        if let Err(err) = actuators.broadcast_id(self.robot) {
            warn!(robot = %self.robot, error = %err, "id broadcast failed");
        }
    }

    /// Return to the initial state: automaton at state 0, every behaviour and
    /// condition re-initialized, readings and outputs cleared, RNG reseeded,
    /// step counter at zero.  The topology is kept.
    pub fn reset(&mut self) {
        self.fsm.reset();
        self.state.reset();
        self.rng = RobotRng::new(self.seed, self.robot);
        self.step = Step::ZERO;
        debug!(robot = %self.robot, "controller reset");
    }

    /// [`reset`](Self::reset), then [`announce`](Self::announce).
    pub fn reset_with<A: ActuatorBridge + ?Sized>(&mut self, actuators: &mut A) {
        self.reset();
        self.announce(actuators);
    }

    pub fn robot(&self) -> RobotId {
        self.robot
    }

    pub fn group(&self) -> GroupId {
        self.fsm.group()
    }

    pub fn active_state(&self) -> StateIndex {
        self.fsm.active()
    }

    /// Steps taken since init or the last reset.
    pub fn steps(&self) -> Step {
        self.step
    }

    pub fn fsm(&self) -> &FiniteStateMachine {
        &self.fsm
    }

    pub fn robot_state(&self) -> &RobotState {
        &self.state
    }
}
