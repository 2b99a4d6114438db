//! Every robot of a descriptor, stepped together.

use am_core::{AmError, RobotId};
use am_descriptor::{GroupLayout, tokenize};
use am_robot::{ActuatorCommand, SensorSnapshot};
use tracing::info;

use crate::{Controller, ControllerConfig, ControllerError, ControllerResult};

/// One [`Controller`] per robot id declared by the descriptor's groups.
///
/// Controllers are independent: stepping never shares state between robots.
/// With the `parallel` feature [`step`](Self::step) runs them on Rayon's pool;
/// the results are identical either way.
pub struct Swarm {
    layout:      GroupLayout,
    controllers: Vec<Controller>,
}

impl Swarm {
    /// Build a controller for every robot id in `0..population`.
    pub fn new(config: &ControllerConfig) -> ControllerResult<Self> {
        config.validate()?;
        let layout = GroupLayout::from_tokens(&tokenize(&config.fsm_config))?;
        let population = u32::try_from(layout.population())
            .map_err(|_| ControllerError::Config(format!("population {} too large", layout.population())))?;

        let controllers = (0..population)
            .map(|id| Controller::init(config, RobotId(id)))
            .collect::<ControllerResult<Vec<_>>>()?;

        info!(groups = layout.group_count(), robots = controllers.len(), "swarm initialized");
        Ok(Self { layout, controllers })
    }

    /// Step every robot.  `snapshots[i]` is the input of robot `i`; the
    /// returned commands are in the same order.
    pub fn step(&mut self, snapshots: Vec<SensorSnapshot>) -> ControllerResult<Vec<ActuatorCommand>> {
        if snapshots.len() != self.controllers.len() {
            return Err(ControllerError::SnapshotCountMismatch {
                expected: self.controllers.len(),
                got:      snapshots.len(),
            });
        }

        #[cfg(not(feature = "parallel"))]
        let commands = self
            .controllers
            .iter_mut()
            .zip(snapshots)
            .map(|(controller, snapshot)| controller.step(snapshot))
            .collect();

        #[cfg(feature = "parallel")]
        let commands = {
            use rayon::prelude::*;

            self.controllers
                .par_iter_mut()
                .zip(snapshots.into_par_iter())
                .map(|(controller, snapshot)| controller.step(snapshot))
                .collect()
        };

        Ok(commands)
    }

    /// Step a single robot.
    pub fn step_robot(&mut self, robot: RobotId, snapshot: SensorSnapshot) -> ControllerResult<ActuatorCommand> {
        let controller = self
            .controllers
            .get_mut(robot.index())
            .ok_or(AmError::UnknownRobot(robot))?;
        Ok(controller.step(snapshot))
    }

    pub fn reset(&mut self) {
        self.controllers.iter_mut().for_each(Controller::reset);
    }

    pub fn layout(&self) -> &GroupLayout {
        &self.layout
    }

    pub fn len(&self) -> usize {
        self.controllers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.controllers.is_empty()
    }

    pub fn controller(&self, robot: RobotId) -> Option<&Controller> {
        self.controllers.get(robot.index())
    }

    pub fn controllers(&self) -> &[Controller] {
        &self.controllers
    }
}
