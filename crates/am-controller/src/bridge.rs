//! Contracts with the robot platform.
//!
//! A controller never talks to hardware or a simulator directly: it reads
//! through a [`SensorBridge`] and writes through an [`ActuatorBridge`].  A
//! failed read leaves that sensor's previous reading in place for the step;
//! a failed write is skipped.  Both are logged at `warn`.

use am_core::{LedColor, RobotId};
use am_robot::{
    CameraBlob, GroundReadings, LightReading, NeighborMessage, ProximityReading, SensorSnapshot,
};
use tracing::warn;

use crate::BridgeError;

/// Read side of the robot platform.
pub trait SensorBridge {
    fn proximity(&mut self) -> Result<Vec<ProximityReading>, BridgeError>;

    fn light(&mut self) -> Result<Vec<LightReading>, BridgeError>;

    fn ground(&mut self) -> Result<GroundReadings, BridgeError>;

    /// Messages received from neighbours since the last
    /// [`clear_messages`](Self::clear_messages).
    fn messages(&mut self) -> Result<Vec<NeighborMessage>, BridgeError>;

    fn camera(&mut self) -> Result<Vec<CameraBlob>, BridgeError>;

    /// Drop buffered neighbour messages.  Called after every control step.
    fn clear_messages(&mut self) {}
}

/// Write side of the robot platform.
pub trait ActuatorBridge {
    fn set_wheels(&mut self, left: f64, right: f64) -> Result<(), BridgeError>;

    fn set_led(&mut self, color: LedColor) -> Result<(), BridgeError>;

    /// Start broadcasting `robot` on the neighbour-message channel so other
    /// robots can count and locate this one.
    fn broadcast_id(&mut self, _robot: RobotId) -> Result<(), BridgeError> {
        Ok(())
    }
}

/// Read every sensor once.  Failed reads are logged and left as `None`.
pub fn gather_snapshot<S: SensorBridge + ?Sized>(sensors: &mut S, robot: RobotId) -> SensorSnapshot {
    SensorSnapshot {
        proximity: read(robot, sensors.proximity()),
        light:     read(robot, sensors.light()),
        ground:    read(robot, sensors.ground()),
        messages:  read(robot, sensors.messages()),
        camera:    read(robot, sensors.camera()),
    }
}

fn read<T>(robot: RobotId, result: Result<T, BridgeError>) -> Option<T> {
    result
        .inspect_err(|err| warn!(%robot, error = %err, "sensor read failed; keeping previous reading"))
        .ok()
}
