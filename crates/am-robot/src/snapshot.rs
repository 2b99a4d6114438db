//! One step's worth of sensor input, and the resulting actuator command.

use am_core::LedColor;

use crate::{CameraBlob, GroundReadings, LightReading, NeighborMessage, ProximityReading, RobotState};

/// Sensor readings gathered for one control step.
///
/// Every field is optional: a sensor that failed (or is absent on this
/// robot) leaves `None`, and the previous reading stays in the
/// [`RobotState`] for this step.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SensorSnapshot {
    pub proximity: Option<Vec<ProximityReading>>,
    pub light:     Option<Vec<LightReading>>,
    pub ground:    Option<GroundReadings>,
    pub messages:  Option<Vec<NeighborMessage>>,
    pub camera:    Option<Vec<CameraBlob>>,
}

impl SensorSnapshot {
    /// Write the present readings into `state`.
    pub fn apply_to(self, state: &mut RobotState) {
        if let Some(r) = self.messages {
            state.set_messages(r);
        }
        if let Some(r) = self.ground {
            state.set_ground(r);
        }
        if let Some(r) = self.light {
            state.set_light(r);
        }
        if let Some(r) = self.proximity {
            state.set_proximity(r);
        }
        if let Some(r) = self.camera {
            state.set_camera(r);
        }
    }
}

/// Wheel and LED outputs produced by one control step.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActuatorCommand {
    pub left_wheel:  f64,
    pub right_wheel: f64,
    pub led:         LedColor,
}

impl ActuatorCommand {
    pub fn is_stopped(&self) -> bool {
        self.left_wheel == 0.0 && self.right_wheel == 0.0
    }
}
