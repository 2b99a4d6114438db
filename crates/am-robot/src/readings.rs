//! Typed sensor readings, one struct per e-puck sensor family.
//!
//! Angles are bearings in radians in the robot frame (0 = straight ahead,
//! positive = left).  Distances are in centimetres.

use am_core::{LedColor, RobotId, Vector2};

/// One infrared proximity sensor.  `value` is in `[0, 1]`; higher is closer.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProximityReading {
    pub value: f64,
    pub angle: f64,
}

/// One ambient light sensor.  `value` is in `[0, 1]`; higher is brighter.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LightReading {
    pub value: f64,
    pub angle: f64,
}

/// The three downward-facing ground sensors.  0 = black, 1 = white.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GroundReadings {
    pub left:   f64,
    pub center: f64,
    pub right:  f64,
}

impl GroundReadings {
    /// Uniform floor of the given shade under all three sensors.
    pub fn uniform(shade: f64) -> Self {
        Self { left: shade, center: shade, right: shade }
    }

    /// Mean shade under the robot.
    pub fn mean(&self) -> f64 {
        (self.left + self.center + self.right) / 3.0
    }
}

impl Default for GroundReadings {
    /// A gray floor: neither black nor white conditions fire on it.
    fn default() -> Self {
        Self::uniform(0.5)
    }
}

/// A range-and-bearing packet received from a neighbouring robot.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NeighborMessage {
    /// Robot id the neighbour broadcasts (first payload byte).
    pub sender:  RobotId,
    pub range:   f64,
    pub bearing: f64,
}

impl NeighborMessage {
    /// Attraction contribution of this neighbour: closer neighbours pull
    /// harder.
    pub fn attraction(&self) -> Vector2 {
        Vector2::from_polar(1.0 / (1.0 + self.range.max(0.0)), self.bearing)
    }
}

/// A coloured blob detected by the omnidirectional camera.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CameraBlob {
    pub color:    LedColor,
    pub distance: f64,
    pub angle:    f64,
}
