//! The shared robot-state record.
//!
//! Inputs are overwritten wholesale by the sensor half of a step; outputs are
//! overwritten by the active behaviour.  Derived views (light vector,
//! neighbour count, …) are computed on demand from the stored readings so
//! they can never go stale.

use am_core::{LedColor, RobotId, Vector2};

use crate::{
    ActuatorCommand, CameraBlob, GroundReadings, LightReading, NeighborMessage, ProximityReading,
};

/// Maximum e-puck wheel linear velocity in cm/s.
pub const MAX_WHEEL_VELOCITY: f64 = 16.0;

/// Per-robot record read by behaviours and conditions and written by the
/// sensor bridge (inputs) and the active behaviour (outputs).
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RobotState {
    robot: RobotId,

    // ── Inputs ────────────────────────────────────────────────────────────
    proximity: Vec<ProximityReading>,
    light:     Vec<LightReading>,
    ground:    GroundReadings,
    messages:  Vec<NeighborMessage>,
    camera:    Vec<CameraBlob>,

    // ── Outputs ───────────────────────────────────────────────────────────
    left_wheel:  f64,
    right_wheel: f64,
    led:         LedColor,
}

impl RobotState {
    /// A record with no readings and the wheels stopped.
    pub fn new(robot: RobotId) -> Self {
        Self {
            robot,
            proximity:   Vec::new(),
            light:       Vec::new(),
            ground:      GroundReadings::default(),
            messages:    Vec::new(),
            camera:      Vec::new(),
            left_wheel:  0.0,
            right_wheel: 0.0,
            led:         LedColor::Black,
        }
    }

    /// Forget every reading and output, keeping the robot id.
    pub fn reset(&mut self) {
        *self = Self::new(self.robot);
    }

    pub fn robot(&self) -> RobotId {
        self.robot
    }

    // ── Input writers (sensor half) ───────────────────────────────────────

    pub fn set_proximity(&mut self, readings: Vec<ProximityReading>) {
        self.proximity = readings;
    }

    pub fn set_light(&mut self, readings: Vec<LightReading>) {
        self.light = readings;
    }

    pub fn set_ground(&mut self, readings: GroundReadings) {
        self.ground = readings;
    }

    pub fn set_messages(&mut self, messages: Vec<NeighborMessage>) {
        self.messages = messages;
    }

    pub fn set_camera(&mut self, blobs: Vec<CameraBlob>) {
        self.camera = blobs;
    }

    // ── Input readers ─────────────────────────────────────────────────────

    pub fn proximity(&self) -> &[ProximityReading] {
        &self.proximity
    }

    pub fn light(&self) -> &[LightReading] {
        &self.light
    }

    pub fn ground(&self) -> GroundReadings {
        self.ground
    }

    pub fn messages(&self) -> &[NeighborMessage] {
        &self.messages
    }

    pub fn camera(&self) -> &[CameraBlob] {
        &self.camera
    }

    /// Sum of proximity readings as vectors; points toward the nearest
    /// obstacles.
    pub fn proximity_vector(&self) -> Vector2 {
        self.proximity.iter().map(|r| Vector2::from_polar(r.value, r.angle)).sum()
    }

    /// Sum of light readings as vectors; points toward the light source.
    pub fn light_vector(&self) -> Vector2 {
        self.light.iter().map(|r| Vector2::from_polar(r.value, r.angle)).sum()
    }

    /// Number of distinct neighbours heard this step.
    pub fn neighbour_count(&self) -> usize {
        let mut senders: Vec<RobotId> = self.messages.iter().map(|m| m.sender).collect();
        senders.sort_unstable();
        senders.dedup();
        senders.len()
    }

    /// Sum of neighbour attraction contributions.
    pub fn attraction_vector(&self) -> Vector2 {
        self.messages.iter().map(NeighborMessage::attraction).sum()
    }

    /// Sum of vectors toward every camera blob of `color`, weighted by
    /// closeness.
    pub fn color_vector(&self, color: LedColor) -> Vector2 {
        self.camera
            .iter()
            .filter(|b| b.color == color)
            .map(|b| Vector2::from_polar(1.0 / (1.0 + b.distance.max(0.0)), b.angle))
            .sum()
    }

    /// `true` if the camera perceives at least one blob of `color`.
    pub fn sees_color(&self, color: LedColor) -> bool {
        self.camera.iter().any(|b| b.color == color)
    }

    // ── Output writers (act half) ─────────────────────────────────────────

    /// Set wheel velocities, each clamped to `±MAX_WHEEL_VELOCITY`.
    pub fn set_wheel_velocity(&mut self, left: f64, right: f64) {
        self.left_wheel  = clamp_wheel(left);
        self.right_wheel = clamp_wheel(right);
    }

    pub fn set_led(&mut self, color: LedColor) {
        self.led = color;
    }

    // ── Output readers ────────────────────────────────────────────────────

    pub fn left_wheel(&self) -> f64 {
        self.left_wheel
    }

    pub fn right_wheel(&self) -> f64 {
        self.right_wheel
    }

    pub fn led(&self) -> LedColor {
        self.led
    }

    /// The actuator half of the step, as read by the bridge.
    pub fn command(&self) -> ActuatorCommand {
        ActuatorCommand {
            left_wheel:  self.left_wheel,
            right_wheel: self.right_wheel,
            led:         self.led,
        }
    }
}

fn clamp_wheel(v: f64) -> f64 {
    if v.is_nan() { 0.0 } else { v.clamp(-MAX_WHEEL_VELOCITY, MAX_WHEEL_VELOCITY) }
}
