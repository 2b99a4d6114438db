//! A synthetic circular arena with a black floor patch and one light source.
//!
//! Each step has two phases.  [`Arena::sense`] computes one robot's readings
//! from the current positions (read-only), and [`Arena::actuate`] records the
//! robot's outputs.  [`Arena::advance`] then moves every robot at once.

use std::f64::consts::PI;

use am_controller::{ActuatorBridge, BridgeError, SensorBridge};
use am_core::{LedColor, RobotId, Vector2};
use am_robot::{CameraBlob, GroundReadings, LightReading, NeighborMessage, ProximityReading};

// ── Constants ─────────────────────────────────────────────────────────────────

const ARENA_RADIUS:    f64 = 120.0; // cm
const ROBOT_RADIUS:    f64 = 3.5;
const AXLE_LENGTH:     f64 = 5.3;
const PROXIMITY_RANGE: f64 = 10.0;
const RAB_RANGE:       f64 = 50.0;  // range-and-bearing message range
const CAMERA_RANGE:    f64 = 100.0;
const PATCH_RADIUS:    f64 = 30.0;

// ── Bodies ────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct Body {
    pub position:     Vector2,
    pub heading:      f64,
    pub led:          LedColor,
    pub broadcasting: bool,
    wheels:           (f64, f64),
}

pub struct Arena {
    pub bodies: Vec<Body>,
    light:      Vector2,
    patch:      Vector2,
}

impl Arena {
    /// `count` robots evenly spaced on a ring, all facing the centre.
    pub fn new(count: usize) -> Self {
        let bodies = (0..count)
            .map(|i| {
                let a = 2.0 * PI * i as f64 / count.max(1) as f64;
                Body {
                    position:     Vector2::from_polar(ARENA_RADIUS * 0.7, a),
                    heading:      a + PI,
                    led:          LedColor::Black,
                    broadcasting: false,
                    wheels:       (0.0, 0.0),
                }
            })
            .collect();
        Self {
            bodies,
            light: Vector2::new(0.0, ARENA_RADIUS),
            patch: Vector2::new(0.0, -ARENA_RADIUS * 0.4),
        }
    }

    /// `true` if robot `i` stands on the black patch.
    pub fn on_patch(&self, i: usize) -> bool {
        (self.bodies[i].position - self.patch).length() <= PATCH_RADIUS
    }

    /// Polar coordinates of `target` in the frame of robot `i`.
    fn relative(&self, i: usize, target: Vector2) -> (f64, f64) {
        let body = &self.bodies[i];
        let d = target - body.position;
        (d.length(), wrap(d.angle() - body.heading))
    }

    pub fn sense(&self, i: usize) -> ArenaSensors {
        let me = &self.bodies[i];
        let mut sensors = ArenaSensors::default();

        // Wall: the nearest point of the boundary lies straight out from the centre.
        let from_centre = me.position.length();
        let wall_gap = ARENA_RADIUS - from_centre - ROBOT_RADIUS;
        if wall_gap < PROXIMITY_RANGE && from_centre > f64::EPSILON {
            let wall = me.position.normalized() * ARENA_RADIUS;
            let (_, angle) = self.relative(i, wall);
            sensors.proximity.push(ProximityReading { value: 1.0 - wall_gap.max(0.0) / PROXIMITY_RANGE, angle });
        }

        for (j, other) in self.bodies.iter().enumerate() {
            if j == i {
                continue;
            }
            let (distance, angle) = self.relative(i, other.position);
            let gap = distance - 2.0 * ROBOT_RADIUS;
            if gap < PROXIMITY_RANGE {
                sensors.proximity.push(ProximityReading { value: 1.0 - gap.max(0.0) / PROXIMITY_RANGE, angle });
            }
            if other.broadcasting && distance < RAB_RANGE {
                sensors.messages.push(NeighborMessage { sender: RobotId(j as u32), range: distance, bearing: angle });
            }
            if other.led != LedColor::Black && distance < CAMERA_RANGE {
                sensors.camera.push(CameraBlob { color: other.led, distance, angle });
            }
        }

        let (distance, angle) = self.relative(i, self.light);
        sensors.light.push(LightReading { value: 1.0 / (1.0 + distance / 100.0), angle });
        sensors.ground = GroundReadings::uniform(if self.on_patch(i) { 0.0 } else { 1.0 });
        sensors
    }

    pub fn actuate(&mut self, i: usize, actuators: ArenaActuators) {
        let body = &mut self.bodies[i];
        body.wheels = actuators.wheels;
        body.led = actuators.led;
        body.broadcasting |= actuators.broadcasting;
    }

    /// Integrate differential-drive kinematics over `dt` seconds and keep
    /// every robot inside the arena.
    pub fn advance(&mut self, dt: f64) {
        for body in &mut self.bodies {
            let (left, right) = body.wheels;
            let speed = (left + right) / 2.0;
            body.heading = wrap(body.heading + (right - left) / AXLE_LENGTH * dt);
            body.position += Vector2::from_polar(speed * dt, body.heading);
            body.position = body.position.clamp_length(ARENA_RADIUS - ROBOT_RADIUS);
        }
    }
}

fn wrap(angle: f64) -> f64 {
    (angle + PI).rem_euclid(2.0 * PI) - PI
}

// ── Bridges ───────────────────────────────────────────────────────────────────

/// One robot's readings for the current step.
#[derive(Default)]
pub struct ArenaSensors {
    proximity: Vec<ProximityReading>,
    light:     Vec<LightReading>,
    ground:    GroundReadings,
    messages:  Vec<NeighborMessage>,
    camera:    Vec<CameraBlob>,
}

impl SensorBridge for ArenaSensors {
    fn proximity(&mut self) -> Result<Vec<ProximityReading>, BridgeError> {
        Ok(std::mem::take(&mut self.proximity))
    }

    fn light(&mut self) -> Result<Vec<LightReading>, BridgeError> {
        Ok(std::mem::take(&mut self.light))
    }

    fn ground(&mut self) -> Result<GroundReadings, BridgeError> {
        Ok(self.ground)
    }

    fn messages(&mut self) -> Result<Vec<NeighborMessage>, BridgeError> {
        Ok(self.messages.clone())
    }

    fn camera(&mut self) -> Result<Vec<CameraBlob>, BridgeError> {
        Ok(std::mem::take(&mut self.camera))
    }

    fn clear_messages(&mut self) {
        self.messages.clear();
    }
}

/// One robot's outputs for the current step.
#[derive(Default)]
pub struct ArenaActuators {
    wheels:       (f64, f64),
    led:          LedColor,
    broadcasting: bool,
}

impl ActuatorBridge for ArenaActuators {
    fn set_wheels(&mut self, left: f64, right: f64) -> Result<(), BridgeError> {
        self.wheels = (left, right);
        Ok(())
    }

    fn set_led(&mut self, color: LedColor) -> Result<(), BridgeError> {
        self.led = color;
        Ok(())
    }

    fn broadcast_id(&mut self, _robot: RobotId) -> Result<(), BridgeError> {
        self.broadcasting = true;
        Ok(())
    }
}
