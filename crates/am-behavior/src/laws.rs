//! Built-in control laws.
//!
//! All moving laws share one steering rule: head along a target vector,
//! bent away from obstacles by the proximity vector, and convert the result
//! into differential wheel speeds at the law's cruising velocity (`vel`,
//! default [`MAX_WHEEL_VELOCITY`]).

use std::f64::consts::FRAC_PI_2;

use am_core::{LedColor, RobotRng, Vector2};
use am_robot::{MAX_WHEEL_VELOCITY, RobotState};

use crate::{ControlLaw, Parameters};

/// Weight of the proximity vector against the target heading.
const OBSTACLE_GAIN: f64 = 5.0;

/// Proximity-vector length above which exploration treats the path as blocked.
const OBSTACLE_THRESHOLD: f64 = 0.1;

const DEFAULT_RANDOM_WALK_STEPS: f64 = 5.0;
const DEFAULT_NEIGHBOUR_GAIN: f64 = 3.0;
const DEFAULT_TARGET_COLOR: LedColor = LedColor::Red;

// ── Helpers ───────────────────────────────────────────────────────────────────

fn cruise_speed(params: &Parameters) -> f64 {
    params.get_or("vel", MAX_WHEEL_VELOCITY).clamp(0.0, MAX_WHEEL_VELOCITY)
}

fn target_color(params: &Parameters) -> LedColor {
    params
        .get("clr")
        .and_then(LedColor::from_parameter)
        .unwrap_or(DEFAULT_TARGET_COLOR)
}

/// Differential wheel speeds that turn the robot toward `v`.  The faster
/// wheel runs at `speed`.
fn wheels_for(v: Vector2, speed: f64) -> (f64, f64) {
    if v.length() <= f64::EPSILON {
        return (speed, speed);
    }
    let a = v.angle();
    let left  = a.cos() - a.sin();
    let right = a.cos() + a.sin();
    let norm  = left.abs().max(right.abs());
    (speed * left / norm, speed * right / norm)
}

/// Head along `heading` (straight ahead if zero), avoiding obstacles.
fn steer(robot: &mut RobotState, heading: Vector2, speed: f64) {
    let heading = if heading.length() > f64::EPSILON { heading } else { Vector2::new(1.0, 0.0) };
    let desired = heading - robot.proximity_vector() * OBSTACLE_GAIN;
    let (left, right) = wheels_for(desired, speed);
    robot.set_wheel_velocity(left, right);
}

fn spin(robot: &mut RobotState, turn_left: bool, speed: f64) {
    if turn_left {
        robot.set_wheel_velocity(-speed, speed);
    } else {
        robot.set_wheel_velocity(speed, -speed);
    }
}

// ── Exploration ───────────────────────────────────────────────────────────────

/// Drive straight; when an obstacle appears ahead, spin away from it for a
/// random number of steps in `[0, rwm]`.
#[derive(Default)]
pub struct Exploration {
    max_turn_steps:  u32,
    speed:           f64,
    turn_steps_left: u32,
    turn_left:       bool,
}

impl Exploration {
    /// `true` while the robot is committed to an avoidance turn.
    pub fn is_turning(&self) -> bool {
        self.turn_steps_left > 0
    }
}

impl ControlLaw for Exploration {
    fn init(&mut self, params: &Parameters) {
        self.max_turn_steps  = params.get_or("rwm", DEFAULT_RANDOM_WALK_STEPS).round().max(0.0) as u32;
        self.speed           = cruise_speed(params);
        self.turn_steps_left = 0;
        self.turn_left       = false;
    }

    fn control_step(&mut self, robot: &mut RobotState, rng: &mut RobotRng) {
        if self.turn_steps_left > 0 {
            self.turn_steps_left -= 1;
            spin(robot, self.turn_left, self.speed);
            return;
        }

        let obstacle = robot.proximity_vector();
        if obstacle.length() > OBSTACLE_THRESHOLD && obstacle.angle().abs() < FRAC_PI_2 {
            // Obstacle on the right → turn left, and vice versa.
            self.turn_left       = obstacle.angle() < 0.0;
            self.turn_steps_left = rng.gen_range(0..=self.max_turn_steps);
            spin(robot, self.turn_left, self.speed);
        } else {
            robot.set_wheel_velocity(self.speed, self.speed);
        }
    }
}

// ── Stop ──────────────────────────────────────────────────────────────────────

pub struct Stop;

impl ControlLaw for Stop {
    fn init(&mut self, _params: &Parameters) {}

    fn control_step(&mut self, robot: &mut RobotState, _rng: &mut RobotRng) {
        robot.set_wheel_velocity(0.0, 0.0);
    }
}

// ── Phototaxis / anti-phototaxis ──────────────────────────────────────────────

#[derive(Default)]
pub struct Phototaxis {
    speed: f64,
}

impl ControlLaw for Phototaxis {
    fn init(&mut self, params: &Parameters) {
        self.speed = cruise_speed(params);
    }

    fn control_step(&mut self, robot: &mut RobotState, _rng: &mut RobotRng) {
        let heading = robot.light_vector().normalized();
        steer(robot, heading, self.speed);
    }
}

#[derive(Default)]
pub struct AntiPhototaxis {
    speed: f64,
}

impl ControlLaw for AntiPhototaxis {
    fn init(&mut self, params: &Parameters) {
        self.speed = cruise_speed(params);
    }

    fn control_step(&mut self, robot: &mut RobotState, _rng: &mut RobotRng) {
        let heading = -robot.light_vector().normalized();
        steer(robot, heading, self.speed);
    }
}

// ── Attraction / repulsion ────────────────────────────────────────────────────

/// Move toward neighbours, with gain `att`.
#[derive(Default)]
pub struct Attraction {
    gain:  f64,
    speed: f64,
}

impl ControlLaw for Attraction {
    fn init(&mut self, params: &Parameters) {
        self.gain  = params.get_or("att", DEFAULT_NEIGHBOUR_GAIN);
        self.speed = cruise_speed(params);
    }

    fn control_step(&mut self, robot: &mut RobotState, _rng: &mut RobotRng) {
        let heading = robot.attraction_vector() * self.gain;
        steer(robot, heading, self.speed);
    }
}

/// Move away from neighbours, with gain `rep`.
#[derive(Default)]
pub struct Repulsion {
    gain:  f64,
    speed: f64,
}

impl ControlLaw for Repulsion {
    fn init(&mut self, params: &Parameters) {
        self.gain  = params.get_or("rep", DEFAULT_NEIGHBOUR_GAIN);
        self.speed = cruise_speed(params);
    }

    fn control_step(&mut self, robot: &mut RobotState, _rng: &mut RobotRng) {
        let heading = -robot.attraction_vector() * self.gain;
        steer(robot, heading, self.speed);
    }
}

// ── Colour following ──────────────────────────────────────────────────────────

/// Move toward camera blobs of colour `clr`.
#[derive(Default)]
pub struct GoToColor {
    target: LedColor,
    speed:  f64,
}

impl ControlLaw for GoToColor {
    fn init(&mut self, params: &Parameters) {
        self.target = target_color(params);
        self.speed  = cruise_speed(params);
    }

    fn control_step(&mut self, robot: &mut RobotState, _rng: &mut RobotRng) {
        let heading = robot.color_vector(self.target).normalized();
        steer(robot, heading, self.speed);
    }
}

/// Move away from camera blobs of colour `clr`.
#[derive(Default)]
pub struct GoAwayColor {
    target: LedColor,
    speed:  f64,
}

impl ControlLaw for GoAwayColor {
    fn init(&mut self, params: &Parameters) {
        self.target = target_color(params);
        self.speed  = cruise_speed(params);
    }

    fn control_step(&mut self, robot: &mut RobotState, _rng: &mut RobotRng) {
        let heading = -robot.color_vector(self.target).normalized();
        steer(robot, heading, self.speed);
    }
}
