//! Built-in guards.
//!
//! Every guard is stochastic: when its event holds it fires with probability
//! `p`.  An absent `p` means the guard fires whenever its event holds.

use am_core::{LedColor, RobotRng};
use am_robot::RobotState;

use crate::{Guard, Parameters};

const DEFAULT_PROBABILITY: f64 = 1.0;
const DEFAULT_STEEPNESS: f64 = 1.0;
const DEFAULT_NEIGHBOUR_THRESHOLD: f64 = 5.0;
const DEFAULT_WATCHED_COLOR: LedColor = LedColor::Red;

// ── Floor colour ──────────────────────────────────────────────────────────────

/// Fires with probability `p` while the mean ground reading lies in
/// `[low, high]`.
pub struct FloorColor {
    low:         f64,
    high:        f64,
    probability: f64,
}

impl FloorColor {
    fn with_band(low: f64, high: f64) -> Self {
        Self { low, high, probability: DEFAULT_PROBABILITY }
    }

    pub fn black() -> Self {
        Self::with_band(0.0, 0.1)
    }

    pub fn gray() -> Self {
        Self::with_band(0.4, 0.6)
    }

    pub fn white() -> Self {
        Self::with_band(0.95, 1.0)
    }
}

impl Guard for FloorColor {
    fn init(&mut self, params: &Parameters) {
        self.probability = params.get_or("p", DEFAULT_PROBABILITY);
    }

    fn verify(&mut self, robot: &RobotState, rng: &mut RobotRng) -> bool {
        let shade = robot.ground().mean();
        (self.low..=self.high).contains(&shade) && rng.gen_bool(self.probability)
    }
}

// ── Neighbour count ───────────────────────────────────────────────────────────

/// Fires with a sigmoid probability of the neighbour count `n`:
///
/// ```text
/// P(n) = 1 / (1 + exp(w · (p − n)))
/// ```
///
/// `p` is the count at which the probability crosses one half and `w` the
/// steepness.  The inverted guard fires with `1 − P(n)`.
pub struct NeighborsCount {
    inverted:  bool,
    steepness: f64,
    threshold: f64,
}

impl NeighborsCount {
    pub fn new(inverted: bool) -> Self {
        Self {
            inverted,
            steepness: DEFAULT_STEEPNESS,
            threshold: DEFAULT_NEIGHBOUR_THRESHOLD,
        }
    }

    /// Firing probability for `n` neighbours.
    pub fn probability(&self, n: usize) -> f64 {
        let p = 1.0 / (1.0 + (self.steepness * (self.threshold - n as f64)).exp());
        if self.inverted { 1.0 - p } else { p }
    }
}

impl Guard for NeighborsCount {
    fn init(&mut self, params: &Parameters) {
        self.steepness = params.get_or("w", DEFAULT_STEEPNESS);
        self.threshold = params.get_or("p", DEFAULT_NEIGHBOUR_THRESHOLD);
    }

    fn verify(&mut self, robot: &RobotState, rng: &mut RobotRng) -> bool {
        let p = self.probability(robot.neighbour_count());
        rng.gen_bool(p)
    }
}

// ── Fixed probability ─────────────────────────────────────────────────────────

/// Fires with probability `p` every step, regardless of inputs.
#[derive(Default)]
pub struct FixedProbability {
    probability: f64,
}

impl Guard for FixedProbability {
    fn init(&mut self, params: &Parameters) {
        self.probability = params.get_or("p", DEFAULT_PROBABILITY);
    }

    fn verify(&mut self, _robot: &RobotState, rng: &mut RobotRng) -> bool {
        rng.gen_bool(self.probability)
    }
}

// ── Probabilistic colour ──────────────────────────────────────────────────────

/// Fires with probability `p` while the camera sees colour `l`.
#[derive(Default)]
pub struct ProbColor {
    watched:     LedColor,
    probability: f64,
}

impl Guard for ProbColor {
    fn init(&mut self, params: &Parameters) {
        self.watched = params
            .get("l")
            .and_then(LedColor::from_parameter)
            .unwrap_or(DEFAULT_WATCHED_COLOR);
        self.probability = params.get_or("p", DEFAULT_PROBABILITY);
    }

    fn verify(&mut self, robot: &RobotState, rng: &mut RobotRng) -> bool {
        robot.sees_color(self.watched) && rng.gen_bool(self.probability)
    }
}
