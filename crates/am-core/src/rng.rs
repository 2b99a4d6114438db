//! Randomness for the stochastic laws and guards.
//!
//! Exploration draws its avoidance-turn length and every probabilistic guard
//! draws its firing decision from the robot's own stream.  Streams are keyed
//! by `(seed, robot)` with a golden-ratio multiply, so each robot of a run is
//! independent of the others and a controller reset can replay its run by
//! reseeding.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::RobotId;

const GOLDEN_GAMMA: u64 = 0x9e37_79b9_7f4a_7c15;

/// One robot's random stream.  Lent to the active law and the guards of the
/// active state for the duration of a control step.
#[derive(Clone, Debug)]
pub struct RobotRng(SmallRng);

impl RobotRng {
    pub fn new(seed: u64, robot: RobotId) -> Self {
        Self(SmallRng::seed_from_u64(seed ^ u64::from(robot.0).wrapping_mul(GOLDEN_GAMMA)))
    }

    /// Uniform draw from `range`, e.g. the number of steps an avoidance turn
    /// lasts.
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// A guard's firing decision: `true` with probability `p`.  Out-of-range
    /// probabilities are clamped and NaN never fires.
    pub fn gen_bool(&mut self, p: f64) -> bool {
        !p.is_nan() && self.0.gen_bool(p.clamp(0.0, 1.0))
    }
}
