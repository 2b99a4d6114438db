//! Parameter catalogs and the name → value map attached to each unit.

use std::collections::BTreeMap;

use crate::{BehaviorError, BehaviorResult};

/// Every parameter name a behaviour may carry.
///
/// | Name  | Meaning                                      |
/// |-------|----------------------------------------------|
/// | `rwm` | exploration: max random-walk turning steps   |
/// | `att` | attraction: gain toward neighbours           |
/// | `rep` | repulsion: gain away from neighbours         |
/// | `cle` | colour emitted on the LEDs                   |
/// | `clr` | colour to approach or avoid                  |
/// | `vel` | cruising wheel velocity (cm/s)               |
pub const BEHAVIOUR_PARAMETERS: [&str; 6] = ["rwm", "att", "rep", "cle", "clr", "vel"];

/// Every parameter name a condition may carry.
///
/// | Name | Meaning                                        |
/// |------|------------------------------------------------|
/// | `p`  | probability, or neighbour threshold            |
/// | `w`  | steepness of the neighbour-count sigmoid       |
/// | `l`  | colour watched by the probabilistic-colour guard |
pub const CONDITION_PARAMETERS: [&str; 3] = ["p", "w", "l"];

/// Real-valued parameters keyed by catalog name.
///
/// Keys are the catalog's `&'static str`s, so a map can only ever hold names
/// from one of the two catalogs above.  Ordered so that equality and
/// iteration are deterministic.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Parameters(BTreeMap<&'static str, f64>);

impl Parameters {
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Attach `value` under `name`, replacing any previous value.
    pub fn insert(&mut self, name: &'static str, value: f64) {
        self.0.insert(name, value);
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.0.get(name).copied()
    }

    /// The value under `name`, or `default` when absent.
    pub fn get_or(&self, name: &str, default: f64) -> f64 {
        self.get(name).unwrap_or(default)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// `(name, value)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, f64)> + '_ {
        self.0.iter().map(|(&k, &v)| (k, v))
    }

    /// Reject NaN and infinite values.
    pub(crate) fn validate(&self) -> BehaviorResult<()> {
        match self.iter().find(|(_, v)| !v.is_finite()) {
            Some((name, value)) => Err(BehaviorError::InvalidParameter { name, value }),
            None => Ok(()),
        }
    }
}

impl<const N: usize> From<[(&'static str, f64); N]> for Parameters {
    fn from(pairs: [(&'static str, f64); N]) -> Self {
        Self(BTreeMap::from(pairs))
    }
}
