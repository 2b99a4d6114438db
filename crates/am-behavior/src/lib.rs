//! `am-behavior`: the states and transitions an automaton is made of.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                         |
//! |---------------|------------------------------------------------------------------|
//! | [`params`]    | `Parameters`, `BEHAVIOUR_PARAMETERS`, `CONDITION_PARAMETERS`     |
//! | [`behaviour`] | `BehaviourKind`, `ControlLaw` trait, `Behaviour` (a state)       |
//! | [`laws`]      | Built-in control laws (exploration, phototaxis, …)              |
//! | [`condition`] | `ConditionKind`, `Guard` trait, `Condition` (a transition)       |
//! | [`guards`]    | Built-in guards (floor colour, neighbour count, …)              |
//! | [`error`]     | `BehaviorError`, `BehaviorResult<T>`                             |
//!
//! # Design notes
//!
//! Kinds are closed enums decoded from the optimizer's numeric identifiers.
//! The identifier tables have gaps (behaviours 6 and 7, condition 6); those
//! identifiers are rejected with an error rather than mapped to a default.
//!
//! The numeric work of each kind sits behind a small trait (`ControlLaw` for
//! behaviours, `Guard` for conditions) so the automaton only sees the
//! capability contract: initialize from parameters, then step or verify
//! against the shared [`RobotState`][am_robot::RobotState].

pub mod behaviour;
pub mod condition;
pub mod error;
pub mod guards;
pub mod laws;
pub mod params;

#[cfg(test)]
mod tests;

pub use behaviour::{Behaviour, BehaviourKind, ControlLaw};
pub use condition::{Condition, ConditionKind, Guard};
pub use error::{BehaviorError, BehaviorResult};
pub use params::{BEHAVIOUR_PARAMETERS, CONDITION_PARAMETERS, Parameters};
