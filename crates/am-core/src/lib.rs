//! `am-core`: foundational types for the automode swarm controller.
//!
//! This crate is a dependency of every other `am-*` crate.  It has no `am-*`
//! dependencies and minimal external ones (only `rand` and `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `RobotId`, `GroupId`, `StateIndex`, `TransitionIndex` |
//! | [`vector`]      | `Vector2` (planar polar/cartesian vector)             |
//! | [`color`]       | `LedColor` and the numeric colour catalog             |
//! | [`time`]        | `Step` counter                                        |
//! | [`rng`]         | `RobotRng` (per-robot deterministic RNG)              |
//! | [`error`]       | `AmError`, `AmResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod color;
pub mod error;
pub mod ids;
pub mod rng;
pub mod time;
pub mod vector;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use color::LedColor;
pub use error::{AmError, AmResult};
pub use ids::{GroupId, RobotId, StateIndex, TransitionIndex};
pub use rng::RobotRng;
pub use time::Step;
pub use vector::Vector2;
