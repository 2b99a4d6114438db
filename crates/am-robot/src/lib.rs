//! `am-robot`: the per-robot state record shared by sensors, the automaton,
//! and actuators.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                      |
//! |---------------|---------------------------------------------------------------|
//! | [`readings`]  | `ProximityReading`, `LightReading`, `GroundReadings`, `NeighborMessage`, `CameraBlob` |
//! | [`state`]     | `RobotState`: inputs written by sensors, outputs written by behaviours |
//! | [`snapshot`]  | `SensorSnapshot` (one step of sensor data), `ActuatorCommand` |
//!
//! # Phase discipline
//!
//! A control step has exactly two halves:
//!
//! 1. **Sense**: the bridge applies a `SensorSnapshot` to the record.
//! 2. **Act**: the automaton's active behaviour writes wheel and LED outputs,
//!    which the bridge reads back as an `ActuatorCommand`.
//!
//! Each half has one writer followed by one reader, so the record needs no
//! synchronisation.

pub mod readings;
pub mod snapshot;
pub mod state;


pub use readings::{CameraBlob, GroundReadings, LightReading, NeighborMessage, ProximityReading};
pub use snapshot::{ActuatorCommand, SensorSnapshot};
pub use state::{MAX_WHEEL_VELOCITY, RobotState};
