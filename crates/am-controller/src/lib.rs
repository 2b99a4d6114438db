//! `am-controller`: one automaton-driven controller per robot.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                    |
//! |----------------|-------------------------------------------------------------|
//! | [`config`]     | `ControllerConfig` (descriptor text + seed)                 |
//! | [`bridge`]     | `SensorBridge` / `ActuatorBridge` traits, `gather_snapshot` |
//! | [`controller`] | `Controller`: init, step, reset                            |
//! | [`swarm`]      | `Swarm`: every robot of a descriptor, stepped together     |
//! | [`error`]      | `ControllerError`, `BridgeError`, `ControllerResult<T>`     |
//!
//! # Lifecycle
//!
//! ```rust,ignore
//! let config = ControllerConfig::new(descriptor, 7);
//! let mut controller = Controller::init(&config, RobotId::from_name("epuck3")?)?;
//! controller.announce(&mut actuators);
//! loop {
//!     controller.control_step(&mut sensors, &mut actuators);
//! }
//! ```
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | `Swarm::step` runs controllers on Rayon's pool.        |
//! | `serde`    | Serde derives on `ControllerConfig` and I/O types.     |

pub mod bridge;
pub mod config;
pub mod controller;
pub mod error;
pub mod swarm;


pub use bridge::{ActuatorBridge, SensorBridge, gather_snapshot};
pub use config::ControllerConfig;
pub use controller::Controller;
pub use error::{BridgeError, ControllerError, ControllerResult};
pub use swarm::Swarm;
