//! `am-fsm`: decoding a group's descriptor slice into a runnable automaton.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                        |
//! |---------------|-----------------------------------------------------------------|
//! | [`decode`]    | `DecodeContext`, `possible_destinations`, behaviour/condition decoders |
//! | [`builder`]   | `FsmBuilder`, `build_fsm`: whole-automaton decoding            |
//! | [`automaton`] | `FiniteStateMachine`: the per-step runtime                     |
//! | [`encode`]    | `AutomatonSpec`, `StateSpec`, `TransitionSpec`, `encode_descriptor` |
//! | [`error`]     | `FsmError`, `FsmResult<T>`                                      |
//!
//! # Decoding at a glance
//!
//! ```rust,ignore
//! let tokens = am_descriptor::tokenize(
//!     "--nstates_0 2 --s0_0 1 --n0_0 1 --n0x0_0 0 --c0x0_0 5 --p0x0_0 1.0 --s1_0 0",
//! );
//! let mut fsm = build_fsm(&tokens)?;
//! fsm.control_step(&mut robot, &mut rng);
//! ```
//!
//! The builder expects the tokens of exactly one group (see
//! [`am_descriptor::partition`]); it finds the group from the first
//! `--nstates_<g>` flag.  Decoding either yields a complete automaton or an
//! error: there is no partial result.

pub mod automaton;
pub mod builder;
pub mod decode;
pub mod encode;
pub mod error;


pub use automaton::FiniteStateMachine;
pub use builder::{FsmBuilder, build_fsm};
pub use decode::{DecodeContext, possible_destinations};
pub use encode::{AutomatonSpec, StateSpec, TransitionSpec, encode_descriptor};
pub use error::{FsmError, FsmResult};
