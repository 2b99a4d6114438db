//! `am-descriptor`: from descriptor text to addressable flags.
//!
//! A descriptor is a flat, whitespace-separated stream of `--flag value`
//! pairs produced by the swarm optimizer:
//!
//! ```text
//! --ngroups 2 --g0 3 --g1 2
//! --nstates_0 2 --s0_0 1 --n0_0 1 --n0x0_0 0 --c0x0_0 5 --p0x0_0 1.0 --s1_0 0 --rwm1_0 7
//! --nstates_1 1 --s0_1 2
//! ```
//!
//! Every flag but the group definitions ends in `_<group>`; state-scoped
//! flags carry the state index and transition-scoped flags carry
//! `<state>x<transition>` before that suffix.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                     |
//! |---------------|--------------------------------------------------------------|
//! | [`lexer`]     | `tokenize`, `is_flag`                                        |
//! | [`flag`]      | `FlagKey`: the structured form of a flag name, and its parser |
//! | [`table`]     | `FlagTable`: one-pass `FlagKey → (value, position)` index   |
//! | [`partition`] | `GroupLayout`, `extract_group`, `partition`                  |
//! | [`error`]     | `DescriptorError`, `DescriptorResult<T>`                     |
//!
//! # Cargo features
//!
//! | Feature   | Effect                                            |
//! |-----------|---------------------------------------------------|
//! | `fx-hash` | Uses FxHash for the flag-table index.             |

pub mod error;
pub mod flag;
pub mod lexer;
pub mod partition;
pub mod table;

#[cfg(test)]
mod tests;

pub use error::{DescriptorError, DescriptorResult};
pub use flag::FlagKey;
pub use lexer::{is_flag, tokenize};
pub use partition::{GroupLayout, extract_group, partition};
pub use table::{Flag, FlagTable};
