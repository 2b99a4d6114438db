//! Structured flag names.
//!
//! Flag names pack their scope into the text: `--rwm3_1` is parameter `rwm`
//! of state 3 in group 1, `--c2x0_1` the kind of transition 0 leaving state
//! 2 in group 1.  [`FlagKey::parse`] recovers that scope once, so every later
//! lookup is a hash probe instead of a string scan.
//!
//! | Flag                     | Key                                  |
//! |--------------------------|--------------------------------------|
//! | `--ngroups`              | `GroupCount`                         |
//! | `--g<g>`                 | `GroupSize(g)`                       |
//! | `--nstates_<g>`          | `StateCount(g)`                      |
//! | `--s<j>_<g>`             | `StateKind { j, g }`                 |
//! | `--<name><j>_<g>`        | `StateParam { name, j, g }`          |
//! | `--n<j>_<g>`             | `TransitionCount { j, g }`           |
//! | `--n<j>x<i>_<g>`         | `TransitionDestination { j, i, g }`  |
//! | `--c<j>x<i>_<g>`         | `TransitionKind { j, i, g }`         |
//! | `--<name><j>x<i>_<g>`    | `TransitionParam { name, j, i, g }`  |

use std::fmt;

use am_core::{GroupId, StateIndex, TransitionIndex};

/// The scope and role of one descriptor flag.  Parameter names borrow from
/// the descriptor text.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum FlagKey<'a> {
    GroupCount,
    GroupSize(GroupId),
    StateCount(GroupId),
    StateKind {
        state: StateIndex,
        group: GroupId,
    },
    StateParam {
        name:  &'a str,
        state: StateIndex,
        group: GroupId,
    },
    TransitionCount {
        state: StateIndex,
        group: GroupId,
    },
    TransitionDestination {
        state:      StateIndex,
        transition: TransitionIndex,
        group:      GroupId,
    },
    TransitionKind {
        state:      StateIndex,
        transition: TransitionIndex,
        group:      GroupId,
    },
    TransitionParam {
        name:       &'a str,
        state:      StateIndex,
        transition: TransitionIndex,
        group:      GroupId,
    },
}

impl<'a> FlagKey<'a> {
    /// Parse a flag token (including its leading `--`).  Returns `None` for
    /// anything outside the grammar.
    pub fn parse(flag: &'a str) -> Option<FlagKey<'a>> {
        let body = flag.strip_prefix("--")?;
        if body == "ngroups" {
            return Some(FlagKey::GroupCount);
        }

        let (head, group) = match body.rsplit_once('_') {
            Some((head, g)) => (head, Some(GroupId(parse_index(g)?))),
            None => (body, None),
        };
        if head == "nstates" {
            return group.map(FlagKey::StateCount);
        }

        let split = head.find(|c: char| !c.is_ascii_alphabetic())?;
        let (name, scope) = head.split_at(split);
        if name.is_empty() {
            return None;
        }

        // Only group sizes lack a group suffix.
        let Some(group) = group else {
            return match name {
                "g" => parse_index(scope).map(|g| FlagKey::GroupSize(GroupId(g))),
                _ => None,
            };
        };

        match scope.split_once('x') {
            None => {
                let state = StateIndex(parse_index(scope)?);
                Some(match name {
                    "s" => FlagKey::StateKind { state, group },
                    "n" => FlagKey::TransitionCount { state, group },
                    _ => FlagKey::StateParam { name, state, group },
                })
            }
            Some((s, t)) => {
                let state      = StateIndex(parse_index(s)?);
                let transition = TransitionIndex(parse_index(t)?);
                Some(match name {
                    "n" => FlagKey::TransitionDestination { state, transition, group },
                    "c" => FlagKey::TransitionKind { state, transition, group },
                    _ => FlagKey::TransitionParam { name, state, transition, group },
                })
            }
        }
    }

    /// The group this flag is scoped to; `None` for group definitions.
    pub fn group(&self) -> Option<GroupId> {
        match *self {
            FlagKey::GroupCount | FlagKey::GroupSize(_) => None,
            FlagKey::StateCount(group)
            | FlagKey::StateKind { group, .. }
            | FlagKey::StateParam { group, .. }
            | FlagKey::TransitionCount { group, .. }
            | FlagKey::TransitionDestination { group, .. }
            | FlagKey::TransitionKind { group, .. }
            | FlagKey::TransitionParam { group, .. } => Some(group),
        }
    }

    /// `true` for `--ngroups` and `--g<g>`.
    pub fn is_group_definition(&self) -> bool {
        matches!(self, FlagKey::GroupCount | FlagKey::GroupSize(_))
    }
}

impl fmt::Display for FlagKey<'_> {
    /// Writes the flag back in descriptor form, e.g. `--c2x0_1`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            FlagKey::GroupCount => f.write_str("--ngroups"),
            FlagKey::GroupSize(g) => write!(f, "--g{}", g.0),
            FlagKey::StateCount(g) => write!(f, "--nstates_{}", g.0),
            FlagKey::StateKind { state, group } => write!(f, "--s{}_{}", state.0, group.0),
            FlagKey::StateParam { name, state, group } => {
                write!(f, "--{name}{}_{}", state.0, group.0)
            }
            FlagKey::TransitionCount { state, group } => write!(f, "--n{}_{}", state.0, group.0),
            FlagKey::TransitionDestination { state, transition, group } => {
                write!(f, "--n{}x{}_{}", state.0, transition.0, group.0)
            }
            FlagKey::TransitionKind { state, transition, group } => {
                write!(f, "--c{}x{}_{}", state.0, transition.0, group.0)
            }
            FlagKey::TransitionParam { name, state, transition, group } => {
                write!(f, "--{name}{}x{}_{}", state.0, transition.0, group.0)
            }
        }
    }
}

/// Non-empty run of ASCII digits.
fn parse_index(s: &str) -> Option<u32> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}
