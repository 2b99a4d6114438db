//! Base error type.
//!
//! Sub-crates define their own error enums and wrap `AmError` where a shared
//! variant is enough.

use thiserror::Error;

use crate::RobotId;

/// The common base error for `am-*` crates.
#[derive(Debug, Error)]
pub enum AmError {
    #[error("robot {0} is not part of this swarm")]
    UnknownRobot(RobotId),

    #[error("parse error: {0}")]
    Parse(String),
}

/// Shorthand result type.
pub type AmResult<T> = Result<T, AmError>;
