use am_core::{GroupId, RobotId};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DescriptorError {
    #[error("required flag {0} not found")]
    MissingFlag(String),

    #[error("flag {0} has no value")]
    MissingValue(String),

    #[error("flag {flag} has invalid value {value:?}")]
    InvalidValue {
        flag:  String,
        value: String,
    },

    #[error("--ngroups declares {declared} groups but {found} group sizes were given")]
    GroupCountMismatch {
        declared: u32,
        found:    usize,
    },

    #[error("size of {0} given more than once")]
    DuplicateGroup(GroupId),

    #[error("no size given for {0}")]
    MissingGroup(GroupId),

    #[error("{robot} is outside the swarm population of {population}")]
    RobotOutOfRange {
        robot:      RobotId,
        population: u64,
    },
}

pub type DescriptorResult<T> = Result<T, DescriptorError>;
