use thiserror::Error;

#[derive(Debug, Error)]
pub enum BehaviorError {
    #[error("unknown behaviour identifier {0}")]
    UnknownBehaviour(u32),

    #[error("unknown condition identifier {0}")]
    UnknownCondition(u32),

    #[error("parameter {name} has non-finite value {value}")]
    InvalidParameter {
        name:  &'static str,
        value: f64,
    },
}

pub type BehaviorResult<T> = Result<T, BehaviorError>;
