use thiserror::Error;

use super::states::State;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimError {
    #[error("State became non-finite at step {step}: {state:?}")]
    NonFinite { step: usize, state: State },

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

pub type SimResult<T> = Result<T, SimError>;
