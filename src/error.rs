use crate::codec::error::DecodeError;
use crate::types::period::ParsePeriodError;
use crate::types::variable::ParseVariableError;
use thiserror::Error;

/// Any error surfaced by this crate.
#[derive(Debug, Error)]
pub enum ParseWeatherError {
    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Variable(#[from] ParseVariableError),

    #[error(transparent)]
    Period(#[from] ParsePeriodError),
}
