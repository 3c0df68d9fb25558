use crate::codec::json::{PPT_KEY, TMAX_KEY, TMEAN_KEY, TMIN_KEY};
use crate::types::weather_record::WeatherRecord;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error returned when a variable name is not one of the recognized keys.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized variable \"{0}\", expected one of: tmax, tmin, tmean, ppt")]
pub struct ParseVariableError(pub String);

/// One of the four measured fields, addressable by name in aggregate queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variable {
    MaxTemp,
    MinTemp,
    MeanTemp,
    GasPpt,
}

impl Variable {
    pub const ALL: [Variable; 4] = [
        Variable::MaxTemp,
        Variable::MinTemp,
        Variable::MeanTemp,
        Variable::GasPpt,
    ];

    /// The JSON key this variable is stored under.
    pub fn as_key(self) -> &'static str {
        match self {
            Variable::MaxTemp => TMAX_KEY,
            Variable::MinTemp => TMIN_KEY,
            Variable::MeanTemp => TMEAN_KEY,
            Variable::GasPpt => PPT_KEY,
        }
    }

    /// Project this variable's measurement out of a record.
    pub fn extract(self, record: &WeatherRecord) -> Option<f32> {
        match self {
            Variable::MaxTemp => record.max_temp,
            Variable::MinTemp => record.min_temp,
            Variable::MeanTemp => record.mean_temp,
            Variable::GasPpt => record.gas_ppt,
        }
    }
}

impl FromStr for Variable {
    type Err = ParseVariableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Variable::ALL
            .into_iter()
            .find(|variable| variable.as_key() == s)
            .ok_or_else(|| ParseVariableError(s.to_string()))
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_key())
    }
}
