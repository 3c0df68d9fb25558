mod archive;
mod codec;
mod error;
mod types;

pub use error::ParseWeatherError;

pub use archive::weather_archive::WeatherArchive;

pub use types::period::{DateRange, ParsePeriodError, YearRange};
pub use types::variable::{ParseVariableError, Variable};
pub use types::weather_record::WeatherRecord;

pub use codec::date::{date_to_unix, day_to_unix, unix_to_date, unix_to_day};
pub use codec::error::DecodeError;
pub use codec::json::{archive_from_str, record_from_json, record_to_json};
pub use codec::json::{DATE_KEY, PPT_KEY, TMAX_KEY, TMEAN_KEY, TMIN_KEY};
