//! Decoding and encoding of the JSON weather record shape.
//!
//! A record object carries optional keys `date` (a `YYYY-MM-DD` string) and
//! `tmax`, `tmin`, `tmean`, `ppt` (numbers). Decoding is lenient per field: a
//! missing or wrong-typed key simply leaves that measurement absent. A record
//! that is not a JSON object at all is a hard error.

use crate::archive::weather_archive::WeatherArchive;
use crate::codec::date::{date_to_unix, unix_to_date};
use crate::codec::error::DecodeError;
use crate::types::weather_record::WeatherRecord;
use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::Value;

pub const DATE_KEY: &str = "date";
pub const TMAX_KEY: &str = "tmax";
pub const TMIN_KEY: &str = "tmin";
pub const TMEAN_KEY: &str = "tmean";
pub const PPT_KEY: &str = "ppt";

/// Build a [`WeatherRecord`] from a decoded JSON value.
///
/// Fields stay absent when their key is missing, of the wrong type, or (for
/// `date`) not a valid calendar date.
///
/// # Errors
///
/// [`DecodeError::NotAnObject`] when the value is not a JSON object.
pub fn record_from_json(value: &Value) -> Result<WeatherRecord, DecodeError> {
    let object = value.as_object().ok_or(DecodeError::NotAnObject)?;

    let number = |key| object.get(key).and_then(Value::as_f64).map(|v| v as f32);

    Ok(WeatherRecord {
        timestamp: object
            .get(DATE_KEY)
            .and_then(Value::as_str)
            .and_then(date_to_unix),
        max_temp: number(TMAX_KEY),
        min_temp: number(TMIN_KEY),
        mean_temp: number(TMEAN_KEY),
        gas_ppt: number(PPT_KEY),
    })
}

/// Encode a record as a JSON object containing only its present fields.
///
/// The timestamp is rendered back to a `YYYY-MM-DD` string under `date`.
pub fn record_to_json(record: &WeatherRecord) -> Value {
    let mut object = serde_json::Map::new();
    if let Some(date) = record.timestamp.and_then(unix_to_date) {
        object.insert(DATE_KEY.to_string(), Value::String(date));
    }
    if let Some(v) = record.max_temp {
        object.insert(TMAX_KEY.to_string(), Value::from(v));
    }
    if let Some(v) = record.min_temp {
        object.insert(TMIN_KEY.to_string(), Value::from(v));
    }
    if let Some(v) = record.mean_temp {
        object.insert(TMEAN_KEY.to_string(), Value::from(v));
    }
    if let Some(v) = record.gas_ppt {
        object.insert(PPT_KEY.to_string(), Value::from(v));
    }
    Value::Object(object)
}

impl Serialize for WeatherRecord {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let object = record_to_json(self);
        // record_to_json always yields an object
        let entries = object.as_object().into_iter().flatten();
        let mut map = serializer.serialize_map(None)?;
        for (key, value) in entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// Ingest a whole JSON document into a fresh archive.
///
/// The document must be either a single record object or an array of record
/// objects. The load is atomic: every record is decoded before any is stored,
/// so a malformed entry leaves no partially filled archive behind.
pub fn archive_from_str(document: &str) -> Result<WeatherArchive, DecodeError> {
    let root: Value = serde_json::from_str(document)?;

    let records = match &root {
        Value::Array(items) => items
            .iter()
            .map(record_from_json)
            .collect::<Result<Vec<_>, _>>()?,
        Value::Object(_) => vec![record_from_json(&root)?],
        _ => return Err(DecodeError::UnsupportedDocument),
    };

    let mut archive = WeatherArchive::new();
    for record in records {
        archive.add_data(record);
    }
    Ok(archive)
}
