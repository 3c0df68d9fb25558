use std::fmt;

/// One day's weather observations.
///
/// Every measurement is optional: an absent field means "not measured", which
/// is distinct from a reading of zero. Records are immutable values; the
/// archive stores its own copy on insertion and hands out clones on retrieval.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct WeatherRecord {
    /// Observation time in Unix seconds (UTC), truncated to the day boundary.
    /// A record without a timestamp can exist transiently but can never be
    /// placed in a [`WeatherArchive`](crate::WeatherArchive).
    pub timestamp: Option<i64>,
    /// Maximum daily temperature, in Celsius.
    pub max_temp: Option<f32>,
    /// Minimum daily temperature, in Celsius.
    pub min_temp: Option<f32>,
    /// Mean daily temperature, in Celsius.
    pub mean_temp: Option<f32>,
    /// Trace-gas concentration, in parts per trillion.
    pub gas_ppt: Option<f32>,
}

impl fmt::Display for WeatherRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn line<T: fmt::Display>(
            f: &mut fmt::Formatter<'_>,
            name: &str,
            value: &Option<T>,
        ) -> fmt::Result {
            match value {
                Some(v) => writeln!(f, "{name}:\t{v}"),
                None => writeln!(f, "{name}:\t-"),
            }
        }

        line(f, "time", &self.timestamp)?;
        line(f, "tmax", &self.max_temp)?;
        line(f, "tmin", &self.min_temp)?;
        line(f, "tmean", &self.mean_temp)?;
        line(f, "ppt", &self.gas_ppt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equality_compares_all_fields() {
        let record = WeatherRecord {
            timestamp: Some(86_400),
            max_temp: Some(12.3),
            min_temp: Some(1.34),
            mean_temp: Some(5.43),
            gas_ppt: Some(0.134),
        };

        assert_eq!(record, record.clone());

        let mut other = record.clone();
        other.gas_ppt = None;
        assert_ne!(record, other, "absent must differ from present");

        let mut other = record.clone();
        other.max_temp = Some(12.4);
        assert_ne!(record, other);
    }

    #[test]
    fn absent_equals_absent() {
        assert_eq!(WeatherRecord::default(), WeatherRecord::default());
    }

    #[test]
    fn display_marks_absent_fields() {
        let record = WeatherRecord {
            timestamp: Some(0),
            max_temp: Some(12.5),
            ..WeatherRecord::default()
        };

        let text = record.to_string();
        assert!(text.contains("time:\t0"));
        assert!(text.contains("tmax:\t12.5"));
        assert!(text.contains("tmin:\t-"));
    }
}
