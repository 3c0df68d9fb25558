//! The time-indexed archive of daily weather observations and its query
//! engine: point lookup, contiguous range extraction, per-variable means, and
//! historical resampling.

use crate::codec::date::{day_to_unix, unix_to_date};
use crate::types::period::{DateRange, YearRange};
use crate::types::variable::Variable;
use crate::types::weather_record::WeatherRecord;
use chrono::{Datelike, NaiveDate};
use log::warn;
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::BTreeMap;

/// An in-memory store of weather records keyed by day-granularity Unix
/// timestamp.
///
/// The backing map is ordered so range queries can iterate keys in ascending
/// timestamp order; insertion order never matters. The archive owns its
/// records exclusively and returns clones from every query, never references
/// into internal storage. There is no internal locking: an archive belongs to
/// one logical session, and callers sharing one across threads must provide
/// their own synchronization.
#[derive(Debug, Clone, Default)]
pub struct WeatherArchive {
    records: BTreeMap<i64, WeatherRecord>,
}

impl WeatherArchive {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record, keyed by its own timestamp.
    ///
    /// A record that already exists at that timestamp is replaced outright;
    /// stale fields from the prior record are discarded, not merged. A record
    /// without a timestamp cannot be placed in the archive and is silently
    /// dropped.
    pub fn add_data(&mut self, record: WeatherRecord) {
        if let Some(time) = record.timestamp {
            self.records.insert(time, record);
        }
    }

    /// Look up the record stored at exactly `time_sec`.
    ///
    /// A miss is a normal empty result, never an error.
    pub fn retrieve(&self, time_sec: i64) -> Option<WeatherRecord> {
        self.records.get(&time_sec).cloned()
    }

    /// Extract every record whose timestamp lies in `[begin_sec, end_sec]`,
    /// ascending.
    ///
    /// The start of the range must exist verbatim: when no record is stored
    /// at exactly `begin_sec` the result is empty even if interior points
    /// exist. A missing end anchor is fine; the range then runs through the
    /// last stored key at or before `end_sec`. An inverted range is empty.
    pub fn retrieve_range(&self, begin_sec: i64, end_sec: i64) -> Vec<WeatherRecord> {
        if begin_sec > end_sec || !self.records.contains_key(&begin_sec) {
            return Vec::new();
        }

        self.records
            .range(begin_sec..=end_sec)
            .map(|(_, record)| record.clone())
            .collect()
    }

    /// Mean of one variable over `[begin_sec, end_sec]`, subject to the same
    /// range policy as [`retrieve_range`](Self::retrieve_range).
    ///
    /// Records missing the variable are skipped (with a warning diagnostic)
    /// rather than counted. Returns NaN when no record in the range carries
    /// the variable; callers must treat that as "no usable data", not as a
    /// number to propagate.
    pub fn mean_of(&self, variable: Variable, begin_sec: i64, end_sec: i64) -> f64 {
        let mut sum = 0.0_f64;
        let mut count = 0_usize;

        for record in self.retrieve_range(begin_sec, end_sec) {
            match variable.extract(&record) {
                Some(value) => {
                    sum += f64::from(value);
                    count += 1;
                }
                None => {
                    if let Some(date) = record.timestamp.and_then(unix_to_date) {
                        warn!("data for {date} is missing \"{variable}\", ignored for the mean");
                    }
                }
            }
        }

        if count > 0 {
            sum / count as f64
        } else {
            f64::NAN
        }
    }

    /// Synthesize a representative history for `dates` by substituting, for
    /// each calendar day, an observation from the same month and day of a
    /// randomly chosen year in `years`.
    ///
    /// Uses a thread-local random source; see
    /// [`sample_historical_with_rng`](Self::sample_historical_with_rng) for
    /// the algorithm and for injecting a deterministic source in tests.
    pub fn sample_historical(&self, dates: &DateRange, years: &YearRange) -> Vec<WeatherRecord> {
        self.sample_historical_with_rng(dates, years, &mut rand::rng())
    }

    /// [`sample_historical`](Self::sample_historical) with an injected random
    /// source.
    ///
    /// Per day: the candidate years are shuffled afresh (different days may
    /// draw from different years within one run, by intent), then walked in
    /// shuffled order until one holds a record for that month and day.
    /// Candidate dates that do not exist in a given year, such as Feb 29
    /// outside leap years, are skipped. The winning record is re-stamped with
    /// the output day's timestamp. Days with no match in any candidate year
    /// are omitted from the result, which ascends by day.
    pub fn sample_historical_with_rng<R>(
        &self,
        dates: &DateRange,
        years: &YearRange,
        rng: &mut R,
    ) -> Vec<WeatherRecord>
    where
        R: Rng + ?Sized,
    {
        let mut candidate_years: Vec<i32> = years.years().collect();
        let mut sampled = Vec::new();

        for day in dates.days() {
            candidate_years.shuffle(rng);

            let hit = candidate_years.iter().find_map(|&year| {
                let candidate = NaiveDate::from_ymd_opt(year, day.month(), day.day())?;
                self.retrieve(day_to_unix(candidate))
            });

            if let Some(mut record) = hit {
                record.timestamp = Some(day_to_unix(day));
                sampled.push(record);
            }
        }

        sampled
    }

    /// Number of records stored.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate all records in ascending timestamp order.
    pub fn iter(&self) -> impl Iterator<Item = (&i64, &WeatherRecord)> {
        self.records.iter()
    }
}
