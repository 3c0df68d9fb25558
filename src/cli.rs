//! Command line driver for the `parseweather` binary.
//!
//! The driver loads the whole JSON observation file into a
//! [`WeatherArchive`], then runs at most one query against it. Data misses
//! (an unknown date, a mean with no usable data) are reported on stderr but
//! are not failures; malformed option payloads and unreadable input are.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgGroup, Parser};
use parseweather::{
    archive_from_str, date_to_unix, day_to_unix, DateRange, ParseWeatherError, Variable,
    WeatherArchive, WeatherRecord, YearRange,
};

#[derive(Parser)]
#[command(
    name = "parseweather",
    version,
    about = "Parse a file of JSON formatted daily weather data and query it."
)]
#[command(group(ArgGroup::new("query").args(["date", "range", "mean", "sample_history"])))]
pub struct Cli {
    /// Path to the JSON weather data file.
    #[arg(short, long)]
    pub file: PathBuf,

    /// Print the observation for a single day, formatted as YYYY-MM-DD.
    #[arg(short, long, value_name = "DATE")]
    pub date: Option<String>,

    /// Print all observations within a date range, formatted as
    /// YYYY-MM-DD|YYYY-MM-DD. Days missing from the archive are skipped.
    /// (Escape the | character in a shell: 2022-01-01\|2022-12-31.)
    #[arg(short, long, value_name = "DATE_RANGE")]
    pub range: Option<DateRange>,

    /// Print the mean of a variable (tmax, tmin, tmean, or ppt) over a date
    /// range. The two values are accepted in either order; days missing the
    /// variable are ignored.
    #[arg(short, long, num_args = 2, value_names = ["DATE_RANGE", "VARIABLE"])]
    pub mean: Option<Vec<String>>,

    /// Synthesize observations for a date range by sampling, for each day,
    /// the same month and day of a randomly chosen year from a YYYY|YYYY
    /// range. The two values are accepted in either order.
    #[arg(short, long, num_args = 2, value_names = ["DATE_RANGE", "YEAR_RANGE"])]
    pub sample_history: Option<Vec<String>>,
}

pub fn run(cli: &Cli) -> Result<()> {
    let document = fs::read_to_string(&cli.file)
        .with_context(|| format!("failed to read {}", cli.file.display()))?;
    let archive = archive_from_str(&document)
        .with_context(|| format!("failed to load weather data from {}", cli.file.display()))?;
    log::info!("loaded {} records from {}", archive.len(), cli.file.display());

    if let Some(date) = &cli.date {
        run_date(&archive, date)
    } else if let Some(range) = &cli.range {
        print_records(&archive.retrieve_range(day_to_unix(range.start), day_to_unix(range.end)))
    } else if let Some([a, b]) = cli.mean.as_deref() {
        run_mean(&archive, a, b)
    } else if let Some([a, b]) = cli.sample_history.as_deref() {
        run_sample(&archive, a, b)
    } else {
        // no query requested; the load alone validates the file
        Ok(())
    }
}

fn run_date(archive: &WeatherArchive, date: &str) -> Result<()> {
    let time = date_to_unix(date)
        .with_context(|| format!("\"{date}\" is not a valid YYYY-MM-DD date"))?;

    match archive.retrieve(time) {
        Some(record) => {
            println!("{}", serde_json::to_string_pretty(&record)?);
        }
        None => eprintln!("data for date {date} is not available"),
    }
    Ok(())
}

fn run_mean(archive: &WeatherArchive, first: &str, second: &str) -> Result<()> {
    let (range, variable) = mean_inputs(first, second)?;
    let mean = archive.mean_of(variable, day_to_unix(range.start), day_to_unix(range.end));

    if mean.is_nan() {
        eprintln!("no data for \"{variable}\" is present within {range}");
    } else {
        println!("{mean:.3}");
    }
    Ok(())
}

fn run_sample(archive: &WeatherArchive, first: &str, second: &str) -> Result<()> {
    let (dates, years) = sample_inputs(first, second)?;
    print_records(&archive.sample_historical(&dates, &years))
}

/// Resolve the two `--mean` values, a date range and a variable name, which
/// are accepted in either order.
fn mean_inputs(first: &str, second: &str) -> Result<(DateRange, Variable), ParseWeatherError> {
    if let Ok(range) = first.parse::<DateRange>() {
        Ok((range, second.parse()?))
    } else {
        Ok((second.parse::<DateRange>()?, first.parse()?))
    }
}

/// Resolve the two `--sample-history` values, a date range and a year range,
/// which are accepted in either order.
fn sample_inputs(first: &str, second: &str) -> Result<(DateRange, YearRange), ParseWeatherError> {
    if let Ok(dates) = first.parse::<DateRange>() {
        Ok((dates, second.parse()?))
    } else {
        Ok((second.parse::<DateRange>()?, first.parse()?))
    }
}

fn print_records(records: &[WeatherRecord]) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(records)?);
    Ok(())
}
