use criterion::{black_box, criterion_group, criterion_main, Criterion};
use parseweather::{date_to_unix, DateRange, Variable, WeatherArchive, WeatherRecord};

const DAY: i64 = 86_400;

/// Ten years of daily records, roughly the upper end of a single site's
/// history.
fn build_archive() -> (WeatherArchive, i64) {
    let start = date_to_unix("2010-01-01").unwrap();
    let mut archive = WeatherArchive::new();
    for i in 0..3_650 {
        archive.add_data(WeatherRecord {
            timestamp: Some(start + i * DAY),
            max_temp: Some(10.0 + (i % 30) as f32),
            min_temp: Some((i % 30) as f32 - 5.0),
            mean_temp: if i % 7 == 0 { None } else { Some(5.0) },
            gas_ppt: Some(0.1),
        });
    }
    (archive, start)
}

fn bench_archive(c: &mut Criterion) {
    let (archive, start) = build_archive();
    let end = start + 3_649 * DAY;

    c.bench_function("retrieve_range_decade", |b| {
        b.iter(|| archive.retrieve_range(black_box(start), black_box(end)))
    });

    c.bench_function("mean_of_decade", |b| {
        b.iter(|| archive.mean_of(Variable::MeanTemp, black_box(start), black_box(end)))
    });

    let dates: DateRange = "2022-01-01|2022-12-31".parse().unwrap();
    let years = "2010|2019".parse().unwrap();
    c.bench_function("sample_historical_year", |b| {
        b.iter(|| archive.sample_historical(black_box(&dates), black_box(&years)))
    });
}

criterion_group!(benches, bench_archive);
criterion_main!(benches);
