use std::hint::black_box;

use chrono::{DateTime, Duration, TimeZone, Utc};
use criterion::{criterion_group, criterion_main, Criterion};

use curtaincall_stats::models::AttendanceRecord;
use curtaincall_stats::stats::{aggregate, build_trend};
use curtaincall_stats::time::{resolve_windows, Period};

fn synthetic_records(count: usize) -> Vec<AttendanceRecord> {
    let base: DateTime<Utc> = Utc.with_ymd_and_hms(2025, 1, 1, 12, 0, 0).unwrap();
    let genres = ["Musical", "Play", "Concert", "Dance"];
    let companions = ["solo", "friends", "family", ""];

    (0..count)
        .map(|i| {
            let viewed_at = base + Duration::hours((i * 7) as i64 % (365 * 24));
            AttendanceRecord {
                id: i as i64,
                performance_id: format!("PF{:05}", i),
                title: format!("Performance {}", i),
                poster_url: None,
                area: Some(format!("Area {}", i % 12)),
                venue: None,
                genre: Some(genres[i % genres.len()].to_string()),
                viewed_at,
                rating: 1 + (i % 5) as i32,
                seat: String::new(),
                companion: companions[i % companions.len()].to_string(),
                cast: String::new(),
                memo: String::new(),
                created_at: viewed_at,
                updated_at: viewed_at,
            }
        })
        .collect()
}

fn bench_aggregate(c: &mut Criterion) {
    let records = synthetic_records(10_000);
    let anchor = Utc.with_ymd_and_hms(2025, 6, 15, 0, 0, 0).unwrap();
    let (window, _) = resolve_windows(Period::Yearly, anchor);

    c.bench_function("aggregate 10k records / yearly window", |b| {
        b.iter(|| aggregate(black_box(&records), black_box(&window)))
    });
}

fn bench_trend(c: &mut Criterion) {
    let records = synthetic_records(10_000);
    let anchor = Utc.with_ymd_and_hms(2025, 6, 15, 0, 0, 0).unwrap();
    let (window, _) = resolve_windows(Period::Yearly, anchor);

    c.bench_function("trend 10k records / 12 month buckets", |b| {
        b.iter(|| build_trend(black_box(&records), black_box(&window), Period::Yearly))
    });
}

criterion_group!(benches, bench_aggregate, bench_trend);
criterion_main!(benches);
