use chrono::{TimeZone, Utc};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use runmon::services::log_reader::parse_runs;
use runmon::services::ScheduleGenerator;

fn benchmark_schedule(c: &mut Criterion) {
    let generator = ScheduleGenerator::default();

    // A year into the plan, and ten years in (long window)
    let near = Utc.with_ymd_and_hms(2017, 5, 30, 12, 0, 0).unwrap();
    let far = Utc.with_ymd_and_hms(2026, 5, 30, 12, 0, 0).unwrap();

    let mut group = c.benchmark_group("build_schedule");

    group.bench_function("one_year", |b| {
        b.iter(|| generator.build_schedule(&[], black_box(500.0), black_box(near)))
    });

    group.bench_function("ten_years", |b| {
        b.iter(|| generator.build_schedule(&[], black_box(5000.0), black_box(far)))
    });

    group.finish();
}

fn benchmark_parse(c: &mut Criterion) {
    let log: String = (0..1000)
        .map(|i| format!("{},{}/{}/2016,3.1 mile,28:30\n", i, i % 12 + 1, i % 28 + 1))
        .collect();

    c.bench_function("parse_1000_runs", |b| {
        b.iter(|| parse_runs(black_box(log.as_bytes())).expect("Failed to parse log"))
    });
}

criterion_group!(benches, benchmark_schedule, benchmark_parse);
criterion_main!(benches);
