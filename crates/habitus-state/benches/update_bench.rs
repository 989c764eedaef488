use chrono::{Duration, Utc};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use habitus_core::inputs::{Signal, SignalBatch};
use habitus_core::BehavioralState;
use habitus_state::StateUpdater;

fn make_batch(size: usize) -> SignalBatch {
    let names = [
        "alarm_failure",
        "late_night_usage",
        "clean_alarm_dismissal",
        "adequate_sleep",
        "exam_day",
    ];
    let now = Utc::now();
    let signals = (0..size)
        .map(|i| Signal::new(names[i % names.len()], 1.0, 0.8, now - Duration::minutes(1)).unwrap())
        .collect();
    SignalBatch::new(signals, now - Duration::hours(8), now).unwrap()
}

fn bench_single_update(c: &mut Criterion) {
    let updater = StateUpdater::new();
    let prev = BehavioralState::cold_start();
    let batch = make_batch(8);

    c.bench_function("update_8_signals", |b| {
        b.iter(|| updater.update(black_box(Some(&prev)), black_box(&batch)))
    });
}

fn bench_large_batch(c: &mut Criterion) {
    let updater = StateUpdater::new();
    let prev = BehavioralState::cold_start();
    let batch = make_batch(1000);

    c.bench_function("update_1000_signals", |b| {
        b.iter(|| updater.update(black_box(Some(&prev)), black_box(&batch)))
    });
}

criterion_group!(benches, bench_single_update, bench_large_batch);
criterion_main!(benches);
