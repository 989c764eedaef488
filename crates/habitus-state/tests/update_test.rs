use chrono::{Duration, Utc};
use habitus_core::inputs::{Signal, SignalBatch};
use habitus_core::BehavioralState;
use habitus_state::{accumulators, categories, update_state, StateUpdater};

const EPS: f64 = 1e-9;

fn batch(names: &[(&str, f64)]) -> SignalBatch {
    let now = Utc::now();
    let signals = names
        .iter()
        .map(|(name, confidence)| {
            Signal::new(name, 1.0, *confidence, now - Duration::minutes(5)).unwrap()
        })
        .collect();
    SignalBatch::new(signals, now - Duration::hours(8), now).unwrap()
}

#[test]
fn cold_start_returns_neutral_prior_exactly() {
    let state = update_state(None, &batch(&[]));
    assert_eq!(state, BehavioralState::cold_start());
}

#[test]
fn cold_start_ignores_the_batch() {
    let state = update_state(None, &batch(&[("alarm_failure", 1.0), ("exam_day", 1.0)]));
    assert_eq!(state, BehavioralState::cold_start());
}

#[test]
fn empty_batch_only_decays_momentum() {
    let prev = BehavioralState::cold_start().with_momentum_trend(0.4);
    let next = update_state(Some(&prev), &batch(&[]));
    assert_eq!(next.failure_risk(), prev.failure_risk());
    assert_eq!(next.fatigue_index(), prev.fatigue_index());
    assert!((next.momentum_trend() - 0.38).abs() < EPS);
}

#[test]
fn failure_signal_raises_risk_by_confidence() {
    let prev = BehavioralState::cold_start();
    let next = update_state(Some(&prev), &batch(&[("alarm_failure", 0.5)]));
    assert!((next.failure_risk() - 0.55).abs() < EPS);
    assert!((next.discipline_level() - 0.48).abs() < EPS);
    assert!((next.momentum_trend() - (-0.015 * 0.95)).abs() < EPS);
}

#[test]
fn late_night_usage_moves_several_accumulators() {
    let prev = BehavioralState::cold_start();
    let next = update_state(Some(&prev), &batch(&[("late_night_usage", 1.0)]));
    assert!((next.failure_risk() - 0.6).abs() < EPS);
    assert!((next.fatigue_index() - 0.55).abs() < EPS);
    assert!(next.momentum_trend() < 0.0);
    // Discipline has no opinion on late-night usage.
    assert_eq!(next.discipline_level(), prev.discipline_level());
}

#[test]
fn avoidance_is_asymmetric() {
    let prev = BehavioralState::cold_start();
    let up = update_state(Some(&prev), &batch(&[("volume_evasion", 1.0)]));
    let down = update_state(Some(&prev), &batch(&[("clean_compliance_streak", 1.0)]));
    assert!((up.avoidance_tendency() - 0.35).abs() < EPS);
    assert!((down.avoidance_tendency() - 0.27).abs() < EPS);
}

#[test]
fn context_shifts_strongly() {
    let prev = BehavioralState::cold_start();
    let exam = update_state(Some(&prev), &batch(&[("exam_day", 1.0)]));
    assert!((exam.context_importance() - 0.7).abs() < EPS);
    let weekend = update_state(Some(&exam), &batch(&[("weekend", 1.0)]));
    assert!((weekend.context_importance() - 0.5).abs() < EPS);
}

#[test]
fn unknown_signals_are_ignored() {
    let prev = BehavioralState::cold_start();
    let next = update_state(Some(&prev), &batch(&[("moon_phase", 1.0)]));
    assert_eq!(next, prev);
}

#[test]
fn large_batches_clamp_instead_of_failing() {
    let many: Vec<(&str, f64)> = std::iter::repeat(("alarm_failure", 1.0)).take(50).collect();
    let prev = BehavioralState::cold_start();
    let next = update_state(Some(&prev), &batch(&many));
    assert_eq!(next.failure_risk(), 1.0);
    assert_eq!(next.discipline_level(), 0.0);
    assert!(next.momentum_trend() >= -1.0);
}

#[test]
fn signal_order_does_not_matter() {
    let prev = BehavioralState::cold_start();
    let a = update_state(
        Some(&prev),
        &batch(&[("alarm_failure", 1.0), ("adequate_sleep", 0.9), ("exam_day", 0.5)]),
    );
    let b = update_state(
        Some(&prev),
        &batch(&[("exam_day", 0.5), ("adequate_sleep", 0.9), ("alarm_failure", 1.0)]),
    );
    assert!((a.failure_risk() - b.failure_risk()).abs() < EPS);
    assert!((a.fatigue_index() - b.fatigue_index()).abs() < EPS);
    assert!((a.momentum_trend() - b.momentum_trend()).abs() < EPS);
    assert!((a.context_importance() - b.context_importance()).abs() < EPS);
}

#[test]
fn previous_state_is_left_intact() {
    let prev = BehavioralState::cold_start();
    let _ = update_state(Some(&prev), &batch(&[("alarm_failure", 1.0)]));
    assert_eq!(prev, BehavioralState::cold_start());
}

#[test]
fn breakdown_reports_raw_shifts() {
    let updater = StateUpdater::new();
    let prev = BehavioralState::cold_start().with_failure_risk(0.95);
    let b = batch(&[("alarm_failure", 1.0), ("excessive_snooze", 1.0)]);
    let breakdown = updater.update_with_breakdown(Some(&prev), &b);
    // Raw shift exceeds the remaining headroom; the state is clamped.
    assert!((breakdown.failure_risk_shift - 0.2).abs() < EPS);
    assert_eq!(breakdown.next.failure_risk(), 1.0);
    assert_eq!(breakdown.next, updater.update(Some(&prev), &b));
}

#[test]
fn category_sets_are_disjoint_within_each_accumulator() {
    for acc in accumulators::ALL {
        for name in acc.raises {
            assert!(
                !categories::contains(acc.lowers, name),
                "{} appears on both sides of {}",
                name,
                acc.name
            );
        }
    }
}
