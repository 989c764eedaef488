use chrono::{Duration, Utc};
use habitus_core::inputs::{Signal, SignalBatch};
use habitus_core::BehavioralState;
use habitus_state::update_state;
use proptest::prelude::*;

const NAMES: &[&str] = &[
    "alarm_failure",
    "excessive_snooze",
    "late_night_usage",
    "clean_alarm_dismissal",
    "early_wake_success",
    "sleep_debt",
    "adequate_sleep",
    "volume_evasion",
    "clean_compliance_streak",
    "routine_break",
    "consistent_sleep_routine",
    "exam_day",
    "weekend",
    "unrelated_noise",
];

fn arb_batch() -> impl Strategy<Value = Vec<(usize, f64)>> {
    prop::collection::vec((0..NAMES.len(), 0.0f64..=1.0), 0..40)
}

fn to_batch(raw: &[(usize, f64)]) -> SignalBatch {
    let now = Utc::now();
    let signals = raw
        .iter()
        .map(|(i, c)| Signal::new(NAMES[*i], 1.0, *c, now - Duration::minutes(1)).unwrap())
        .collect();
    SignalBatch::new(signals, now - Duration::hours(1), now).unwrap()
}

fn in_bounds(s: &BehavioralState) -> bool {
    [
        s.discipline_level(),
        s.failure_risk(),
        s.avoidance_tendency(),
        s.fatigue_index(),
        s.context_importance(),
    ]
    .iter()
    .all(|v| (0.0..=1.0).contains(v))
        && (-1.0..=1.0).contains(&s.momentum_trend())
}

proptest! {
    #[test]
    fn state_stays_bounded_across_any_batch_sequence(
        batches in prop::collection::vec(arb_batch(), 1..20)
    ) {
        let mut state: Option<BehavioralState> = None;
        for raw in &batches {
            let next = update_state(state.as_ref(), &to_batch(raw));
            prop_assert!(in_bounds(&next), "out of bounds: {:?}", next);
            state = Some(next);
        }
    }

    #[test]
    fn momentum_magnitude_never_grows_without_signals(m in -1.0f64..=1.0) {
        let prev = BehavioralState::cold_start().with_momentum_trend(m);
        let next = update_state(Some(&prev), &to_batch(&[]));
        prop_assert!(next.momentum_trend().abs() <= prev.momentum_trend().abs());
    }
}
