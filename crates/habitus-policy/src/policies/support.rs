//! Early intervention for users showing strain but not burnout.

use habitus_core::{BehavioralState, Strategy};

/// SUPPORT when strain is present, discipline remains and avoidance has not
/// become dominant.
pub fn early_support_policy(state: &BehavioralState) -> Option<Strategy> {
    let pre_burnout = (0.45..0.6).contains(&state.failure_risk())
        && (0.45..0.6).contains(&state.fatigue_index())
        && state.discipline_level() >= 0.4
        && state.avoidance_tendency() <= 0.5;

    let negative_momentum_with_capacity = state.momentum_trend() <= -0.2
        && state.fatigue_index() >= 0.45
        && state.discipline_level() >= 0.35
        && state.avoidance_tendency() <= 0.5;

    (pre_burnout || negative_momentum_with_capacity).then_some(Strategy::Support)
}
