use habitus_core::{BehavioralState, Strategy};

/// ENFORCEMENT when avoidance looks intentional, the user has capacity to
/// comply, and the day's stakes justify firmness.
pub fn enforcement_policy(state: &BehavioralState) -> Option<Strategy> {
    let applies = state.avoidance_tendency() >= 0.65 // intentional resistance
        && state.context_importance() >= 0.6 // high-stakes day
        && state.fatigue_index() <= 0.45 // capacity to comply
        && state.discipline_level() >= 0.4 // enforcement can still work
        && state.momentum_trend() >= -0.15 // not spiralling
        && state.failure_risk() >= 0.4; // a pattern of risk exists

    applies.then_some(Strategy::Enforcement)
}
