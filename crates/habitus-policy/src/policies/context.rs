use habitus_core::{BehavioralState, Strategy};

/// STABILIZATION on a low-stakes day with no acute risk.
pub fn context_guard_policy(state: &BehavioralState) -> Option<Strategy> {
    let low_stakes_and_stable = state.context_importance() <= 0.4
        && state.failure_risk() <= 0.5
        && state.fatigue_index() <= 0.6
        && state.avoidance_tendency() <= 0.5;

    low_stakes_and_stable.then_some(Strategy::Stabilization)
}
