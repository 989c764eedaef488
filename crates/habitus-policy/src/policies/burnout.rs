//! Highest-priority policy: protects the user from burnout. May override
//! every other policy.

use habitus_core::{BehavioralState, Strategy};

/// SUPPORT on sustained overload, a downward spiral, discipline erosion
/// under fatigue, or avoidance under load.
pub fn burnout_policy(state: &BehavioralState) -> Option<Strategy> {
    let fatigue = state.fatigue_index();

    let acute_overload = state.failure_risk() >= 0.6 && fatigue >= 0.6;
    let downward_spiral = fatigue >= 0.7 && state.momentum_trend() <= -0.3;
    let discipline_erosion = state.discipline_level() <= 0.3 && fatigue >= 0.6;
    let silent_burnout = state.avoidance_tendency() >= 0.6 && fatigue >= 0.5;

    if acute_overload || downward_spiral || discipline_erosion || silent_burnout {
        Some(Strategy::Support)
    } else {
        None
    }
}
