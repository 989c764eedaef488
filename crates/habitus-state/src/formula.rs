use habitus_core::inputs::SignalBatch;
use habitus_core::BehavioralState;

use crate::accumulators::{self, MOMENTUM_DECAY};

/// Fold a batch onto a previous state.
///
/// ```text
/// x'        = clamp(x + Σ contribution(signal), 0, 1)     for the five unit scalars
/// momentum' = clamp((m + Σ contribution(signal)) × 0.95, -1, 1)
/// ```
pub fn compute(previous: &BehavioralState, batch: &SignalBatch) -> BehavioralState {
    compute_breakdown(previous, batch).next
}

/// Per-accumulator shifts before clamping, plus the resulting state.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateBreakdown {
    pub discipline_shift: f64,
    pub failure_risk_shift: f64,
    pub avoidance_shift: f64,
    pub fatigue_shift: f64,
    pub context_shift: f64,
    pub momentum_shift: f64,
    pub next: BehavioralState,
}

/// Compute the update with a full breakdown of each accumulator.
pub fn compute_breakdown(previous: &BehavioralState, batch: &SignalBatch) -> UpdateBreakdown {
    let discipline_shift = accumulators::DISCIPLINE.shift(batch);
    let failure_risk_shift = accumulators::FAILURE_RISK.shift(batch);
    let avoidance_shift = accumulators::AVOIDANCE.shift(batch);
    let fatigue_shift = accumulators::FATIGUE.shift(batch);
    let context_shift = accumulators::CONTEXT.shift(batch);
    let momentum_shift = accumulators::MOMENTUM.shift(batch);

    // BehavioralState::new clamps every component.
    let next = BehavioralState::new(
        previous.discipline_level() + discipline_shift,
        previous.failure_risk() + failure_risk_shift,
        previous.avoidance_tendency() + avoidance_shift,
        previous.fatigue_index() + fatigue_shift,
        previous.context_importance() + context_shift,
        (previous.momentum_trend() + momentum_shift) * MOMENTUM_DECAY,
    );

    UpdateBreakdown {
        discipline_shift,
        failure_risk_shift,
        avoidance_shift,
        fatigue_shift,
        context_shift,
        momentum_shift,
        next,
    }
}
