use habitus_core::inputs::SignalBatch;
use habitus_core::BehavioralState;
use tracing::debug;

use crate::formula::{self, UpdateBreakdown};

/// Stateless updater: the only entry point for behavioral state evolution.
#[derive(Debug, Clone, Copy, Default)]
pub struct StateUpdater;

impl StateUpdater {
    pub fn new() -> Self {
        Self
    }

    /// Produce the next state. With no previous state the batch is ignored
    /// and the cold-start prior is returned.
    pub fn update(&self, previous: Option<&BehavioralState>, batch: &SignalBatch) -> BehavioralState {
        match previous {
            None => BehavioralState::cold_start(),
            Some(prev) => formula::compute(prev, batch),
        }
    }

    /// Like [`update`](Self::update), also returning the raw accumulator
    /// shifts. Cold start yields all-zero shifts.
    pub fn update_with_breakdown(
        &self,
        previous: Option<&BehavioralState>,
        batch: &SignalBatch,
    ) -> UpdateBreakdown {
        let breakdown = match previous {
            None => UpdateBreakdown {
                discipline_shift: 0.0,
                failure_risk_shift: 0.0,
                avoidance_shift: 0.0,
                fatigue_shift: 0.0,
                context_shift: 0.0,
                momentum_shift: 0.0,
                next: BehavioralState::cold_start(),
            },
            Some(prev) => formula::compute_breakdown(prev, batch),
        };
        debug!(
            signals = batch.len(),
            failure_risk_shift = breakdown.failure_risk_shift,
            fatigue_shift = breakdown.fatigue_shift,
            "behavioral state updated"
        );
        breakdown
    }
}

/// Free-function form of [`StateUpdater::update`].
pub fn update_state(previous: Option<&BehavioralState>, batch: &SignalBatch) -> BehavioralState {
    StateUpdater.update(previous, batch)
}
