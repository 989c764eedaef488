use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::state::BehavioralState;
use crate::strategy::Strategy;

/// Immutable, auditable explanation of one governance decision.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExplanationRecord {
    /// Globally unique decision identifier (UUID v4).
    decision_id: String,
    timestamp: DateTime<Utc>,
    trigger: String,
    strategy_selected: Strategy,
    /// Copy of all six state scalars at decision time.
    state_snapshot: BehavioralState,
    state_summary: String,
    action_summary: String,
    expected_outcome: String,
    reversal_condition: String,
    /// Clamped to [0.0, 1.0].
    decision_confidence: f64,
}

impl ExplanationRecord {
    /// Build a record with a fresh decision id and the current timestamp.
    pub fn new(
        trigger: impl Into<String>,
        strategy_selected: Strategy,
        state: BehavioralState,
        action_summary: impl Into<String>,
        expected_outcome: impl Into<String>,
        reversal_condition: impl Into<String>,
        decision_confidence: f64,
    ) -> Self {
        Self {
            decision_id: uuid::Uuid::new_v4().to_string(),
            timestamp: Utc::now(),
            trigger: trigger.into(),
            strategy_selected,
            state_snapshot: state,
            state_summary: state.summary(),
            action_summary: action_summary.into(),
            expected_outcome: expected_outcome.into(),
            reversal_condition: reversal_condition.into(),
            decision_confidence: if decision_confidence.is_nan() {
                0.0
            } else {
                decision_confidence.clamp(0.0, 1.0)
            },
        }
    }

    /// Globally unique decision identifier.
    pub fn decision_id(&self) -> &str {
        &self.decision_id
    }

    /// When the decision was made.
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// What prompted the decision.
    pub fn trigger(&self) -> &str {
        &self.trigger
    }

    /// Strategy the router selected.
    pub fn strategy_selected(&self) -> Strategy {
        self.strategy_selected
    }

    /// The state the decision was based on.
    pub fn state_snapshot(&self) -> BehavioralState {
        self.state_snapshot
    }

    /// Rendered form of the state snapshot.
    pub fn state_summary(&self) -> &str {
        &self.state_summary
    }

    /// What the brain chose to do.
    pub fn action_summary(&self) -> &str {
        &self.action_summary
    }

    pub fn expected_outcome(&self) -> &str {
        &self.expected_outcome
    }

    /// When the decision should be revisited.
    pub fn reversal_condition(&self) -> &str {
        &self.reversal_condition
    }

    /// Confidence in [0.0, 1.0].
    pub fn decision_confidence(&self) -> f64 {
        self.decision_confidence
    }

    /// One-line rationale: action plus the state it was based on.
    pub fn summary(&self) -> String {
        format!("{} ({})", self.action_summary, self.state_summary)
    }
}
