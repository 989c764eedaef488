use serde::Serialize;

use crate::inputs::SignalBatch;
use crate::outputs::{ExplanationRecord, GovernanceDirective};
use crate::state::BehavioralState;
use crate::strategy::Strategy;

/// Immutable record of one simulated day: what was observed, what the brain
/// believed and decided, and how the user reacted.
#[derive(Debug, Clone, Serialize)]
pub struct SimulationLog {
    day: u32,
    state: BehavioralState,
    signals: SignalBatch,
    directive: GovernanceDirective,
    explanation: ExplanationRecord,
    alarm_triggered: bool,
    outcome_success: Option<bool>,
    trust_delta: f64,
}

impl SimulationLog {
    /// Assemble the record for one simulated day.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        day: u32,
        state: BehavioralState,
        signals: SignalBatch,
        directive: GovernanceDirective,
        explanation: ExplanationRecord,
        alarm_triggered: bool,
        outcome_success: Option<bool>,
        trust_delta: f64,
    ) -> Self {
        Self {
            day,
            state,
            signals,
            directive,
            explanation,
            alarm_triggered,
            outcome_success,
            trust_delta,
        }
    }

    /// Simulated day, starting at 1.
    pub fn day(&self) -> u32 {
        self.day
    }

    /// State the decision was made on.
    pub fn state(&self) -> BehavioralState {
        self.state
    }

    /// Signals observed that day.
    pub fn signals(&self) -> &SignalBatch {
        &self.signals
    }

    pub fn directive(&self) -> &GovernanceDirective {
        &self.directive
    }

    pub fn explanation(&self) -> &ExplanationRecord {
        &self.explanation
    }

    /// Whether the directive fired an alarm.
    pub fn alarm_triggered(&self) -> bool {
        self.alarm_triggered
    }

    /// Ground-truth outcome, `None` when unknown.
    pub fn outcome_success(&self) -> Option<bool> {
        self.outcome_success
    }

    /// Trust change caused by the day's reaction.
    pub fn trust_delta(&self) -> f64 {
        self.trust_delta
    }

    /// Strategy chosen that day.
    pub fn strategy(&self) -> Strategy {
        self.directive.strategy()
    }

    /// Shorthand for the state's fatigue index.
    pub fn fatigue(&self) -> f64 {
        self.state.fatigue_index()
    }

    /// Shorthand for the state's failure risk.
    pub fn failure_risk(&self) -> f64 {
        self.state.failure_risk()
    }

    /// Shorthand for the state's discipline level.
    pub fn discipline(&self) -> f64 {
        self.state.discipline_level()
    }

    /// Shorthand for the state's avoidance tendency.
    pub fn avoidance(&self) -> f64 {
        self.state.avoidance_tendency()
    }

    /// Shorthand for the state's context importance.
    pub fn context(&self) -> f64 {
        self.state.context_importance()
    }

    /// Shorthand for the state's momentum trend.
    pub fn momentum(&self) -> f64 {
        self.state.momentum_trend()
    }

    /// Flatten into a serializable record for export and reporting.
    pub fn to_record(&self) -> LogRecord {
        LogRecord {
            day: self.day,
            strategy: self.strategy(),
            discipline: self.discipline(),
            failure_risk: self.failure_risk(),
            fatigue: self.fatigue(),
            avoidance: self.avoidance(),
            context: self.context(),
            momentum: self.momentum(),
            signal_names: self.signals.names(),
            required_strictness: self.directive.required_strictness(),
            recovery_allowed: self.directive.recovery_allowed(),
            alarm_triggered: self.alarm_triggered,
            outcome_success: self.outcome_success,
            trust_delta: self.trust_delta,
            explanation: self.explanation.summary(),
        }
    }
}

/// Flat view of a [`SimulationLog`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LogRecord {
    pub day: u32,
    pub strategy: Strategy,
    pub discipline: f64,
    pub failure_risk: f64,
    pub fatigue: f64,
    pub avoidance: f64,
    pub context: f64,
    pub momentum: f64,
    pub signal_names: Vec<String>,
    pub required_strictness: f64,
    pub recovery_allowed: bool,
    pub alarm_triggered: bool,
    pub outcome_success: Option<bool>,
    pub trust_delta: f64,
    pub explanation: String,
}
