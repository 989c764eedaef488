//! Read-only governance health metrics over a window of simulation logs.

use habitus_core::errors::EvolutionError;
use habitus_core::{GovernanceHealth, PolicyEvaluation, SimulationLog, Strategy};
use habitus_observability::tracing_setup::events;

/// False-alarm rate above which governance is considered risky.
pub const RISKY_FALSE_ALARM_RATE: f64 = 0.3;

/// Stateless evaluator. Never mutates policy or logs.
#[derive(Debug, Clone, Copy, Default)]
pub struct PolicyEvaluator;

impl PolicyEvaluator {
    pub fn new() -> Self {
        Self
    }

    /// Aggregate a non-empty, ordered window of logs.
    pub fn evaluate(&self, logs: &[SimulationLog]) -> Result<PolicyEvaluation, EvolutionError> {
        let (first, last) = match (logs.first(), logs.last()) {
            (Some(first), Some(last)) => (first, last),
            _ => return Err(EvolutionError::EmptyLogWindow),
        };
        let days = logs.len() as f64;

        let total_alarms = logs.iter().filter(|l| l.alarm_triggered()).count();
        let successes = logs
            .iter()
            .filter(|l| l.alarm_triggered() && l.outcome_success() == Some(true))
            .count();
        let false_alarms = logs
            .iter()
            .filter(|l| l.alarm_triggered() && l.outcome_success() == Some(false))
            .count();

        let per_alarm = |n: usize| {
            if total_alarms == 0 {
                0.0
            } else {
                n as f64 / total_alarms as f64
            }
        };
        let ratio = |strategy: Strategy| {
            logs.iter().filter(|l| l.strategy() == strategy).count() as f64 / days
        };

        let false_alarm_rate = per_alarm(false_alarms);
        let trust_delta: f64 = logs.iter().map(|l| l.trust_delta()).sum();

        let evaluation = PolicyEvaluation {
            window_days: logs.len(),
            alarm_trigger_rate: total_alarms as f64 / days,
            success_rate: per_alarm(successes),
            false_alarm_rate,
            trust_delta,
            fatigue_delta: last.fatigue() - first.fatigue(),
            failure_risk: logs.iter().map(|l| l.failure_risk()).sum::<f64>() / days,
            enforcement_ratio: ratio(Strategy::Enforcement),
            support_ratio: ratio(Strategy::Support),
            stabilization_ratio: ratio(Strategy::Stabilization),
            compensation_ratio: ratio(Strategy::Compensation),
            strategic_pause_ratio: ratio(Strategy::StrategicPause),
            governance_health: classify_health(false_alarm_rate, trust_delta),
        };

        events::evaluation_completed(
            evaluation.window_days,
            evaluation.governance_health.as_str(),
            evaluation.false_alarm_rate,
            evaluation.trust_delta,
        );

        Ok(evaluation)
    }
}

/// Risky beats degrading; anything else is healthy.
pub fn classify_health(false_alarm_rate: f64, trust_delta: f64) -> GovernanceHealth {
    if false_alarm_rate > RISKY_FALSE_ALARM_RATE {
        GovernanceHealth::Risky
    } else if trust_delta < 0.0 {
        GovernanceHealth::Degrading
    } else {
        GovernanceHealth::Healthy
    }
}
