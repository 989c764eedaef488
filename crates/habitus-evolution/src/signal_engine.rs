//! Evaluation metrics → qualitative evolution signals. No policy mutation.

use std::collections::BTreeSet;

use habitus_core::{EvolutionSignal, GovernanceHealth, PolicyEvaluation};
use habitus_observability::tracing_setup::events;

const ALARM_FATIGUE_TRIGGER_RATE: f64 = 0.6;
const ALARM_FATIGUE_FALSE_ALARM_RATE: f64 = 0.25;
const OVER_ENFORCEMENT_RATIO: f64 = 0.6;
const UNDER_ENFORCEMENT_RATIO: f64 = 0.1;
const UNDER_ENFORCEMENT_FAILURE_RISK: f64 = 0.7;
const STAGNATION_RATIO: f64 = 0.8;

#[derive(Debug, Clone, Copy, Default)]
pub struct EvolutionSignalEngine;

impl EvolutionSignalEngine {
    pub fn new() -> Self {
        Self
    }

    /// Derive the set of flags for an evaluation. A healthy evaluation yields
    /// exactly `{Healthy}`; secondary warnings are never computed for it.
    pub fn derive(&self, evaluation: &PolicyEvaluation) -> BTreeSet<EvolutionSignal> {
        let signals = derive_signals(evaluation);
        let names: Vec<&str> = signals.iter().map(|s| s.as_str()).collect();
        events::evolution_signals_derived(&names);
        signals
    }
}

fn derive_signals(e: &PolicyEvaluation) -> BTreeSet<EvolutionSignal> {
    let mut signals = BTreeSet::new();

    match e.governance_health {
        GovernanceHealth::Healthy => {
            signals.insert(EvolutionSignal::Healthy);
            return signals;
        }
        GovernanceHealth::Risky => signals.insert(EvolutionSignal::Risky),
        GovernanceHealth::Degrading => signals.insert(EvolutionSignal::Degrading),
    };

    if e.alarm_trigger_rate > ALARM_FATIGUE_TRIGGER_RATE
        && e.false_alarm_rate > ALARM_FATIGUE_FALSE_ALARM_RATE
    {
        signals.insert(EvolutionSignal::AlarmFatigue);
    }

    if e.trust_delta < 0.0 {
        signals.insert(EvolutionSignal::TrustCollapse);
    }

    if e.enforcement_ratio > OVER_ENFORCEMENT_RATIO {
        signals.insert(EvolutionSignal::OverEnforcement);
    }

    if e.enforcement_ratio < UNDER_ENFORCEMENT_RATIO
        && e.failure_risk > UNDER_ENFORCEMENT_FAILURE_RISK
    {
        signals.insert(EvolutionSignal::UnderEnforcement);
    }

    if e.strategy_ratios().iter().any(|r| *r > STAGNATION_RATIO) {
        signals.insert(EvolutionSignal::StrategyStagnation);
    }

    signals
}
