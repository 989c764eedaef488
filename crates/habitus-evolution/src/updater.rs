//! Bounded, explainable parameter nudges derived from evolution signals.

use std::collections::BTreeSet;

use habitus_core::config::EvolutionConfig;
use habitus_core::constants::{
    PARAM_ALARM_STRICTNESS, PARAM_ENFORCEMENT_WEIGHT, PARAM_SUPPORT_WEIGHT,
};
use habitus_core::{EvolutionSignal, PolicyRecommendation, PolicyVersion};
use habitus_observability::tracing_setup::events;

/// Starting value for a parameter the current version does not carry.
pub const NEUTRAL_PARAMETER: f64 = 0.5;

/// How one evolution signal moves one parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Adjustment {
    pub parameter: &'static str,
    /// +1.0 raises the parameter, -1.0 lowers it.
    pub direction: f64,
    pub rationale: &'static str,
}

/// The fixed signal → parameter table. Signals without an entry never
/// produce a recommendation.
pub fn adjustment_for(signal: EvolutionSignal) -> Option<Adjustment> {
    let (parameter, direction, rationale) = match signal {
        EvolutionSignal::AlarmFatigue => (
            PARAM_ALARM_STRICTNESS,
            -1.0,
            "Reduce alarm strictness to relieve alarm fatigue",
        ),
        EvolutionSignal::TrustCollapse => (
            PARAM_SUPPORT_WEIGHT,
            1.0,
            "Increase support weight to rebuild user trust",
        ),
        EvolutionSignal::OverEnforcement => (
            PARAM_ENFORCEMENT_WEIGHT,
            -1.0,
            "Reduce enforcement weight to ease over-enforcement",
        ),
        EvolutionSignal::UnderEnforcement => (
            PARAM_ENFORCEMENT_WEIGHT,
            1.0,
            "Increase enforcement weight to address under-enforcement",
        ),
        EvolutionSignal::Healthy
        | EvolutionSignal::Risky
        | EvolutionSignal::Degrading
        | EvolutionSignal::StrategyStagnation => return None,
    };
    Some(Adjustment {
        parameter,
        direction,
        rationale,
    })
}

/// Proposes policy updates. Never mutates the current version.
#[derive(Debug, Clone, Copy)]
pub struct PolicyUpdater {
    step: f64,
}

impl PolicyUpdater {
    pub fn new(step: f64) -> Self {
        Self { step }
    }

    pub fn from_config(config: &EvolutionConfig) -> Self {
        Self::new(config.adjustment_step)
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    /// Recommend adjustments for `signals`, or `None` when no signal maps to
    /// a parameter.
    ///
    /// Each adjustment starts from the *current* value, so two signals on the
    /// same parameter do not compound; the later one in set order wins.
    pub fn propose_update(
        &self,
        current: &PolicyVersion,
        signals: &BTreeSet<EvolutionSignal>,
    ) -> Option<PolicyRecommendation> {
        let mut suggested = current.parameters().clone();
        let mut rationale = Vec::new();
        let mut triggering = Vec::new();

        for (signal, adj) in signals
            .iter()
            .filter_map(|s| adjustment_for(*s).map(|a| (*s, a)))
        {
            let base = current.parameter(adj.parameter).unwrap_or(NEUTRAL_PARAMETER);
            let next = (base + adj.direction * self.step).clamp(0.0, 1.0);
            suggested.insert(adj.parameter.to_string(), next);
            rationale.push(adj.rationale);
            triggering.push(signal.as_str().to_string());
        }

        if triggering.is_empty() {
            return None;
        }

        let recommendation = PolicyRecommendation {
            suggested_parameters: suggested,
            rationale: rationale.join("; "),
            triggering_signals: triggering,
        };
        events::recommendation_proposed(
            &recommendation.triggering_signals,
            &recommendation.rationale,
        );
        Some(recommendation)
    }
}

impl Default for PolicyUpdater {
    fn default() -> Self {
        Self::from_config(&EvolutionConfig::default())
    }
}
