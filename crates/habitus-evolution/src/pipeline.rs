//! One-shot evaluate → derive → propose → apply.

use std::collections::BTreeSet;

use habitus_core::config::EvolutionConfig;
use habitus_core::errors::HabitusResult;
use habitus_core::{
    EvolutionSignal, PolicyEvaluation, PolicyRecommendation, PolicyVersion, SimulationLog,
};
use tracing::info;

use crate::applier::PolicyVersionApplier;
use crate::evaluator::PolicyEvaluator;
use crate::report::PolicyEvolutionReport;
use crate::signal_engine::EvolutionSignalEngine;
use crate::updater::PolicyUpdater;

/// Everything one evolution pass produced. The proposed version is only a
/// candidate awaiting human approval.
#[derive(Debug, Clone)]
pub struct EvolutionOutcome {
    pub evaluation: PolicyEvaluation,
    pub signals: BTreeSet<EvolutionSignal>,
    pub recommendation: Option<PolicyRecommendation>,
    pub proposed_version: Option<PolicyVersion>,
}

impl EvolutionOutcome {
    pub fn has_proposal(&self) -> bool {
        self.proposed_version.is_some()
    }

    pub fn report(&self) -> String {
        PolicyEvolutionReport::new().from_outcome(self)
    }
}

#[derive(Debug, Clone, Default)]
pub struct EvolutionPipeline {
    evaluator: PolicyEvaluator,
    engine: EvolutionSignalEngine,
    updater: PolicyUpdater,
    applier: PolicyVersionApplier,
}

impl EvolutionPipeline {
    pub fn new(config: &EvolutionConfig) -> Self {
        Self {
            updater: PolicyUpdater::from_config(config),
            ..Self::default()
        }
    }

    pub fn run(&self, logs: &[SimulationLog], current: &PolicyVersion) -> HabitusResult<EvolutionOutcome> {
        let evaluation = self.evaluator.evaluate(logs)?;
        let signals = self.engine.derive(&evaluation);
        let recommendation = self.updater.propose_update(current, &signals);
        let proposed_version = recommendation
            .as_ref()
            .map(|rec| self.applier.apply(current, rec));

        info!(
            health = %evaluation.governance_health,
            signals = signals.len(),
            proposed = proposed_version.is_some(),
            "evolution pass completed"
        );

        Ok(EvolutionOutcome {
            evaluation,
            signals,
            recommendation,
            proposed_version,
        })
    }
}
