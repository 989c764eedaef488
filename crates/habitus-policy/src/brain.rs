//! GoverningBrain: one decision cycle, no policy logic of its own.

use habitus_core::errors::HabitusResult;
use habitus_core::{BehavioralState, ExplanationRecord, GovernanceDirective};
use habitus_observability::tracing_setup::events;

use crate::directive;
use crate::explanation;
use crate::policies::{PolicyRule, POLICY_PIPELINE};
use crate::router;

/// Central orchestration unit for governance decisions.
///
/// Routes state → strategy, then synthesizes the directive and explanation.
#[derive(Debug, Clone)]
pub struct GoverningBrain {
    pipeline: Vec<PolicyRule>,
}

impl GoverningBrain {
    /// Brain with the default policy pipeline.
    pub fn new() -> Self {
        Self {
            pipeline: POLICY_PIPELINE.to_vec(),
        }
    }

    /// Brain with a custom ordered pipeline.
    pub fn with_pipeline(pipeline: Vec<PolicyRule>) -> Self {
        Self { pipeline }
    }

    pub fn pipeline(&self) -> &[PolicyRule] {
        &self.pipeline
    }

    /// Execute one governance decision cycle.
    pub fn decide(
        &self,
        state: &BehavioralState,
    ) -> HabitusResult<(GovernanceDirective, ExplanationRecord)> {
        let routing = router::route_with(&self.pipeline, state);

        let directive = directive::build_directive(routing.strategy)?;
        let explanation = explanation::build_explanation(routing.strategy, state);

        events::decision_made(
            explanation.decision_id(),
            routing.strategy.as_str(),
            routing.matched_policy,
        );

        Ok((directive, explanation))
    }
}

impl Default for GoverningBrain {
    fn default() -> Self {
        Self::new()
    }
}
