use habitus_core::{PolicyRecommendation, PolicyVersion};
use habitus_observability::tracing_setup::events;

/// Materializes a recommendation as a brand-new policy version (offline;
/// nothing is deployed).
#[derive(Debug, Clone, Copy, Default)]
pub struct PolicyVersionApplier;

impl PolicyVersionApplier {
    pub fn new() -> Self {
        Self
    }

    pub fn apply(
        &self,
        current: &PolicyVersion,
        recommendation: &PolicyRecommendation,
    ) -> PolicyVersion {
        let next = PolicyVersion::new(
            recommendation.suggested_parameters.clone(),
            format!(
                "Evolved from version {}: {}",
                current.version_id(), recommendation.rationale
            ),
        );
        events::policy_version_created(next.version_id(), current.version_id());
        next
    }
}
