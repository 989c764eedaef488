//! First-match-wins strategy routing.

use habitus_core::{BehavioralState, Strategy};

use crate::policies::{PolicyRule, POLICY_PIPELINE};

/// Strategy used when no policy applies.
pub const FALLBACK_STRATEGY: Strategy = Strategy::Stabilization;

/// Outcome of routing a state, with the rule that fired.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoutingDecision {
    pub strategy: Strategy,
    /// `None` when the fallback was used.
    pub matched_policy: Option<&'static str>,
}

/// Route a state through the default pipeline.
pub fn route(state: &BehavioralState) -> RoutingDecision {
    route_with(&POLICY_PIPELINE, state)
}

/// Route a state through an arbitrary ordered pipeline.
pub fn route_with(pipeline: &[PolicyRule], state: &BehavioralState) -> RoutingDecision {
    pipeline
        .iter()
        .find_map(|rule| {
            rule.apply(state).map(|strategy| RoutingDecision {
                strategy,
                matched_policy: Some(rule.name),
            })
        })
        .unwrap_or(RoutingDecision {
            strategy: FALLBACK_STRATEGY,
            matched_policy: None,
        })
}

/// Select a strategy using the default pipeline.
pub fn select_strategy(state: &BehavioralState) -> Strategy {
    route(state).strategy
}
