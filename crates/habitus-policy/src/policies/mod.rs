//! Governance policies.
//!
//! Each policy is a pure, total function of the state. Policies never see
//! each other; priority lives only in [`POLICY_PIPELINE`].

pub mod burnout;
pub mod context;
pub mod enforcement;
pub mod support;

use habitus_core::{BehavioralState, Strategy};

/// Policy contract: `Some(strategy)` when the policy applies.
pub type PolicyFn = fn(&BehavioralState) -> Option<Strategy>;

/// A named entry in the routing pipeline.
#[derive(Debug, Clone, Copy)]
pub struct PolicyRule {
    pub name: &'static str,
    pub evaluate: PolicyFn,
}

impl PolicyRule {
    pub const fn new(name: &'static str, evaluate: PolicyFn) -> Self {
        Self { name, evaluate }
    }

    pub fn apply(&self, state: &BehavioralState) -> Option<Strategy> {
        (self.evaluate)(state)
    }
}

/// Explicit priority order, highest first.
pub const POLICY_PIPELINE: [PolicyRule; 4] = [
    PolicyRule::new("burnout_protection", burnout::burnout_policy),
    PolicyRule::new("early_support", support::early_support_policy),
    PolicyRule::new("context_guard", context::context_guard_policy),
    PolicyRule::new("enforcement", enforcement::enforcement_policy),
];
