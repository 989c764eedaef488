//! Fixed strategy → directive lookup. Directives never depend on state.

use habitus_core::constants::{CAPABILITY_ALARM_ENFORCEMENT, CAPABILITY_COACHING};
use habitus_core::errors::ValidationError;
use habitus_core::{GovernanceDirective, Strategy};

/// Static parameters of a directive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectiveTemplate {
    pub required_strictness: f64,
    pub allowed_capabilities: &'static [&'static str],
    pub escalation_limit: f64,
    pub recovery_allowed: bool,
    pub explanation_required: bool,
}

pub const ENFORCEMENT_TEMPLATE: DirectiveTemplate = DirectiveTemplate {
    required_strictness: 0.9,
    allowed_capabilities: &[CAPABILITY_ALARM_ENFORCEMENT],
    escalation_limit: 1.0,
    recovery_allowed: false,
    explanation_required: true,
};

pub const SUPPORT_TEMPLATE: DirectiveTemplate = DirectiveTemplate {
    required_strictness: 0.3,
    allowed_capabilities: &[CAPABILITY_COACHING],
    escalation_limit: 0.2,
    recovery_allowed: true,
    explanation_required: true,
};

/// STABILIZATION, COMPENSATION and STRATEGIC_PAUSE.
pub const NEUTRAL_TEMPLATE: DirectiveTemplate = DirectiveTemplate {
    required_strictness: 0.5,
    allowed_capabilities: &[],
    escalation_limit: 0.5,
    recovery_allowed: true,
    explanation_required: false,
};

pub fn template_for(strategy: Strategy) -> &'static DirectiveTemplate {
    match strategy {
        Strategy::Enforcement => &ENFORCEMENT_TEMPLATE,
        Strategy::Support => &SUPPORT_TEMPLATE,
        Strategy::Stabilization | Strategy::Compensation | Strategy::StrategicPause => {
            &NEUTRAL_TEMPLATE
        }
    }
}

/// Build the validated directive for a strategy.
pub fn build_directive(strategy: Strategy) -> Result<GovernanceDirective, ValidationError> {
    let t = template_for(strategy);
    GovernanceDirective::new(
        strategy,
        t.required_strictness,
        t.allowed_capabilities.iter().copied(),
        t.escalation_limit,
        t.recovery_allowed,
        t.explanation_required,
    )
}
