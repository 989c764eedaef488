use std::collections::BTreeSet;

use serde::Serialize;

use crate::errors::ValidationError;
use crate::strategy::Strategy;

/// Abstract control directive emitted for a chosen strategy.
///
/// Strictness and escalation limit are bounded to [0.0, 1.0]; capabilities
/// are trimmed, lowercased and non-empty.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GovernanceDirective {
    strategy: Strategy,
    required_strictness: f64,
    allowed_capabilities: BTreeSet<String>,
    escalation_limit: f64,
    recovery_allowed: bool,
    explanation_required: bool,
}

impl GovernanceDirective {
    /// Build a validated directive.
    pub fn new<I, S>(
        strategy: Strategy,
        required_strictness: f64,
        allowed_capabilities: I,
        escalation_limit: f64,
        recovery_allowed: bool,
        explanation_required: bool,
    ) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        check_unit("required_strictness", required_strictness)?;
        check_unit("escalation_limit", escalation_limit)?;

        let mut capabilities = BTreeSet::new();
        for cap in allowed_capabilities {
            let normalized = cap.as_ref().trim().to_lowercase();
            if normalized.is_empty() {
                return Err(ValidationError::EmptyCapability);
            }
            capabilities.insert(normalized);
        }

        Ok(Self {
            strategy,
            required_strictness,
            allowed_capabilities: capabilities,
            escalation_limit,
            recovery_allowed,
            explanation_required,
        })
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    pub fn required_strictness(&self) -> f64 {
        self.required_strictness
    }

    pub fn allowed_capabilities(&self) -> &BTreeSet<String> {
        &self.allowed_capabilities
    }

    pub fn allows(&self, capability: &str) -> bool {
        self.allowed_capabilities
            .contains(&capability.trim().to_lowercase())
    }

    pub fn escalation_limit(&self) -> f64 {
        self.escalation_limit
    }

    pub fn recovery_allowed(&self) -> bool {
        self.recovery_allowed
    }

    pub fn explanation_required(&self) -> bool {
        self.explanation_required
    }
}

fn check_unit(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if value.is_finite() && (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ValidationError::BoundOutOfRange { field, value })
    }
}
