use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::defaults;
use crate::constants::{PARAM_ALARM_STRICTNESS, PARAM_ENFORCEMENT_WEIGHT, PARAM_SUPPORT_WEIGHT};
use crate::models::PolicyVersion;

/// Baseline governance policy parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PolicyConfig {
    pub alarm_strictness: f64,
    pub support_weight: f64,
    pub enforcement_weight: f64,
    /// Reason recorded on the baseline version.
    pub baseline_reason: String,
}

impl PolicyConfig {
    /// Parameters as a name → value map.
    pub fn parameters(&self) -> BTreeMap<String, f64> {
        BTreeMap::from([
            (PARAM_ALARM_STRICTNESS.to_string(), self.alarm_strictness),
            (PARAM_SUPPORT_WEIGHT.to_string(), self.support_weight),
            (PARAM_ENFORCEMENT_WEIGHT.to_string(), self.enforcement_weight),
        ])
    }

    /// Materialize the baseline as a fresh policy version.
    pub fn baseline_version(&self) -> PolicyVersion {
        PolicyVersion::new(self.parameters(), self.baseline_reason.clone())
    }
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            alarm_strictness: defaults::DEFAULT_ALARM_STRICTNESS,
            support_weight: defaults::DEFAULT_SUPPORT_WEIGHT,
            enforcement_weight: defaults::DEFAULT_ENFORCEMENT_WEIGHT,
            baseline_reason: defaults::DEFAULT_BASELINE_REASON.to_string(),
        }
    }
}
