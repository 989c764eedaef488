use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Non-binding, explainable recommendation for a policy adjustment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolicyRecommendation {
    pub suggested_parameters: BTreeMap<String, f64>,
    pub rationale: String,
    /// Names of the evolution signals that produced an adjustment.
    pub triggering_signals: Vec<String>,
}
