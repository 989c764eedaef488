use serde::{Deserialize, Serialize};

use super::defaults;

/// Policy evolution configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EvolutionConfig {
    /// Magnitude of a single parameter nudge.
    pub adjustment_step: f64,
}

impl Default for EvolutionConfig {
    fn default() -> Self {
        Self {
            adjustment_step: defaults::DEFAULT_ADJUSTMENT_STEP,
        }
    }
}
