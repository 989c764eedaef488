use serde::{Deserialize, Serialize};

use super::defaults;

/// Simulation driver configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Number of discrete days to simulate.
    pub total_days: u32,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            total_days: defaults::DEFAULT_TOTAL_DAYS,
        }
    }
}
