use serde::{Deserialize, Serialize};

use super::defaults;

/// Synthetic user profile used by the simulation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UserConfig {
    /// Display name of the profile.
    pub name: String,
    /// Baseline probability of complying with an alarm.
    pub compliance_bias: f64,
    /// How strongly fatigue erodes compliance.
    pub fatigue_sensitivity: f64,
    /// Probability of snoozing after a failed wake-up.
    pub avoidance_tendency: f64,
    /// Seed for the user's random generator.
    pub seed: u64,
}

impl Default for UserConfig {
    fn default() -> Self {
        Self {
            name: defaults::DEFAULT_USER_NAME.to_string(),
            compliance_bias: defaults::DEFAULT_COMPLIANCE_BIAS,
            fatigue_sensitivity: defaults::DEFAULT_FATIGUE_SENSITIVITY,
            avoidance_tendency: defaults::DEFAULT_AVOIDANCE_TENDENCY,
            seed: defaults::DEFAULT_SEED,
        }
    }
}
