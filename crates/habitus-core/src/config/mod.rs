pub mod approval_config;
pub mod defaults;
pub mod evolution_config;
pub mod observability_config;
pub mod policy_config;
pub mod simulation_config;
pub mod user_config;

pub use approval_config::ApprovalConfig;
pub use evolution_config::EvolutionConfig;
pub use observability_config::ObservabilityConfig;
pub use policy_config::PolicyConfig;
pub use simulation_config::SimulationConfig;
pub use user_config::UserConfig;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{HabitusError, HabitusResult};

/// Top-level configuration. Every section falls back to its defaults, so an
/// empty document is a valid config.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HabitusConfig {
    pub simulation: SimulationConfig,
    pub user: UserConfig,
    pub policy: PolicyConfig,
    pub evolution: EvolutionConfig,
    pub approval: ApprovalConfig,
    pub observability: ObservabilityConfig,
}

impl HabitusConfig {
    /// Parse a config from a TOML string.
    pub fn from_toml(content: &str) -> HabitusResult<Self> {
        toml::from_str(content).map_err(|e| HabitusError::ConfigError {
            reason: e.to_string(),
        })
    }

    /// Load a config from a TOML file on disk.
    pub fn load(path: impl AsRef<Path>) -> HabitusResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| HabitusError::ConfigError {
            reason: format!("failed to read {}: {}", path.display(), e),
        })?;
        Self::from_toml(&content)
    }

    /// Serialize back to TOML.
    pub fn to_toml(&self) -> HabitusResult<String> {
        toml::to_string(self).map_err(|e| HabitusError::ConfigError {
            reason: e.to_string(),
        })
    }
}
