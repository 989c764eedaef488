use std::fmt;

use serde::{Deserialize, Serialize};

/// Qualitative governance-health flag derived from an evaluation.
///
/// Declaration order is the iteration order of a `BTreeSet<EvolutionSignal>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EvolutionSignal {
    // Overall health
    Healthy,
    Risky,
    Degrading,

    // Specific governance risks
    AlarmFatigue,
    TrustCollapse,
    OverEnforcement,
    UnderEnforcement,
    StrategyStagnation,
}

impl EvolutionSignal {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Healthy => "healthy",
            Self::Risky => "risky",
            Self::Degrading => "degrading",
            Self::AlarmFatigue => "alarm_fatigue",
            Self::TrustCollapse => "trust_collapse",
            Self::OverEnforcement => "over_enforcement",
            Self::UnderEnforcement => "under_enforcement",
            Self::StrategyStagnation => "strategy_stagnation",
        }
    }
}

impl fmt::Display for EvolutionSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
