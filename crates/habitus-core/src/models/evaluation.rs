use std::fmt;

use serde::{Deserialize, Serialize};

/// Overall verdict on a window of governance behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GovernanceHealth {
    Healthy,
    Risky,
    Degrading,
}

impl GovernanceHealth {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Healthy => "healthy",
            Self::Risky => "risky",
            Self::Degrading => "degrading",
        }
    }
}

impl fmt::Display for GovernanceHealth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Aggregate evaluation of governance behavior over a simulation window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolicyEvaluation {
    pub window_days: usize,

    // Core effectiveness
    pub alarm_trigger_rate: f64,
    pub success_rate: f64,
    pub false_alarm_rate: f64,

    // Human impact
    /// Summed over the window, not averaged.
    pub trust_delta: f64,
    /// Last day's fatigue minus first day's fatigue.
    pub fatigue_delta: f64,
    /// Window-average failure risk.
    pub failure_risk: f64,

    // Strategy usage ratios
    pub enforcement_ratio: f64,
    pub support_ratio: f64,
    pub stabilization_ratio: f64,
    pub compensation_ratio: f64,
    pub strategic_pause_ratio: f64,

    pub governance_health: GovernanceHealth,
}

impl PolicyEvaluation {
    /// Usage ratios of every strategy, in `Strategy::ALL` order.
    pub fn strategy_ratios(&self) -> [f64; 5] {
        [
            self.enforcement_ratio,
            self.compensation_ratio,
            self.stabilization_ratio,
            self.support_ratio,
            self.strategic_pause_ratio,
        ]
    }
}
