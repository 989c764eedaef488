use std::fmt;

use serde::{Deserialize, Serialize};

/// High-level governance stance chosen for one decision cycle.
///
/// The semantic tags below exist for presentation only; routing never
/// consults them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    Enforcement,
    Compensation,
    Stabilization,
    Support,
    StrategicPause,
}

impl Strategy {
    /// All variants for iteration.
    pub const ALL: [Strategy; 5] = [
        Self::Enforcement,
        Self::Compensation,
        Self::Stabilization,
        Self::Support,
        Self::StrategicPause,
    ];

    /// Stable snake_case label.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Enforcement => "enforcement",
            Self::Compensation => "compensation",
            Self::Stabilization => "stabilization",
            Self::Support => "support",
            Self::StrategicPause => "strategic_pause",
        }
    }

    pub fn is_restrictive(self) -> bool {
        matches!(self, Self::Enforcement)
    }

    pub fn is_supportive(self) -> bool {
        matches!(self, Self::Support | Self::Compensation)
    }

    pub fn is_neutral(self) -> bool {
        matches!(self, Self::Stabilization)
    }

    pub fn allows_recovery(self) -> bool {
        matches!(
            self,
            Self::Support | Self::Compensation | Self::StrategicPause
        )
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
