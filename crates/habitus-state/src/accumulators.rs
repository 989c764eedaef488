use habitus_core::inputs::{Signal, SignalBatch};

use crate::categories::{self, *};

// Update coefficients.
pub const FAILURE_RISK_INC: f64 = 0.10;
pub const FAILURE_RISK_DEC: f64 = 0.10;
pub const FATIGUE_INC: f64 = 0.05;
pub const FATIGUE_DEC: f64 = 0.05;
pub const AVOIDANCE_INC: f64 = 0.05;
pub const AVOIDANCE_DEC: f64 = 0.03;
pub const DISCIPLINE_INC: f64 = 0.04;
pub const DISCIPLINE_DEC: f64 = 0.04;
pub const MOMENTUM_STEP: f64 = 0.03;
pub const CONTEXT_STRONG_SHIFT: f64 = 0.20;

/// Applied to momentum after every batch, pulling it toward neutral.
pub const MOMENTUM_DECAY: f64 = 0.95;

/// A linear accumulator over one state scalar.
///
/// A signal in `raises` adds `raise_rate × confidence`; a signal in `lowers`
/// subtracts `lower_rate × confidence`; any other signal contributes nothing.
#[derive(Debug, Clone, Copy)]
pub struct Accumulator {
    pub name: &'static str,
    pub raises: &'static [&'static str],
    pub lowers: &'static [&'static str],
    pub raise_rate: f64,
    pub lower_rate: f64,
}

impl Accumulator {
    /// Contribution of a single signal.
    pub fn contribution(&self, signal: &Signal) -> f64 {
        if categories::contains(self.raises, signal.name()) {
            self.raise_rate * signal.confidence()
        } else if categories::contains(self.lowers, signal.name()) {
            -self.lower_rate * signal.confidence()
        } else {
            0.0
        }
    }

    /// Net unclamped shift produced by a whole batch.
    pub fn shift(&self, batch: &SignalBatch) -> f64 {
        batch.signals().iter().map(|s| self.contribution(s)).sum()
    }
}

pub const FAILURE_RISK: Accumulator = Accumulator {
    name: "failure_risk",
    raises: FAILURE_SIGNALS,
    lowers: SUCCESS_SIGNALS,
    raise_rate: FAILURE_RISK_INC,
    lower_rate: FAILURE_RISK_DEC,
};

pub const FATIGUE: Accumulator = Accumulator {
    name: "fatigue_index",
    raises: FATIGUE_SIGNALS,
    lowers: RECOVERY_SIGNALS,
    raise_rate: FATIGUE_INC,
    lower_rate: FATIGUE_DEC,
};

// Asymmetric: avoidance rises faster than it falls.
pub const AVOIDANCE: Accumulator = Accumulator {
    name: "avoidance_tendency",
    raises: AVOIDANCE_SIGNALS,
    lowers: COMPLIANCE_SIGNALS,
    raise_rate: AVOIDANCE_INC,
    lower_rate: AVOIDANCE_DEC,
};

pub const DISCIPLINE: Accumulator = Accumulator {
    name: "discipline_level",
    raises: DISCIPLINE_POSITIVE,
    lowers: DISCIPLINE_NEGATIVE,
    raise_rate: DISCIPLINE_INC,
    lower_rate: DISCIPLINE_DEC,
};

pub const MOMENTUM: Accumulator = Accumulator {
    name: "momentum_trend",
    raises: MOMENTUM_POSITIVE,
    lowers: MOMENTUM_NEGATIVE,
    raise_rate: MOMENTUM_STEP,
    lower_rate: MOMENTUM_STEP,
};

pub const CONTEXT: Accumulator = Accumulator {
    name: "context_importance",
    raises: HIGH_STAKES_CONTEXT,
    lowers: LOW_STAKES_CONTEXT,
    raise_rate: CONTEXT_STRONG_SHIFT,
    lower_rate: CONTEXT_STRONG_SHIFT,
};

/// Every accumulator, in state-field order.
pub const ALL: [Accumulator; 6] = [
    DISCIPLINE,
    FAILURE_RISK,
    AVOIDANCE,
    FATIGUE,
    CONTEXT,
    MOMENTUM,
];
