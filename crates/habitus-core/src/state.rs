use serde::Serialize;

/// The governing brain's bounded belief about the user's behavioral condition.
///
/// Five scalars live in [0.0, 1.0]; `momentum_trend` lives in [-1.0, 1.0].
/// Every constructor clamps, so an out-of-range state cannot exist. States are
/// `Copy` values: an update always yields a new state and leaves the previous
/// one untouched.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BehavioralState {
    discipline_level: f64,
    failure_risk: f64,
    avoidance_tendency: f64,
    fatigue_index: f64,
    context_importance: f64,
    momentum_trend: f64,
}

impl BehavioralState {
    /// Cold-start prior used when no previous state exists.
    pub const COLD_START: BehavioralState = BehavioralState {
        discipline_level: 0.5,
        failure_risk: 0.5,
        avoidance_tendency: 0.3,
        fatigue_index: 0.5,
        context_importance: 0.5,
        momentum_trend: 0.0,
    };

    /// Build a state, clamping every component into its bounds.
    pub fn new(
        discipline_level: f64,
        failure_risk: f64,
        avoidance_tendency: f64,
        fatigue_index: f64,
        context_importance: f64,
        momentum_trend: f64,
    ) -> Self {
        Self {
            discipline_level: unit(discipline_level),
            failure_risk: unit(failure_risk),
            avoidance_tendency: unit(avoidance_tendency),
            fatigue_index: unit(fatigue_index),
            context_importance: unit(context_importance),
            momentum_trend: signed_unit(momentum_trend),
        }
    }

    /// The fixed neutral prior.
    pub fn cold_start() -> Self {
        Self::COLD_START
    }

    /// Consistency of follow-through, in `[0, 1]`.
    pub fn discipline_level(&self) -> f64 {
        self.discipline_level
    }

    /// Likelihood of missing the next commitment, in `[0, 1]`.
    pub fn failure_risk(&self) -> f64 {
        self.failure_risk
    }

    /// Tendency to defer or dodge tasks, in `[0, 1]`.
    pub fn avoidance_tendency(&self) -> f64 {
        self.avoidance_tendency
    }

    /// Accumulated tiredness, in `[0, 1]`.
    pub fn fatigue_index(&self) -> f64 {
        self.fatigue_index
    }

    /// How much today's context matters, in `[0, 1]`.
    pub fn context_importance(&self) -> f64 {
        self.context_importance
    }

    /// Direction of recent progress, in `[-1, 1]`.
    pub fn momentum_trend(&self) -> f64 {
        self.momentum_trend
    }

    /// Copy with `discipline_level` replaced, clamped to `[0, 1]`.
    pub fn with_discipline_level(self, value: f64) -> Self {
        Self {
            discipline_level: unit(value),
            ..self
        }
    }

    /// Copy with `failure_risk` replaced, clamped to `[0, 1]`.
    pub fn with_failure_risk(self, value: f64) -> Self {
        Self {
            failure_risk: unit(value),
            ..self
        }
    }

    /// Copy with `avoidance_tendency` replaced, clamped to `[0, 1]`.
    pub fn with_avoidance_tendency(self, value: f64) -> Self {
        Self {
            avoidance_tendency: unit(value),
            ..self
        }
    }

    /// Copy with `fatigue_index` replaced, clamped to `[0, 1]`.
    pub fn with_fatigue_index(self, value: f64) -> Self {
        Self {
            fatigue_index: unit(value),
            ..self
        }
    }

    /// Copy with `context_importance` replaced, clamped to `[0, 1]`.
    pub fn with_context_importance(self, value: f64) -> Self {
        Self {
            context_importance: unit(value),
            ..self
        }
    }

    /// Copy with `momentum_trend` replaced, clamped to `[-1, 1]`.
    pub fn with_momentum_trend(self, value: f64) -> Self {
        Self {
            momentum_trend: signed_unit(value),
            ..self
        }
    }

    /// `name=value` pairs for all six scalars, in a fixed order.
    pub fn summary(&self) -> String {
        format!(
            "failure_risk={:.3}, fatigue_index={:.3}, avoidance_tendency={:.3}, \
             context_importance={:.3}, discipline_level={:.3}, momentum_trend={:.3}",
            self.failure_risk,
            self.fatigue_index,
            self.avoidance_tendency,
            self.context_importance,
            self.discipline_level,
            self.momentum_trend,
        )
    }
}

impl Default for BehavioralState {
    fn default() -> Self {
        Self::COLD_START
    }
}

// NaN collapses to the lower bound.
fn unit(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

fn signed_unit(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(-1.0, 1.0)
    }
}
