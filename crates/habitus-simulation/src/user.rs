//! Seeded synthetic user: generates the day's telemetry and reacts to
//! directives. Ground truth only; it never makes governance decisions.

use chrono::{DateTime, Duration, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use habitus_core::config::UserConfig;
use habitus_core::errors::HabitusResult;
use habitus_core::traits::{IUserModel, UserReaction};
use habitus_core::{BehavioralState, GovernanceDirective, SignalBatch, Strategy};

use crate::signal_generator::SignalGenerator;

/// Fatigue assumed before the first decision.
const COLD_FATIGUE: f64 = 0.5;
/// Compliance boost on the day after an ENFORCEMENT directive.
const ENFORCEMENT_CARRYOVER: f64 = 0.15;
const EARLY_WAKE_PROBABILITY: f64 = 0.4;
const OBSERVATION_WINDOW_HOURS: i64 = 8;

/// Directives at or below this strictness do not fire an alarm.
const ALARM_STRICTNESS_THRESHOLD: f64 = 0.3;
const ENFORCEMENT_REACTION_BOOST: f64 = 0.10;
const SUPPORT_REACTION_BOOST: f64 = 0.05;

const TRUST_BROKEN: f64 = -0.05;
const TRUST_EARNED: f64 = 0.02;
const TRUST_CALM_DAY: f64 = 0.01;

/// A behavioral oracle driven by a [`UserConfig`] profile.
#[derive(Debug, Clone)]
pub struct SyntheticUser {
    profile: UserConfig,
    rng: StdRng,
    epoch: DateTime<Utc>,
    last_directive: Option<GovernanceDirective>,
}

impl SyntheticUser {
    /// A user whose simulated calendar starts now.
    pub fn new(profile: UserConfig) -> Self {
        Self::with_epoch(profile, Utc::now())
    }

    /// A user whose simulated day `d` is `epoch + d days`.
    pub fn with_epoch(profile: UserConfig, epoch: DateTime<Utc>) -> Self {
        let rng = StdRng::seed_from_u64(profile.seed);
        Self {
            profile,
            rng,
            epoch,
            last_directive: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.profile.name
    }

    pub fn profile(&self) -> &UserConfig {
        &self.profile
    }

    pub fn epoch(&self) -> DateTime<Utc> {
        self.epoch
    }

    pub fn last_directive(&self) -> Option<&GovernanceDirective> {
        self.last_directive.as_ref()
    }

    /// Simulated wall-clock time at the end of `day`'s observation window.
    pub fn now_for(&self, day: u32) -> DateTime<Utc> {
        self.epoch + Duration::days(i64::from(day))
    }

    /// Probability of a clean wake-up given current fatigue.
    pub fn wake_probability(&self, fatigue: f64) -> f64 {
        let mut p = self.profile.compliance_bias - fatigue * self.profile.fatigue_sensitivity;
        if self
            .last_directive
            .as_ref()
            .is_some_and(|d| d.strategy() == Strategy::Enforcement)
        {
            p += ENFORCEMENT_CARRYOVER;
        }
        p.clamp(0.0, 1.0)
    }

    /// Probability of complying with a directive of the given strategy.
    pub fn compliance_probability(&self, strategy: Strategy) -> f64 {
        let boost = match strategy {
            Strategy::Enforcement => ENFORCEMENT_REACTION_BOOST,
            Strategy::Support => SUPPORT_REACTION_BOOST,
            _ => 0.0,
        };
        (self.profile.compliance_bias + boost).clamp(0.0, 1.0)
    }

    fn roll(&mut self, probability: f64) -> bool {
        self.rng.gen::<f64>() < probability
    }
}

impl IUserModel for SyntheticUser {
    fn generate_signals(
        &mut self,
        day: u32,
        state: Option<&BehavioralState>,
    ) -> HabitusResult<SignalBatch> {
        let now = self.now_for(day);
        let fatigue = state.map_or(COLD_FATIGUE, BehavioralState::fatigue_index);
        let mut signals = Vec::new();

        let woke = self.roll(self.wake_probability(fatigue));
        if woke {
            signals.push(SignalGenerator::clean_dismissal(now)?);
            if self.roll(EARLY_WAKE_PROBABILITY) {
                signals.push(SignalGenerator::early_wake(now)?);
            }
        } else {
            signals.extend(SignalGenerator::alarm_failure(now)?);
            if self.roll(self.profile.avoidance_tendency) {
                signals.extend(SignalGenerator::snooze_abuse(now)?);
            }
        }

        if self.roll(fatigue) {
            signals.extend(SignalGenerator::late_night_usage(now)?);
        }

        let batch = SignalBatch::new(
            signals,
            now - Duration::hours(OBSERVATION_WINDOW_HOURS),
            now,
        )?;
        Ok(batch)
    }

    fn react(&mut self, directive: &GovernanceDirective) -> UserReaction {
        self.last_directive = Some(directive.clone());

        let alarm_triggered = directive.required_strictness() > ALARM_STRICTNESS_THRESHOLD;
        let complied = self.roll(self.compliance_probability(directive.strategy()));

        let trust_delta = match (alarm_triggered, complied) {
            (true, false) => TRUST_BROKEN,
            (true, true) => TRUST_EARNED,
            (false, _) => TRUST_CALM_DAY,
        };

        UserReaction {
            alarm_triggered,
            complied,
            outcome_success: alarm_triggered && complied,
            trust_delta,
        }
    }
}
