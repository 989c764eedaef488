//! Canonical signal constructors for simulated telemetry.
//!
//! No governance logic lives here. Each constructor stamps its signals at a
//! fixed offset before `now`.

use chrono::{DateTime, Duration, Utc};
use habitus_core::errors::ValidationError;
use habitus_core::Signal;

/// Value carried by every generated observation.
const OBSERVED: f64 = 1.0;

/// Stateless helper for building standardized signals.
#[derive(Debug, Clone, Copy, Default)]
pub struct SignalGenerator;

impl SignalGenerator {
    /// Alarm dismissed cleanly, followed by an early wake-up.
    pub fn alarm_success(now: DateTime<Utc>) -> Result<Vec<Signal>, ValidationError> {
        Ok(vec![Self::clean_dismissal(now)?, Self::early_wake(now)?])
    }

    pub fn alarm_failure(now: DateTime<Utc>) -> Result<Vec<Signal>, ValidationError> {
        Ok(vec![observe("alarm_failure", 1.0, now - Duration::minutes(1))?])
    }

    pub fn snooze_abuse(now: DateTime<Utc>) -> Result<Vec<Signal>, ValidationError> {
        Ok(vec![observe("excessive_snooze", 0.7, now - Duration::minutes(2))?])
    }

    pub fn late_night_usage(now: DateTime<Utc>) -> Result<Vec<Signal>, ValidationError> {
        Ok(vec![observe("late_night_usage", 0.8, now - Duration::hours(6))?])
    }

    pub fn recovery_sleep(now: DateTime<Utc>) -> Result<Vec<Signal>, ValidationError> {
        Ok(vec![observe("adequate_sleep", 0.9, now - Duration::hours(7))?])
    }

    pub fn avoidance_event(now: DateTime<Utc>) -> Result<Vec<Signal>, ValidationError> {
        Ok(vec![observe("volume_evasion", 0.6, now - Duration::minutes(3))?])
    }

    /// The dismissal half of [`alarm_success`](Self::alarm_success).
    pub fn clean_dismissal(now: DateTime<Utc>) -> Result<Signal, ValidationError> {
        observe("clean_alarm_dismissal", 1.0, now - Duration::minutes(5))
    }

    /// The early-wake half of [`alarm_success`](Self::alarm_success).
    pub fn early_wake(now: DateTime<Utc>) -> Result<Signal, ValidationError> {
        observe("early_wake_success", 0.8, now - Duration::minutes(10))
    }
}

fn observe(name: &str, confidence: f64, at: DateTime<Utc>) -> Result<Signal, ValidationError> {
    Ok(Signal::new(name, OBSERVED, confidence, at)?.with_source("simulation"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offsets_fall_inside_an_eight_hour_window() {
        let now = Utc::now();
        let start = now - Duration::hours(8);
        let all = [
            SignalGenerator::alarm_success(now).unwrap(),
            SignalGenerator::alarm_failure(now).unwrap(),
            SignalGenerator::snooze_abuse(now).unwrap(),
            SignalGenerator::late_night_usage(now).unwrap(),
            SignalGenerator::recovery_sleep(now).unwrap(),
            SignalGenerator::avoidance_event(now).unwrap(),
        ];
        for signal in all.iter().flatten() {
            assert!(signal.timestamp() >= start && signal.timestamp() <= now);
            assert_eq!(signal.source(), Some("simulation"));
        }
    }

    #[test]
    fn alarm_success_confidences() {
        let signals = SignalGenerator::alarm_success(Utc::now()).unwrap();
        assert_eq!(signals[0].name(), "clean_alarm_dismissal");
        assert_eq!(signals[0].confidence(), 1.0);
        assert_eq!(signals[1].name(), "early_wake_success");
        assert_eq!(signals[1].confidence(), 0.8);
    }
}
