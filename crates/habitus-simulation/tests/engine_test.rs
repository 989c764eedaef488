//! Driver sequencing, checked with a scripted user model.

use chrono::{Duration, TimeZone, Utc};
use habitus_core::errors::{HabitusError, HabitusResult, SimulationError};
use habitus_core::traits::{IUserModel, UserReaction};
use habitus_core::{BehavioralState, GovernanceDirective, Signal, SignalBatch, Strategy};
use habitus_policy::GoverningBrain;
use habitus_simulation::{SimulationPhase, TimeEngine};

/// Fails every morning, never complies, records what the engine showed it.
#[derive(Debug, Default)]
struct ScriptedUser {
    seen_days: Vec<u32>,
    seen_states: Vec<Option<BehavioralState>>,
    reactions: usize,
}

impl IUserModel for ScriptedUser {
    fn generate_signals(
        &mut self,
        day: u32,
        state: Option<&BehavioralState>,
    ) -> HabitusResult<SignalBatch> {
        self.seen_days.push(day);
        self.seen_states.push(state.copied());
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 7, 0, 0).unwrap() + Duration::days(day.into());
        let failure = Signal::new("alarm_failure", 1.0, 1.0, now - Duration::minutes(1))?;
        Ok(SignalBatch::new(vec![failure], now - Duration::hours(8), now)?)
    }

    fn react(&mut self, directive: &GovernanceDirective) -> UserReaction {
        self.reactions += 1;
        let alarm_triggered = directive.required_strictness() > 0.3;
        UserReaction {
            alarm_triggered,
            complied: false,
            outcome_success: false,
            trust_delta: if alarm_triggered { -0.05 } else { 0.01 },
        }
    }
}

#[test]
fn runs_every_day_in_order() {
    let mut engine = TimeEngine::new(GoverningBrain::new(), ScriptedUser::default(), 5);
    assert_eq!(engine.phase(), SimulationPhase::NotStarted);

    let days: Vec<u32> = engine.run().unwrap().iter().map(|l| l.day()).collect();
    assert_eq!(days, vec![1, 2, 3, 4, 5]);
    assert_eq!(engine.phase(), SimulationPhase::Completed);
    assert_eq!(engine.current_day(), 5);
    assert_eq!(engine.user().seen_days, vec![1, 2, 3, 4, 5]);
    assert_eq!(engine.user().reactions, 5);
}

#[test]
fn first_day_is_cold_start() {
    let mut engine = TimeEngine::new(GoverningBrain::new(), ScriptedUser::default(), 1);
    let logs = engine.run().unwrap();
    assert_eq!(logs[0].state(), BehavioralState::cold_start());
    assert_eq!(logs[0].strategy(), Strategy::Support);
}

#[test]
fn user_sees_previous_day_state() {
    let mut engine = TimeEngine::new(GoverningBrain::new(), ScriptedUser::default(), 4);
    let states: Vec<BehavioralState> = engine.run().unwrap().iter().map(|l| l.state()).collect();

    let seen = &engine.user().seen_states;
    assert_eq!(seen[0], None);
    for day in 1..4 {
        assert_eq!(seen[day], Some(states[day - 1]));
    }
    assert_eq!(engine.state(), Some(&states[3]));
}

#[test]
fn repeated_failures_raise_failure_risk() {
    let mut engine = TimeEngine::new(GoverningBrain::new(), ScriptedUser::default(), 4);
    let logs = engine.run().unwrap();
    for pair in logs.windows(2) {
        assert!(pair[1].failure_risk() > pair[0].failure_risk());
    }
}

#[test]
fn reactions_are_logged() {
    let mut engine = TimeEngine::new(GoverningBrain::new(), ScriptedUser::default(), 3);
    for log in engine.run().unwrap() {
        let expected_alarm = log.directive().required_strictness() > 0.3;
        assert_eq!(log.alarm_triggered(), expected_alarm);
        assert_eq!(log.outcome_success(), Some(false));
        assert_eq!(log.explanation().strategy_selected(), log.strategy());
    }
}

#[test]
fn second_run_is_rejected() {
    let mut engine = TimeEngine::new(GoverningBrain::new(), ScriptedUser::default(), 2);
    engine.run().unwrap();
    let err = engine.run().unwrap_err();
    assert!(matches!(
        err,
        HabitusError::Simulation(SimulationError::AlreadyCompleted { days: 2 })
    ));
    assert_eq!(engine.logs().len(), 2);
}

#[test]
fn zero_days_completes_empty() {
    let mut engine = TimeEngine::new(GoverningBrain::new(), ScriptedUser::default(), 0);
    assert!(engine.run().unwrap().is_empty());
    assert_eq!(engine.phase(), SimulationPhase::Completed);
    assert!(engine.state().is_none());
}

#[test]
fn huge_day_count_constructs_without_allocating() {
    let engine = TimeEngine::new(GoverningBrain::new(), ScriptedUser::default(), u32::MAX);
    assert_eq!(engine.phase(), SimulationPhase::NotStarted);
    assert_eq!(engine.total_days(), u32::MAX);
    assert!(engine.logs().is_empty());
}
