//! Discrete-time simulation driver.

use habitus_core::errors::{HabitusResult, SimulationError};
use habitus_core::traits::IUserModel;
use habitus_core::{BehavioralState, SimulationLog};
use habitus_observability::tracing_setup::events;
use habitus_policy::GoverningBrain;
use habitus_state::StateUpdater;
use tracing::{debug, info};

/// Lifecycle of a [`TimeEngine`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimulationPhase {
    NotStarted,
    Running,
    Completed,
}

/// Advances time one day at a time and runs one governance cycle per day.
///
/// Strictly sequential: day N's decision depends on day N-1's state, and the
/// user observes directives in the order they were produced.
#[derive(Debug)]
pub struct TimeEngine<U: IUserModel> {
    brain: GoverningBrain,
    updater: StateUpdater,
    user: U,
    total_days: u32,
    current_day: u32,
    state: Option<BehavioralState>,
    logs: Vec<SimulationLog>,
    phase: SimulationPhase,
}

impl<U: IUserModel> TimeEngine<U> {
    /// Build an engine that has not run any days yet.
    pub fn new(brain: GoverningBrain, user: U, total_days: u32) -> Self {
        Self {
            brain,
            updater: StateUpdater::new(),
            user,
            total_days,
            current_day: 0,
            state: None,
            logs: Vec::new(),
            phase: SimulationPhase::NotStarted,
        }
    }

    /// Run every remaining day. Fails if the run already completed.
    ///
    /// A run interrupted by an error stays `Running` and resumes from the
    /// next unlogged day.
    pub fn run(&mut self) -> HabitusResult<&[SimulationLog]> {
        if self.phase == SimulationPhase::Completed {
            return Err(SimulationError::AlreadyCompleted {
                days: self.total_days,
            }
            .into());
        }

        self.phase = SimulationPhase::Running;
        info!(total_days = self.total_days, "simulation started");

        while self.current_day < self.total_days {
            self.run_single_day(self.current_day + 1)?;
        }

        self.phase = SimulationPhase::Completed;

        let alarms = self.logs.iter().filter(|l| l.alarm_triggered()).count();
        let net_trust: f64 = self.logs.iter().map(|l| l.trust_delta()).sum();
        events::simulation_completed(self.total_days, alarms, net_trust);

        Ok(&self.logs)
    }

    fn run_single_day(&mut self, day: u32) -> HabitusResult<()> {
        let signals = self.user.generate_signals(day, self.state.as_ref())?;

        let state = self.updater.update(self.state.as_ref(), &signals);
        debug!(day, summary = %state.summary(), "state updated");

        let (directive, explanation) = self.brain.decide(&state)?;
        let reaction = self.user.react(&directive);

        events::simulation_day_completed(
            day,
            directive.strategy().as_str(),
            reaction.alarm_triggered,
            reaction.trust_delta,
        );

        self.logs.push(SimulationLog::new(
            day,
            state,
            signals,
            directive,
            explanation,
            reaction.alarm_triggered,
            Some(reaction.outcome_success),
            reaction.trust_delta,
        ));
        self.state = Some(state);
        self.current_day = day;
        Ok(())
    }

    /// Where the engine is in its lifecycle.
    pub fn phase(&self) -> SimulationPhase {
        self.phase
    }

    /// Last completed day, `0` before the run starts.
    pub fn current_day(&self) -> u32 {
        self.current_day
    }

    /// Number of days the run covers.
    pub fn total_days(&self) -> u32 {
        self.total_days
    }

    /// Latest materialized state, `None` before day 1.
    pub fn state(&self) -> Option<&BehavioralState> {
        self.state.as_ref()
    }

    /// One log per completed day, in day order.
    pub fn logs(&self) -> &[SimulationLog] {
        &self.logs
    }

    /// The user model driving the run.
    pub fn user(&self) -> &U {
        &self.user
    }

    /// Consume the engine, keeping only its logs.
    pub fn into_logs(self) -> Vec<SimulationLog> {
        self.logs
    }
}
