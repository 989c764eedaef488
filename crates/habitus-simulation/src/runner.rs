//! Convenience entry points wiring config, brain, user and engine together.

use habitus_core::config::UserConfig;
use habitus_core::errors::HabitusResult;
use habitus_core::{HabitusConfig, SimulationLog};
use habitus_policy::GoverningBrain;

use crate::engine::TimeEngine;
use crate::user::SyntheticUser;

/// Simulate `days` days with the default "Burnout-Prone Student" profile.
pub fn run_basic_simulation(days: u32) -> HabitusResult<Vec<SimulationLog>> {
    simulate(UserConfig::default(), days)
}

/// Simulate using the `[simulation]` and `[user]` sections of a config.
pub fn run_from_config(config: &HabitusConfig) -> HabitusResult<Vec<SimulationLog>> {
    simulate(config.user.clone(), config.simulation.total_days)
}

fn simulate(profile: UserConfig, days: u32) -> HabitusResult<Vec<SimulationLog>> {
    let user = SyntheticUser::new(profile);
    let mut engine = TimeEngine::new(GoverningBrain::new(), user, days);
    engine.run()?;
    Ok(engine.into_logs())
}
