use serde::{Deserialize, Serialize};

use crate::errors::HabitusResult;
use crate::inputs::SignalBatch;
use crate::outputs::GovernanceDirective;
use crate::state::BehavioralState;

/// Observable outcome of a governance directive. Ground truth, not a decision.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UserReaction {
    pub alarm_triggered: bool,
    pub complied: bool,
    pub outcome_success: bool,
    pub trust_delta: f64,
}

/// A behavioral oracle the simulation driver runs governance against.
///
/// Implementations own their randomness; nothing here is shared between
/// instances.
pub trait IUserModel {
    /// Produce the signals observed on `day`, given the latest state
    /// (`None` before the first decision).
    fn generate_signals(
        &mut self,
        day: u32,
        state: Option<&BehavioralState>,
    ) -> HabitusResult<SignalBatch>;

    /// React to the directive issued for the current day.
    fn react(&mut self, directive: &GovernanceDirective) -> UserReaction;
}
