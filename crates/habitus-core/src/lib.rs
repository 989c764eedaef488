//! # habitus-core
//!
//! Foundation crate for the Habitus behavioral governance loop.
//! Defines all types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod inputs;
pub mod models;
pub mod outputs;
pub mod state;
pub mod strategy;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::HabitusConfig;
pub use errors::{HabitusError, HabitusResult};
pub use inputs::{Signal, SignalBatch};
pub use models::{
    EvolutionSignal, GovernanceHealth, PolicyApprovalDecision, PolicyEvaluation,
    PolicyRecommendation, PolicyVersion, SimulationLog,
};
pub use outputs::{ExplanationRecord, GovernanceDirective};
pub use state::BehavioralState;
pub use strategy::Strategy;
