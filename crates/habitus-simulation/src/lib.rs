//! # habitus-simulation
//!
//! Runs the governance loop against a synthetic user, one day at a time:
//! signals → state update → decision → user reaction → immutable log.
//!
//! The synthetic user is a behavioral oracle, not governance logic. It owns
//! its seeded random generator so runs are reproducible.

pub mod engine;
pub mod runner;
pub mod signal_generator;
pub mod summary;
pub mod user;

pub use engine::{SimulationPhase, TimeEngine};
pub use runner::{run_basic_simulation, run_from_config};
pub use signal_generator::SignalGenerator;
pub use summary::SimulationSummary;
pub use user::SyntheticUser;
