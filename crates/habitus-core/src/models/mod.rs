mod approval;
mod evaluation;
mod evolution_signal;
mod policy_version;
mod recommendation;
mod simulation_log;

pub use approval::PolicyApprovalDecision;
pub use evaluation::{GovernanceHealth, PolicyEvaluation};
pub use evolution_signal::EvolutionSignal;
pub use policy_version::PolicyVersion;
pub use recommendation::PolicyRecommendation;
pub use simulation_log::{LogRecord, SimulationLog};
