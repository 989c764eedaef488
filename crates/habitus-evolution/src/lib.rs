//! # habitus-evolution
//!
//! Offline policy evolution. Nothing here changes live governance:
//!
//! 1. [`PolicyEvaluator`] aggregates simulation logs (read-only).
//! 2. [`EvolutionSignalEngine`] turns the aggregate into qualitative flags.
//! 3. [`PolicyUpdater`] proposes bounded, non-binding parameter nudges.
//! 4. [`PolicyVersionApplier`] materializes a proposal as a new version.
//! 5. [`ApprovalService`] records the human verdict.
//!
//! [`EvolutionPipeline`] runs steps 1-4 in one call.

pub mod applier;
pub mod approval;
pub mod evaluator;
pub mod pipeline;
pub mod report;
pub mod signal_engine;
pub mod updater;

pub use applier::PolicyVersionApplier;
pub use approval::ApprovalService;
pub use evaluator::PolicyEvaluator;
pub use pipeline::{EvolutionOutcome, EvolutionPipeline};
pub use report::PolicyEvolutionReport;
pub use signal_engine::EvolutionSignalEngine;
pub use updater::PolicyUpdater;
