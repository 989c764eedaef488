//! # habitus-state
//!
//! The single path by which behavioral state evolves. A batch of signals is
//! folded onto the previous state through six independent linear
//! accumulators (failure risk, fatigue, avoidance, discipline, momentum,
//! context), each driven by fixed signal-category tables. Clamping is the only
//! nonlinearity.

pub mod accumulators;
pub mod categories;
pub mod engine;
pub mod formula;

pub use accumulators::Accumulator;
pub use engine::{update_state, StateUpdater};
pub use formula::UpdateBreakdown;
