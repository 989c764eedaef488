//! Normalized behavioral signal schemas consumed by the governing brain.

mod batch;
mod signal;

pub use batch::SignalBatch;
pub use signal::Signal;
