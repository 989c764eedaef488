//! # habitus-observability
//!
//! Structured tracing for the governance loop: subscriber setup and one
//! event helper per key operation (decisions, simulation steps, evaluation,
//! evolution, approvals).

pub mod tracing_setup;

pub use tracing_setup::{init_from_config, init_tracing, init_tracing_with_filter};
