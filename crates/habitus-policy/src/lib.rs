//! # habitus-policy
//!
//! Turns a behavioral state into a governance decision:
//! policy pipeline (first match wins) → strategy → bounded directive →
//! auditable explanation.
//!
//! ## Policy priority
//!
//! | Order | Policy | Strategy |
//! |-------|--------|----------|
//! | 1 | burnout protection | SUPPORT |
//! | 2 | early support | SUPPORT |
//! | 3 | context guard | STABILIZATION |
//! | 4 | enforcement | ENFORCEMENT |
//! | - | fallback | STABILIZATION |

pub mod brain;
pub mod directive;
pub mod explanation;
pub mod policies;
pub mod router;

pub use brain::GoverningBrain;
pub use policies::{PolicyFn, PolicyRule, POLICY_PIPELINE};
pub use router::{route, select_strategy, RoutingDecision};
