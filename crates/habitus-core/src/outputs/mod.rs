//! Governance outputs: bounded directives and their audit explanations.

mod directive;
mod explanation;

pub use directive::GovernanceDirective;
pub use explanation::ExplanationRecord;
