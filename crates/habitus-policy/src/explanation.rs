use habitus_core::{BehavioralState, ExplanationRecord, Strategy};

pub const TRIGGER: &str = "Policy evaluation based on behavioral state";
pub const EXPECTED_OUTCOME: &str = "Improved long-term behavioral stability";
pub const REVERSAL_CONDITION: &str = "State variables return to safe ranges";

/// Build the audit record for a decision. Always produced, whether or not
/// the directive requires an explanation.
pub fn build_explanation(strategy: Strategy, state: &BehavioralState) -> ExplanationRecord {
    ExplanationRecord::new(
        TRIGGER,
        strategy,
        *state,
        format!("Selected {} strategy", strategy),
        EXPECTED_OUTCOME,
        REVERSAL_CONDITION,
        1.0,
    )
}
