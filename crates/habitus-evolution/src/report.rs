//! Human-readable policy evolution report.

use std::collections::BTreeSet;

use habitus_core::{EvolutionSignal, PolicyEvaluation, PolicyRecommendation, PolicyVersion};

use crate::pipeline::EvolutionOutcome;

const RULE_WIDTH: usize = 80;
const SECTION_WIDTH: usize = 40;

#[derive(Debug, Clone, Copy, Default)]
pub struct PolicyEvolutionReport;

impl PolicyEvolutionReport {
    pub fn new() -> Self {
        Self
    }

    /// Render the four-section report.
    pub fn generate(
        &self,
        evaluation: &PolicyEvaluation,
        signals: &BTreeSet<EvolutionSignal>,
        recommendation: Option<&PolicyRecommendation>,
        proposed_version: Option<&PolicyVersion>,
    ) -> String {
        let rule = "=".repeat(RULE_WIDTH);
        let mut out = String::new();

        out.push_str(&format!("{rule}\nHabitus Policy Evolution Report\n{rule}\n\n"));

        section(&mut out, "1. Governance Evaluation");
        out.push_str(&format!("Window (days)        : {}\n", evaluation.window_days));
        out.push_str(&format!("Governance Health    : {}\n", evaluation.governance_health));
        out.push_str(&format!("Alarm Trigger Rate   : {:.2}\n", evaluation.alarm_trigger_rate));
        out.push_str(&format!("Success Rate         : {:.2}\n", evaluation.success_rate));
        out.push_str(&format!("False Alarm Rate     : {:.2}\n", evaluation.false_alarm_rate));
        out.push_str(&format!("Trust Delta          : {:.2}\n", evaluation.trust_delta));
        out.push_str(&format!("Fatigue Delta        : {:.2}\n", evaluation.fatigue_delta));
        out.push_str(&format!("Mean Failure Risk    : {:.2}\n\n", evaluation.failure_risk));

        section(&mut out, "2. Evolution Signals");
        if signals.is_empty() {
            out.push_str("No evolution signals detected.\n");
        }
        for signal in signals {
            out.push_str(&format!("- {signal}\n"));
        }
        out.push('\n');

        section(&mut out, "3. Policy Recommendation");
        match recommendation {
            Some(rec) => {
                out.push_str(&format!("Rationale:\n  {}\n\n", rec.rationale));
                out.push_str("Suggested Parameter Changes:\n");
                for (name, value) in &rec.suggested_parameters {
                    out.push_str(&format!("  - {name}: {value:.2}\n"));
                }
            }
            None => out.push_str("No policy change recommended.\n"),
        }
        out.push('\n');

        section(&mut out, "4. Proposed Policy Version");
        match proposed_version {
            Some(version) => {
                out.push_str(&format!("Version ID : {}\n", version.version_id()));
                out.push_str(&format!("Reason     : {}\n", version.reason()));
            }
            None => out.push_str("No new policy version generated.\n"),
        }

        out.push_str(&format!("\n{rule}\nEnd of Report\n{rule}"));
        out
    }

    /// Render the report for a pipeline run.
    pub fn from_outcome(&self, outcome: &EvolutionOutcome) -> String {
        self.generate(
            &outcome.evaluation,
            &outcome.signals,
            outcome.recommendation.as_ref(),
            outcome.proposed_version.as_ref(),
        )
    }
}

fn section(out: &mut String, title: &str) {
    out.push_str(&format!("{title}\n{}\n", "-".repeat(SECTION_WIDTH)));
}
