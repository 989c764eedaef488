//! Test fixture loader for Habitus golden datasets, plus builders for the
//! states, logs and policy versions integration tests need.

use std::collections::BTreeMap;
use std::path::PathBuf;

use chrono::{Duration, Utc};
use habitus_core::inputs::SignalBatch;
use habitus_core::models::{EvolutionSignal, PolicyEvaluation};
use habitus_core::{
    BehavioralState, ExplanationRecord, GovernanceDirective, PolicyVersion, SimulationLog,
    Strategy,
};
use serde::de::DeserializeOwned;
use serde::Deserialize;

/// Root directory of the golden data folder.
fn fixtures_root() -> PathBuf {
    // Works from any crate in the workspace: walk up to find test-fixtures/golden.
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let mut path = PathBuf::from(&manifest_dir);

    while !path.join("test-fixtures").join("golden").exists() {
        if !path.pop() {
            panic!(
                "Could not find test-fixtures/golden from CARGO_MANIFEST_DIR={}",
                manifest_dir
            );
        }
    }
    path.join("test-fixtures").join("golden")
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Check that a fixture file exists.
pub fn fixture_exists(relative_path: &str) -> bool {
    fixtures_root().join(relative_path).exists()
}

// ── Golden case shapes ────────────────────────────────────────────────────

/// Serialized form of a behavioral state.
#[derive(Debug, Clone, Deserialize)]
pub struct StateFixture {
    pub discipline_level: f64,
    pub failure_risk: f64,
    pub avoidance_tendency: f64,
    pub fatigue_index: f64,
    pub context_importance: f64,
    pub momentum_trend: f64,
}

impl StateFixture {
    pub fn to_state(&self) -> BehavioralState {
        BehavioralState::new(
            self.discipline_level,
            self.failure_risk,
            self.avoidance_tendency,
            self.fatigue_index,
            self.context_importance,
            self.momentum_trend,
        )
    }
}

/// One routing scenario: a state and the strategy it must resolve to.
#[derive(Debug, Clone, Deserialize)]
pub struct RoutingCase {
    pub name: String,
    pub state: StateFixture,
    pub expected: Strategy,
    pub matched_policy: Option<String>,
}

/// One evolution scenario: an evaluation and the exact signal set it yields.
#[derive(Debug, Clone, Deserialize)]
pub struct SignalCase {
    pub name: String,
    pub evaluation: PolicyEvaluation,
    pub expected: Vec<EvolutionSignal>,
}

pub fn routing_cases() -> Vec<RoutingCase> {
    load_fixture("routing/priority_cases.json")
}

pub fn signal_cases() -> Vec<SignalCase> {
    load_fixture("evolution/signal_cases.json")
}

// ── Builders ──────────────────────────────────────────────────────────────

/// The baseline policy shared by the evolution scenarios.
pub fn baseline_policy() -> PolicyVersion {
    PolicyVersion::new(
        BTreeMap::from([
            ("alarm_strictness".to_string(), 0.6),
            ("support_weight".to_string(), 0.4),
            ("enforcement_weight".to_string(), 0.5),
        ]),
        "Initial baseline policy",
    )
}

/// Builder for synthetic simulation logs.
#[derive(Debug, Clone)]
pub struct LogBuilder {
    day: u32,
    state: BehavioralState,
    strategy: Strategy,
    strictness: f64,
    alarm_triggered: bool,
    outcome_success: Option<bool>,
    trust_delta: f64,
}

impl LogBuilder {
    pub fn new(day: u32) -> Self {
        Self {
            day,
            state: BehavioralState::cold_start(),
            strategy: Strategy::Stabilization,
            strictness: 0.5,
            alarm_triggered: false,
            outcome_success: None,
            trust_delta: 0.01,
        }
    }

    pub fn state(mut self, state: BehavioralState) -> Self {
        self.state = state;
        self
    }

    pub fn fatigue(mut self, fatigue: f64) -> Self {
        self.state = self.state.with_fatigue_index(fatigue);
        self
    }

    pub fn failure_risk(mut self, risk: f64) -> Self {
        self.state = self.state.with_failure_risk(risk);
        self
    }

    pub fn strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Alarm fired; `complied` decides the outcome and the trust delta.
    pub fn alarm(mut self, complied: bool) -> Self {
        self.alarm_triggered = true;
        self.outcome_success = Some(complied);
        self.trust_delta = if complied { 0.02 } else { -0.05 };
        self
    }

    /// Calm day: no alarm, outcome recorded as not successful.
    pub fn calm(mut self) -> Self {
        self.alarm_triggered = false;
        self.outcome_success = Some(false);
        self.trust_delta = 0.01;
        self
    }

    /// Override the recorded outcome; `None` means it was never observed.
    pub fn outcome(mut self, outcome: Option<bool>) -> Self {
        self.outcome_success = outcome;
        self
    }

    pub fn trust_delta(mut self, delta: f64) -> Self {
        self.trust_delta = delta;
        self
    }

    pub fn build(self) -> SimulationLog {
        let now = Utc::now();
        let directive = GovernanceDirective::new(
            self.strategy,
            self.strictness,
            Vec::<String>::new(),
            0.5,
            true,
            false,
        )
        .expect("fixture directive is valid");
        let explanation = ExplanationRecord::new(
            "fixture",
            self.strategy,
            self.state,
            format!("Selected {} strategy", self.strategy),
            "fixture outcome",
            "fixture reversal",
            1.0,
        );
        SimulationLog::new(
            self.day,
            self.state,
            SignalBatch::empty(now - Duration::hours(8), now).expect("fixture window is valid"),
            directive,
            explanation,
            self.alarm_triggered,
            self.outcome_success,
            self.trust_delta,
        )
    }
}
