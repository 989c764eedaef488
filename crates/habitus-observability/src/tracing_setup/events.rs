//! Structured log events for key governance operations.
//!
//! Each function emits a `tracing` event with structured fields.

/// Log a governance decision.
pub fn decision_made(decision_id: &str, strategy: &str, matched_policy: Option<&str>) {
    tracing::info!(
        event = "decision_made",
        decision_id = %decision_id,
        strategy = %strategy,
        matched_policy = matched_policy.unwrap_or("fallback"),
        "governance decision made"
    );
}

/// Log one completed simulation day.
pub fn simulation_day_completed(day: u32, strategy: &str, alarm_triggered: bool, trust_delta: f64) {
    tracing::debug!(
        event = "simulation_day_completed",
        day = day,
        strategy = %strategy,
        alarm_triggered = alarm_triggered,
        trust_delta = trust_delta,
        "simulation day completed"
    );
}

/// Log the end of a simulation run.
pub fn simulation_completed(days: u32, alarms_triggered: usize, net_trust: f64) {
    tracing::info!(
        event = "simulation_completed",
        days = days,
        alarms_triggered = alarms_triggered,
        net_trust = net_trust,
        "simulation completed"
    );
}

/// Log a completed policy evaluation.
pub fn evaluation_completed(window_days: usize, health: &str, false_alarm_rate: f64, trust_delta: f64) {
    tracing::info!(
        event = "evaluation_completed",
        window_days = window_days,
        health = %health,
        false_alarm_rate = false_alarm_rate,
        trust_delta = trust_delta,
        "policy evaluation completed"
    );
}

/// Log the evolution signals derived from an evaluation.
pub fn evolution_signals_derived(signals: &[&str]) {
    tracing::info!(
        event = "evolution_signals_derived",
        signals = ?signals,
        count = signals.len(),
        "evolution signals derived"
    );
}

/// Log a proposed policy recommendation.
pub fn recommendation_proposed(triggering_signals: &[String], rationale: &str) {
    tracing::info!(
        event = "recommendation_proposed",
        triggering_signals = ?triggering_signals,
        rationale = %rationale,
        "policy recommendation proposed"
    );
}

/// Log the creation of a new policy version.
pub fn policy_version_created(version_id: &str, previous_version_id: &str) {
    tracing::info!(
        event = "policy_version_created",
        version_id = %version_id,
        previous_version_id = %previous_version_id,
        "policy version created"
    );
}

/// Log a recorded human approval decision.
pub fn approval_recorded(reviewer: &str, approved: bool) {
    tracing::info!(
        event = "approval_recorded",
        reviewer = %reviewer,
        approved = approved,
        "approval decision recorded"
    );
}
