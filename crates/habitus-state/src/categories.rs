//! Signal category tables.
//!
//! Process-wide constant configuration. Within one accumulator the raising
//! and lowering sets are disjoint; the same signal may appear in several
//! accumulators (e.g. `late_night_usage` raises both failure risk and fatigue).

pub const FAILURE_SIGNALS: &[&str] = &["alarm_failure", "excessive_snooze", "late_night_usage"];

pub const SUCCESS_SIGNALS: &[&str] = &["clean_alarm_dismissal", "early_wake_success"];

pub const FATIGUE_SIGNALS: &[&str] = &[
    "sleep_debt",
    "late_night_usage",
    "repeated_enforcement",
    "short_sleep_duration",
];

pub const RECOVERY_SIGNALS: &[&str] = &["adequate_sleep", "recovery_day", "low_enforcement_day"];

pub const AVOIDANCE_SIGNALS: &[&str] = &[
    "volume_evasion",
    "power_off_attempt",
    "fake_dismissal",
    "dismissal_latency_spike",
];

pub const COMPLIANCE_SIGNALS: &[&str] = &["clean_compliance_streak", "no_avoidance_detected"];

pub const DISCIPLINE_POSITIVE: &[&str] = &[
    "early_wake_success",
    "clean_alarm_dismissal",
    "consistent_sleep_routine",
];

pub const DISCIPLINE_NEGATIVE: &[&str] = &["alarm_failure", "excessive_snooze", "routine_break"];

pub const MOMENTUM_POSITIVE: &[&str] = &[
    "early_wake_success",
    "clean_alarm_dismissal",
    "consistent_sleep_routine",
    "adequate_sleep",
];

pub const MOMENTUM_NEGATIVE: &[&str] = &[
    "alarm_failure",
    "excessive_snooze",
    "late_night_usage",
    "routine_break",
];

pub const HIGH_STAKES_CONTEXT: &[&str] = &["exam_day", "important_meeting", "deadline_day", "travel_day"];

pub const LOW_STAKES_CONTEXT: &[&str] = &["weekend", "holiday", "recovery_day"];

/// Whether `name` belongs to `category`.
pub fn contains(category: &[&str], name: &str) -> bool {
    category.iter().any(|member| *member == name)
}
