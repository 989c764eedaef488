// Single source of truth for all default values.

// --- Simulation ---
pub const DEFAULT_TOTAL_DAYS: u32 = 7;

// --- Synthetic user ---
pub const DEFAULT_USER_NAME: &str = "Burnout-Prone Student";
pub const DEFAULT_COMPLIANCE_BIAS: f64 = 0.65;
pub const DEFAULT_FATIGUE_SENSITIVITY: f64 = 0.6;
pub const DEFAULT_AVOIDANCE_TENDENCY: f64 = 0.35;
pub const DEFAULT_SEED: u64 = 42;

// --- Baseline policy ---
pub const DEFAULT_ALARM_STRICTNESS: f64 = 0.6;
pub const DEFAULT_SUPPORT_WEIGHT: f64 = 0.4;
pub const DEFAULT_ENFORCEMENT_WEIGHT: f64 = 0.5;
pub const DEFAULT_BASELINE_REASON: &str = "Baseline policy";

// --- Evolution ---
pub const DEFAULT_ADJUSTMENT_STEP: f64 = 0.1;

// --- Approval ---
pub const DEFAULT_APPROVAL_LOG_PATH: &str = "approvals_log.jsonl";

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = true;
