/// Habitus system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Tunable policy parameter: how strict alarms are by default.
pub const PARAM_ALARM_STRICTNESS: &str = "alarm_strictness";

/// Tunable policy parameter: weight given to supportive strategies.
pub const PARAM_SUPPORT_WEIGHT: &str = "support_weight";

/// Tunable policy parameter: weight given to enforcement.
pub const PARAM_ENFORCEMENT_WEIGHT: &str = "enforcement_weight";

/// Capability granted by an ENFORCEMENT directive.
pub const CAPABILITY_ALARM_ENFORCEMENT: &str = "alarm_enforcement";

/// Capability granted by a SUPPORT directive.
pub const CAPABILITY_COACHING: &str = "coaching";
