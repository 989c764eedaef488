use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Immutable, named snapshot of tunable governance parameters.
///
/// Versions are never edited: evolving a policy produces a new version with a
/// fresh id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolicyVersion {
    parameters: BTreeMap<String, f64>,
    reason: String,
    version_id: String,
    timestamp: DateTime<Utc>,
}

impl PolicyVersion {
    /// Create a version with a fresh id and the current timestamp.
    pub fn new(parameters: BTreeMap<String, f64>, reason: impl Into<String>) -> Self {
        Self {
            parameters,
            reason: reason.into(),
            version_id: uuid::Uuid::new_v4().to_string(),
            timestamp: Utc::now(),
        }
    }

    /// Parameter name → value.
    pub fn parameters(&self) -> &BTreeMap<String, f64> {
        &self.parameters
    }

    /// Look up a single parameter.
    pub fn parameter(&self, name: &str) -> Option<f64> {
        self.parameters.get(name).copied()
    }

    /// Why this version exists.
    pub fn reason(&self) -> &str {
        &self.reason
    }

    /// Unique version identifier (UUID v4).
    pub fn version_id(&self) -> &str {
        &self.version_id
    }

    /// Creation time.
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}
