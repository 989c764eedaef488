use serde::{Deserialize, Serialize};

use super::defaults;

/// Human approval log configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApprovalConfig {
    /// Path of the newline-delimited JSON approval log.
    pub log_path: String,
}

impl Default for ApprovalConfig {
    fn default() -> Self {
        Self {
            log_path: defaults::DEFAULT_APPROVAL_LOG_PATH.to_string(),
        }
    }
}
