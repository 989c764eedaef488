//! Append-only audit log of human approval decisions.
//!
//! One JSON object per line, UTF-8, fields `approved`, `reviewer`,
//! `comment`, `timestamp`.

use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use habitus_core::config::ApprovalConfig;
use habitus_core::errors::{EvolutionError, HabitusResult};
use habitus_core::PolicyApprovalDecision;
use habitus_observability::tracing_setup::events;

#[derive(Debug, Clone)]
pub struct ApprovalService {
    log_path: PathBuf,
}

impl ApprovalService {
    pub fn new(log_path: impl Into<PathBuf>) -> Self {
        Self {
            log_path: log_path.into(),
        }
    }

    pub fn from_config(config: &ApprovalConfig) -> Self {
        Self::new(&config.log_path)
    }

    pub fn log_path(&self) -> &Path {
        &self.log_path
    }

    /// Append one decision to the log, creating the file if needed.
    pub fn record(&self, decision: &PolicyApprovalDecision) -> HabitusResult<()> {
        let write_err = |e: std::io::Error| EvolutionError::ApprovalLogWrite {
            path: self.log_path.display().to_string(),
            reason: e.to_string(),
        };

        let line = serde_json::to_string(decision)?;
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .map_err(write_err)?;
        writeln!(file, "{}", line).map_err(write_err)?;

        events::approval_recorded(decision.reviewer(), decision.approved());
        Ok(())
    }

    /// The most recent decision, if any.
    pub fn latest(&self) -> Result<Option<PolicyApprovalDecision>, EvolutionError> {
        Ok(self.load_all()?.pop())
    }

    /// Read every recorded decision in append order. A missing log is empty.
    pub fn load_all(&self) -> Result<Vec<PolicyApprovalDecision>, EvolutionError> {
        let path = self.log_path.display().to_string();
        let content = match fs::read_to_string(&self.log_path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(EvolutionError::ApprovalLogRead {
                    path,
                    reason: e.to_string(),
                })
            }
        };

        content
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(i, line)| {
                serde_json::from_str(line).map_err(|e| EvolutionError::MalformedApprovalEntry {
                    path: path.clone(),
                    line: i + 1,
                    reason: e.to_string(),
                })
            })
            .collect()
    }
}
