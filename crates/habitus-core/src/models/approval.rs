use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;

/// Immutable record of a human approval verdict on a proposed policy.
///
/// Deserialization runs the same validation as [`PolicyApprovalDecision::new`],
/// so a persisted entry with a blank reviewer is rejected on load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ApprovalEntry")]
pub struct PolicyApprovalDecision {
    approved: bool,
    reviewer: String,
    comment: Option<String>,
    timestamp: DateTime<Utc>,
}

/// Unvalidated on-disk shape of a decision.
#[derive(Deserialize)]
struct ApprovalEntry {
    approved: bool,
    reviewer: String,
    #[serde(default)]
    comment: Option<String>,
    timestamp: DateTime<Utc>,
}

impl PolicyApprovalDecision {
    /// Record a verdict now. The reviewer must be named.
    pub fn new(
        approved: bool,
        reviewer: impl Into<String>,
        comment: Option<String>,
    ) -> Result<Self, ValidationError> {
        Self::at(approved, reviewer, comment, Utc::now())
    }

    /// Record a verdict with an explicit timestamp.
    pub fn at(
        approved: bool,
        reviewer: impl Into<String>,
        comment: Option<String>,
        timestamp: DateTime<Utc>,
    ) -> Result<Self, ValidationError> {
        let reviewer = reviewer.into();
        if reviewer.trim().is_empty() {
            return Err(ValidationError::EmptyReviewer);
        }
        Ok(Self {
            approved,
            reviewer,
            comment,
            timestamp,
        })
    }

    /// Whether the proposed policy was approved.
    pub fn approved(&self) -> bool {
        self.approved
    }

    /// Who made the call.
    pub fn reviewer(&self) -> &str {
        &self.reviewer
    }

    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }

    /// When the verdict was recorded.
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}

impl TryFrom<ApprovalEntry> for PolicyApprovalDecision {
    type Error = ValidationError;

    fn try_from(entry: ApprovalEntry) -> Result<Self, Self::Error> {
        Self::at(entry.approved, entry.reviewer, entry.comment, entry.timestamp)
    }
}
