/// Policy evolution chain errors.
#[derive(Debug, thiserror::Error)]
pub enum EvolutionError {
    #[error("policy evaluation requires a non-empty log window")]
    EmptyLogWindow,

    #[error("approval log {path} could not be written: {reason}")]
    ApprovalLogWrite { path: String, reason: String },

    #[error("approval log {path} could not be read: {reason}")]
    ApprovalLogRead { path: String, reason: String },

    #[error("approval log {path} line {line} is malformed: {reason}")]
    MalformedApprovalEntry {
        path: String,
        line: usize,
        reason: String,
    },
}
