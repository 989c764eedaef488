/// Construction-time validation failures. A value that fails validation is
/// never observable.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("signal name must be a non-empty string")]
    EmptySignalName,

    #[error("signal {name}: confidence must be in [0.0, 1.0], got {confidence}")]
    ConfidenceOutOfRange { name: String, confidence: f64 },

    #[error("signal {name}: value must be finite, got {value}")]
    NonFiniteValue { name: String, value: f64 },

    #[error("batch window is inverted: start {start} is after end {end}")]
    InvertedWindow { start: String, end: String },

    #[error("signal {name} at {timestamp} lies outside window [{start}, {end}]")]
    SignalOutsideWindow {
        name: String,
        timestamp: String,
        start: String,
        end: String,
    },

    #[error("{field} must be in [0.0, 1.0], got {value}")]
    BoundOutOfRange { field: &'static str, value: f64 },

    #[error("allowed_capabilities must be non-empty strings")]
    EmptyCapability,

    #[error("approval reviewer must be a non-empty string")]
    EmptyReviewer,
}
