use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::errors::ValidationError;

/// A single normalized, timestamped behavioral observation.
///
/// Names are trimmed and lowercased on construction. A signal that fails
/// validation is never built.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Signal {
    name: String,
    value: f64,
    confidence: f64,
    timestamp: DateTime<Utc>,
    source: Option<String>,
}

impl Signal {
    /// Build a validated signal.
    pub fn new(
        name: &str,
        value: f64,
        confidence: f64,
        timestamp: DateTime<Utc>,
    ) -> Result<Self, ValidationError> {
        let name = name.trim().to_lowercase();
        if name.is_empty() {
            return Err(ValidationError::EmptySignalName);
        }
        if !confidence.is_finite() || !(0.0..=1.0).contains(&confidence) {
            return Err(ValidationError::ConfidenceOutOfRange { name, confidence });
        }
        if !value.is_finite() {
            return Err(ValidationError::NonFiniteValue { name, value });
        }
        Ok(Self {
            name,
            value,
            confidence,
            timestamp,
            source: None,
        })
    }

    /// Attach the producer that observed this signal.
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Signal identifier, never blank.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Observed value, always finite.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Producer's confidence in `value`, in `[0, 1]`.
    pub fn confidence(&self) -> f64 {
        self.confidence
    }

    /// When the signal was observed.
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// Producer that observed the signal, if known.
    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }
}
