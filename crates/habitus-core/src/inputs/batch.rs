use chrono::{DateTime, Utc};
use serde::Serialize;

use super::Signal;
use crate::errors::ValidationError;

/// Signals observed over one decision window.
///
/// Invariants: `window_start <= window_end`, and every signal's timestamp
/// lies inside `[window_start, window_end]`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SignalBatch {
    signals: Vec<Signal>,
    window_start: DateTime<Utc>,
    window_end: DateTime<Utc>,
}

impl SignalBatch {
    /// Build a validated batch.
    pub fn new(
        signals: Vec<Signal>,
        window_start: DateTime<Utc>,
        window_end: DateTime<Utc>,
    ) -> Result<Self, ValidationError> {
        if window_start > window_end {
            return Err(ValidationError::InvertedWindow {
                start: window_start.to_rfc3339(),
                end: window_end.to_rfc3339(),
            });
        }

        if let Some(outside) = signals
            .iter()
            .find(|s| s.timestamp() < window_start || s.timestamp() > window_end)
        {
            return Err(ValidationError::SignalOutsideWindow {
                name: outside.name().to_string(),
                timestamp: outside.timestamp().to_rfc3339(),
                start: window_start.to_rfc3339(),
                end: window_end.to_rfc3339(),
            });
        }

        Ok(Self {
            signals,
            window_start,
            window_end,
        })
    }

    /// A batch with no observations.
    pub fn empty(
        window_start: DateTime<Utc>,
        window_end: DateTime<Utc>,
    ) -> Result<Self, ValidationError> {
        Self::new(Vec::new(), window_start, window_end)
    }

    pub fn signals(&self) -> &[Signal] {
        &self.signals
    }

    pub fn window_start(&self) -> DateTime<Utc> {
        self.window_start
    }

    pub fn window_end(&self) -> DateTime<Utc> {
        self.window_end
    }

    pub fn len(&self) -> usize {
        self.signals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.signals.is_empty()
    }

    /// Signal names in observation order.
    pub fn names(&self) -> Vec<String> {
        self.signals.iter().map(|s| s.name().to_string()).collect()
    }
}
