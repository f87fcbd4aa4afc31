//! Clamp events.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Record of one value that had to be clamped.
///
/// Produced only when clamping actually changed the value. Lives for the
/// duration of a single verification call: it is turned into a log line,
/// a best-effort audit record, and a user alert, then dropped.
#[derive(Debug, Clone, Serialize)]
pub struct ClampEvent {
    /// Human-readable name of the clamped parameter.
    pub parameter: String,
    /// The value as proposed by the caller.
    pub original: f64,
    /// The value after clamping into the supplied window.
    pub clamped: f64,
    /// The full user-facing message.
    pub message: String,
    /// When the clamp happened.
    pub occurred_at: DateTime<Utc>,
}

impl ClampEvent {
    /// Create an event for a clamp that changed `original` into `clamped`.
    pub fn new(
        parameter: impl Into<String>,
        original: f64,
        clamped: f64,
        message: impl Into<String>,
    ) -> Self {
        Self {
            parameter: parameter.into(),
            original,
            clamped,
            message: message.into(),
            occurred_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_serializes_with_both_values() {
        let event = ClampEvent::new("BG target", 300.0, 250.0, "BG target limited");
        let json = serde_json::to_value(&event).unwrap();

        assert_eq!(json["parameter"], "BG target");
        assert_eq!(json["original"], 300.0);
        assert_eq!(json["clamped"], 250.0);
    }
}
