//! Alert sink backed by the tracing pipeline.
//!
//! Delivery to an actual notification surface (toast, push, buzzer) is
//! the embedding application's job; this adapter routes alerts into the
//! structured log stream under a dedicated target so they stay visible
//! in headless deployments.

use crate::application::ports::{AlertSeverity, AlertSink};

/// Alert sink that emits one tracing event per alert.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingAlertSink;

impl AlertSink for TracingAlertSink {
    fn notify(&self, message: &str, severity: AlertSeverity) {
        match severity {
            AlertSeverity::Info => {
                tracing::info!(target: "dosing_guard::alerts", "{message}");
            }
            AlertSeverity::Warning => {
                tracing::warn!(target: "dosing_guard::alerts", "{message}");
            }
            AlertSeverity::Error => {
                tracing::error!(target: "dosing_guard::alerts", "{message}");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notify_does_not_panic_without_subscriber() {
        let sink = TracingAlertSink;
        sink.notify("limit fired", AlertSeverity::Error);
        sink.notify("info", AlertSeverity::Info);
        sink.notify("warning", AlertSeverity::Warning);
    }
}
