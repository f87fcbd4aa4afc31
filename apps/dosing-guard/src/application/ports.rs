//! Ports for the external collaborators of the safety envelope.
//!
//! Each port mirrors one collaborator the core consumes: the preference
//! store that holds the risk-band setting, the label/resource layer that
//! supplies localized text, the durable audit trail, and the user-facing
//! alert sink. The core treats all of them as opaque; none of them may
//! influence the limit tables themselves.

use async_trait::async_trait;
use thiserror::Error;

/// Read-only access to stored user preferences.
///
/// Supplies the raw risk-band setting text. Implementations must be
/// thread-safe; the enforcer re-reads the setting on every query.
pub trait SettingsStore: Send + Sync {
    /// Return the stored string for `key`, or `default` when unset.
    fn get_string(&self, key: &str, default: &str) -> String;
}

/// Keys for the localized text the core needs.
///
/// A closed enum instead of raw resource-id strings, so a missing label
/// is a compile error rather than a runtime lookup failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LabelKey {
    /// Risk-band label: child.
    BandChild,
    /// Risk-band label: teenager.
    BandTeenager,
    /// Risk-band label: adult.
    BandAdult,
    /// Risk-band label: insulin-resistant adult.
    BandResistantAdult,
    /// Risk-band label: pregnant.
    BandPregnant,
    /// Template: "value {} is out of hard limits".
    ValueOutOfRange,
    /// Template: "value {} limited to {}".
    ValueLimitedTo,
}

/// Opaque source of localized labels and message templates.
///
/// The core performs no locale logic itself; it compares stored settings
/// against whatever text this resolver returns and builds alert/log
/// messages from its templates.
pub trait LabelResolver: Send + Sync {
    /// Return the localized text for `key`.
    fn localize(&self, key: LabelKey) -> String;

    /// Return the template for `key` with its placeholders substituted
    /// by `args` in order.
    fn format(&self, key: LabelKey, args: &[&str]) -> String;
}

/// Severity of a user-facing alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertSeverity {
    /// Informational.
    Info,
    /// Needs attention but no action was blocked.
    Warning,
    /// A safety limit fired.
    Error,
}

/// Fire-and-forget user-facing notification sink.
pub trait AlertSink: Send + Sync {
    /// Deliver `message` to the user. Must not block the safety path.
    fn notify(&self, message: &str, severity: AlertSeverity);
}

/// Errors surfaced by audit-store adapters.
///
/// Never propagated out of the clamp path; audit durability is best
/// effort and failures are logged and swallowed there.
#[derive(Debug, Error)]
pub enum AuditError {
    /// The store could not be opened or reached.
    #[error("audit store unavailable: {0}")]
    Unavailable(String),

    /// A write was attempted and failed.
    #[error("audit write failed: {0}")]
    WriteFailed(String),
}

/// Durable, best-effort trail of dosing-safety announcements.
#[async_trait]
pub trait AuditStore: Send + Sync {
    /// Append one announcement message to the trail.
    async fn record_announcement(&self, message: &str) -> Result<(), AuditError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_audit_error_display() {
        let err = AuditError::WriteFailed("disk full".to_string());
        assert_eq!(err.to_string(), "audit write failed: disk full");

        let err = AuditError::Unavailable("no such file".to_string());
        assert_eq!(err.to_string(), "audit store unavailable: no such file");
    }
}
