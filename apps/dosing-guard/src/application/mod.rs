//! Application layer - ports for external collaborators.
//!
//! The core talks to the outside world (preference storage, localized
//! labels, the audit trail, user alerts) only through the traits defined
//! here. Adapters live in [`crate::infrastructure`].

pub mod ports;

pub use ports::{
    AlertSeverity, AlertSink, AuditError, AuditStore, LabelKey, LabelResolver, SettingsStore,
};
