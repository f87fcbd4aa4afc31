//! Infrastructure layer - adapters for the application ports.

pub mod alerts;
pub mod labels;
pub mod persistence;
pub mod settings;

pub use alerts::TracingAlertSink;
pub use labels::EnglishLabels;
pub use persistence::{InMemoryAuditStore, TursoAuditStore};
pub use settings::InMemorySettingsStore;
