//! Persistence adapters for the audit trail.

pub mod in_memory;
pub mod turso_store;

pub use in_memory::InMemoryAuditStore;
pub use turso_store::TursoAuditStore;
