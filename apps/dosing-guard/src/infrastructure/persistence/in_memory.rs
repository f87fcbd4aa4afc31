//! In-memory audit store for tests and development.

use std::sync::RwLock;

use async_trait::async_trait;

use crate::application::ports::{AuditError, AuditStore};

/// Audit store that keeps announcements in a vector.
#[derive(Debug, Default)]
pub struct InMemoryAuditStore {
    records: RwLock<Vec<String>>,
}

impl InMemoryAuditStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all recorded announcements, oldest first.
    pub fn records(&self) -> Vec<String> {
        self.records
            .read()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .clone()
    }
}

#[async_trait]
impl AuditStore for InMemoryAuditStore {
    async fn record_announcement(&self, message: &str) -> Result<(), AuditError> {
        let mut records = self
            .records
            .write()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        records.push(message.to_string());
        Ok(())
    }
}
