//! Turso-backed durable audit store.
//!
//! One table of dosing-safety announcements, append-only. Transactional
//! semantics live entirely in the database; the enforcer treats every
//! write as best effort.

use async_trait::async_trait;

use crate::application::ports::{AuditError, AuditStore};

const CREATE_TABLE: &str = "CREATE TABLE IF NOT EXISTS safety_announcements (
    id TEXT PRIMARY KEY,
    recorded_at TEXT NOT NULL,
    message TEXT NOT NULL
)";

const INSERT_ANNOUNCEMENT: &str =
    "INSERT INTO safety_announcements (id, recorded_at, message) VALUES (?1, ?2, ?3)";

/// Durable audit store backed by a local Turso database.
pub struct TursoAuditStore {
    conn: turso::Connection,
}

impl TursoAuditStore {
    /// Open (or create) the database at `path` and ensure the
    /// announcements table exists.
    pub async fn open(path: &str) -> Result<Self, AuditError> {
        let db = turso::Builder::new_local(path)
            .build()
            .await
            .map_err(|e| AuditError::Unavailable(e.to_string()))?;
        let conn = db
            .connect()
            .map_err(|e| AuditError::Unavailable(e.to_string()))?;
        conn.execute(CREATE_TABLE, ())
            .await
            .map_err(|e| AuditError::Unavailable(e.to_string()))?;
        Ok(Self { conn })
    }
}

#[async_trait]
impl AuditStore for TursoAuditStore {
    async fn record_announcement(&self, message: &str) -> Result<(), AuditError> {
        let id = uuid::Uuid::new_v4().to_string();
        let recorded_at = chrono::Utc::now().to_rfc3339();
        self.conn
            .execute(INSERT_ANNOUNCEMENT, (id, recorded_at, message.to_string()))
            .await
            .map_err(|e| AuditError::WriteFailed(e.to_string()))?;
        Ok(())
    }
}
