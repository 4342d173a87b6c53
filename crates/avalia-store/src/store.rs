//! Evaluation store trait and SQLite implementation.

use std::path::{Path, PathBuf};

use chrono::{SecondsFormat, Utc};
use rusqlite::Connection;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::StoreError;
use crate::migrations::Migrator;

/// Database file used when the caller does not pick one, relative to the
/// working directory.
pub const DEFAULT_DB_FILE: &str = "avaliacoes.db";

/// One persisted, immutable evaluation submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationRecord {
    /// Surrogate key assigned by SQLite on insert; never reused or mutated.
    pub id: i64,
    /// Caller-supplied kind tag ("lider", "liderado", open set).
    pub tipo: String,
    /// The submission payload, JSON text stored verbatim.
    pub payload: String,
    /// Insert time stamped by the store, ISO-8601 UTC.
    pub created_at: String,
}

impl EvaluationRecord {
    /// Decode the payload back to JSON.
    pub fn payload_value(&self) -> Result<Value, serde_json::Error> {
        serde_json::from_str(&self.payload)
    }
}

/// Append-only evaluation persistence.
pub trait EvaluationStore {
    /// Ensure the database and its table exist. Idempotent, safe on every
    /// startup.
    fn initialize(&self) -> Result<(), StoreError>;

    /// Serialize `payload`, stamp `created_at`, insert one row and return the
    /// assigned id. Never overwrites existing records.
    fn append(&self, kind: &str, payload: &Value) -> Result<i64, StoreError>;

    /// Every record, most recent first (id descending). A database that was
    /// never initialized yields an empty list, not an error.
    fn load_all(&self) -> Result<Vec<EvaluationRecord>, StoreError>;
}

/// SQLite-backed evaluation store.
///
/// Holds only the database path: each operation opens its own connection and
/// releases it on return, which is all the single-user synchronous model
/// needs.
pub struct SqliteStore {
    path: PathBuf,
}

impl SqliteStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Store at [`DEFAULT_DB_FILE`] in the working directory.
    pub fn default_location() -> Self {
        Self::new(DEFAULT_DB_FILE)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn connect(&self) -> Result<Connection, StoreError> {
        let conn = Connection::open(&self.path)?;
        Migrator::new(&conn).migrate()?;
        Ok(conn)
    }
}

impl EvaluationStore for SqliteStore {
    fn initialize(&self) -> Result<(), StoreError> {
        self.connect().map(drop)
    }

    fn append(&self, kind: &str, payload: &Value) -> Result<i64, StoreError> {
        let text = serde_json::to_string(payload)?;
        let created_at = Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true);

        let conn = self.connect()?;
        conn.execute(
            "INSERT INTO avaliacoes (tipo, payload, created_at) VALUES (?1, ?2, ?3)",
            rusqlite::params![kind, text, created_at],
        )?;
        let id = conn.last_insert_rowid();
        tracing::debug!(id, kind, "appended evaluation record");
        Ok(id)
    }

    fn load_all(&self) -> Result<Vec<EvaluationRecord>, StoreError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let conn = self.connect()?;
        let mut stmt = conn.prepare(
            "SELECT id, tipo, payload, created_at FROM avaliacoes ORDER BY id DESC",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok(EvaluationRecord {
                id: row.get(0)?,
                tipo: row.get(1)?,
                payload: row.get(2)?,
                created_at: row.get(3)?,
            })
        })?;
        let records = rows.collect::<Result<Vec<_>, _>>()?;
        Ok(records)
    }
}
