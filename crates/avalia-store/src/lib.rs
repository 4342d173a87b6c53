//! avalia-store — Append-only SQLite persistence for evaluation submissions.
//!
//! One table, insert and full read-back only. Records are immutable once
//! written; there is no update or delete API.

mod error;
mod migrations;
mod store;

pub use error::StoreError;
pub use store::{EvaluationRecord, EvaluationStore, SqliteStore, DEFAULT_DB_FILE};
