//! Store error types.

use thiserror::Error;

/// Errors for evaluation store operations.
///
/// `Database` covers both the cannot-open and cannot-write cases; callers
/// surface it and drop the in-progress submission, there is no retry.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("migration failed: {0}")]
    Migration(String),

    #[error("failed to encode payload: {0}")]
    Serialize(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn migration_error_display() {
        let err = StoreError::Migration("v001_initial: syntax error".into());
        assert!(err.to_string().contains("v001_initial"));
    }
}
