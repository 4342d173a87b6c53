//! Standalone JSON export of one submission's payload.

use std::path::Path;

use anyhow::{Context, Result};
use avalia_store::EvaluationRecord;

/// Pretty-print a stored payload, non-ASCII characters preserved literally.
pub fn payload_json_pretty(record: &EvaluationRecord) -> Result<String> {
    let value = record
        .payload_value()
        .with_context(|| format!("record {} has a malformed payload", record.id))?;
    let pretty = serde_json::to_string_pretty(&value)?;
    Ok(pretty)
}

/// Write one record's payload as a standalone pretty-printed JSON file.
pub fn write_payload_json(record: &EvaluationRecord, path: &Path) -> Result<()> {
    let pretty = payload_json_pretty(record)?;
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(path, pretty)
        .with_context(|| format!("failed to write JSON to {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(payload: &str) -> EvaluationRecord {
        EvaluationRecord {
            id: 1,
            tipo: "lider".into(),
            payload: payload.into(),
            created_at: "2025-07-31T12:00:00.000000Z".into(),
        }
    }

    #[test]
    fn export_is_pretty_and_preserves_accents() {
        let rec = record(r#"{"info":{"nome":"João"},"classificacao":"Insatisfatório"}"#);
        let out = payload_json_pretty(&rec).unwrap();
        assert!(out.contains('\n'), "expected pretty output");
        assert!(out.contains("João"));
        assert!(out.contains("Insatisfatório"));
    }

    #[test]
    fn malformed_payload_is_an_error() {
        let rec = record("{broken");
        let err = payload_json_pretty(&rec).unwrap_err();
        assert!(err.to_string().contains("malformed payload"));
    }

    #[test]
    fn write_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("avaliacao.json");
        let rec = record(r#"{"score":4.2}"#);
        write_payload_json(&rec, &path).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["score"], 4.2);
    }
}
