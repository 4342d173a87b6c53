//! Flattening stored records into tabular history rows.

use avalia_core::model::EvaluationPayload;
use avalia_store::EvaluationRecord;
use serde::{Deserialize, Serialize};

/// One row of the history view, flattened from a stored payload.
///
/// Field order is the CSV column order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryRow {
    pub id: i64,
    pub tipo: String,
    pub nome: String,
    pub setor_area: String,
    pub periodo: String,
    pub score: f64,
    pub classificacao: String,
    pub created_at: String,
}

/// Flatten records into history rows, most recent first.
///
/// A record whose payload is not valid JSON is skipped with a warning rather
/// than failing the whole listing; partially-filled payloads flatten to empty
/// cells.
pub fn flatten_history(records: &[EvaluationRecord]) -> Vec<HistoryRow> {
    records
        .iter()
        .filter_map(|record| match record.payload.parse::<serde_json::Value>() {
            Ok(value) => Some(to_row(record, value)),
            Err(err) => {
                tracing::warn!(id = record.id, %err, "skipping record with malformed payload");
                None
            }
        })
        .collect()
}

fn to_row(record: &EvaluationRecord, value: serde_json::Value) -> HistoryRow {
    // A known tipo with an unexpected shape still renders through the raw
    // fallback instead of erroring.
    let payload: EvaluationPayload = serde_json::from_value(value.clone())
        .unwrap_or(EvaluationPayload::Other(value));

    HistoryRow {
        id: record.id,
        tipo: record.tipo.clone(),
        nome: payload.nome().unwrap_or_default().to_string(),
        setor_area: payload.setor_area().unwrap_or_default().to_string(),
        periodo: payload.periodo().unwrap_or_default().to_string(),
        score: payload.score().unwrap_or(0.0),
        classificacao: payload.classification().unwrap_or_default().to_string(),
        created_at: record.created_at.clone(),
    }
}
