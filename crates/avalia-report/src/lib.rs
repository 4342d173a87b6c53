//! avalia-report — Derived views over the evaluation store.
//!
//! Flattens stored payloads into tabular history rows and renders the two
//! export formats: BOM-prefixed CSV of the full history and pretty-printed
//! JSON of a single submission.

mod csv_export;
mod history;
mod json_export;

pub use csv_export::{history_csv_bytes, write_history_csv};
pub use history::{flatten_history, HistoryRow};
pub use json_export::{payload_json_pretty, write_payload_json};
