//! The `avalia submit` command.

use std::path::PathBuf;

use anyhow::{bail, Result};
use chrono::{SecondsFormat, Utc};

use avalia_core::parser::parse_form;
use avalia_store::{EvaluationStore, SqliteStore};

pub fn execute(form_path: PathBuf, db: PathBuf) -> Result<()> {
    let form = parse_form(&form_path)?;

    let check = form.check();
    for warning in &check.warnings {
        tracing::warn!("{warning}");
    }
    if !check.is_ok() {
        for problem in &check.problems {
            eprintln!("  - {problem}");
        }
        bail!("form has {} problem(s), not submitted", check.problems.len());
    }

    let timestamp = Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true);
    let (kind, payload) = form.into_payload(&timestamp);
    let score = payload.score().unwrap_or(0.0);
    let label = payload.classification().unwrap_or_default().to_string();

    let store = SqliteStore::new(&db);
    let value = serde_json::to_value(&payload)?;
    let id = store.append(&kind.to_string(), &value)?;

    println!("Saved evaluation #{id} ({kind})");
    println!("  Nota final: {score:.2}");
    println!("  Classificação: {label}");

    Ok(())
}
