//! The `avalia export` command.

use std::path::PathBuf;

use anyhow::{bail, Result};

use avalia_report::{flatten_history, write_history_csv, write_payload_json};
use avalia_store::{EvaluationStore, SqliteStore};

pub fn execute(db: PathBuf, id: Option<i64>, output: PathBuf) -> Result<()> {
    let store = SqliteStore::new(&db);
    let records = store.load_all()?;

    match id {
        Some(id) => {
            let Some(record) = records.iter().find(|r| r.id == id) else {
                bail!("no evaluation with id {id} in {}", db.display());
            };
            write_payload_json(record, &output)?;
            println!("Exported evaluation #{id} to {}", output.display());
        }
        None => {
            let rows = flatten_history(&records);
            write_history_csv(&rows, &output)?;
            println!("Exported {} row(s) to {}", rows.len(), output.display());
        }
    }

    Ok(())
}
