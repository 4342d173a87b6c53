//! The `avalia history` command.

use std::path::PathBuf;

use anyhow::Result;

use avalia_report::{flatten_history, HistoryRow};
use avalia_store::{EvaluationStore, SqliteStore};

pub fn execute(db: PathBuf, limit: Option<usize>, format: String) -> Result<()> {
    let store = SqliteStore::new(&db);
    let records = store.load_all()?;
    let mut rows = flatten_history(&records);
    if let Some(limit) = limit {
        rows.truncate(limit);
    }

    if rows.is_empty() {
        println!("No evaluations saved yet. Run `avalia submit` first.");
        return Ok(());
    }

    match format.as_str() {
        "json" => {
            println!("{}", serde_json::to_string_pretty(&rows)?);
        }
        _ => {
            print_table(&rows);
            println!("\n{} evaluation(s) in {}", rows.len(), db.display());
        }
    }

    Ok(())
}

fn print_table(rows: &[HistoryRow]) {
    use comfy_table::{Cell, Table};

    let mut table = Table::new();
    table.set_header(vec![
        "ID",
        "Tipo",
        "Nome",
        "Setor/Área",
        "Período",
        "Nota",
        "Classificação",
        "Criado em (UTC)",
    ]);

    for row in rows {
        table.add_row(vec![
            Cell::new(row.id),
            Cell::new(&row.tipo),
            Cell::new(&row.nome),
            Cell::new(&row.setor_area),
            Cell::new(&row.periodo),
            Cell::new(format!("{:.2}", row.score)),
            Cell::new(&row.classificacao),
            Cell::new(&row.created_at),
        ]);
    }

    println!("{table}");
}
