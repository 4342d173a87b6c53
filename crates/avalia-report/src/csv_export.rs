//! CSV rendering of the evaluation history.

use std::path::Path;

use anyhow::{Context, Result};

use crate::history::HistoryRow;

/// UTF-8 byte-order marker, required for common spreadsheet tools to read
/// accented characters correctly.
const BOM: &[u8] = b"\xef\xbb\xbf";

/// Render history rows as BOM-prefixed CSV bytes.
///
/// Header: `id,tipo,nome,setor_area,periodo,score,classificacao,created_at`.
pub fn history_csv_bytes(rows: &[HistoryRow]) -> Result<Vec<u8>> {
    let mut buf = Vec::from(BOM);
    {
        let mut writer = csv::Writer::from_writer(&mut buf);
        for row in rows {
            writer.serialize(row).context("failed to encode CSV row")?;
        }
        // An empty history still gets the header line.
        if rows.is_empty() {
            writer.write_record([
                "id",
                "tipo",
                "nome",
                "setor_area",
                "periodo",
                "score",
                "classificacao",
                "created_at",
            ])?;
        }
        writer.flush()?;
    }
    Ok(buf)
}

/// Write the history CSV to a file.
pub fn write_history_csv(rows: &[HistoryRow], path: &Path) -> Result<()> {
    let bytes = history_csv_bytes(rows)?;
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(path, bytes)
        .with_context(|| format!("failed to write CSV to {}", path.display()))?;
    Ok(())
}
