//! The `avalia criteria` command.

use anyhow::{bail, Result};

use avalia_core::criteria::{CRITERIA_LIDER, CRITERIA_LIDERADO};

pub fn execute(kind_filter: Option<String>) -> Result<()> {
    let catalogs = [("lider", CRITERIA_LIDER), ("liderado", CRITERIA_LIDERADO)];

    let mut found_any = false;
    for (kind, catalog) in catalogs {
        if let Some(filter) = &kind_filter {
            if kind != filter {
                continue;
            }
        }
        found_any = true;

        println!("Kind: {kind} ({} criteria, rated 1–5)", catalog.len());
        for criterion in catalog {
            println!("  {} — {} ({})", criterion.key, criterion.label, criterion.description);
        }
        println!();
    }

    if !found_any {
        bail!("unknown kind: {}", kind_filter.unwrap_or_default());
    }

    Ok(())
}
