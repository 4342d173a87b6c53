//! The `avalia validate` command.

use std::path::PathBuf;

use anyhow::{bail, Result};

use avalia_core::parser::parse_form;

pub fn execute(form_path: PathBuf) -> Result<()> {
    let form = parse_form(&form_path)?;
    let check = form.check();

    println!("{}: kind={}, nome={:?}", form_path.display(), form.kind(), form.nome());

    for warning in &check.warnings {
        println!("  warning: {warning}");
    }

    if check.is_ok() {
        println!("Form is valid.");
        Ok(())
    } else {
        for problem in &check.problems {
            println!("  problem: {problem}");
        }
        bail!("form has {} problem(s)", check.problems.len());
    }
}
