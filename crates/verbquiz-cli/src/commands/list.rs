//! The `verbquiz list` command.

use std::path::PathBuf;

use anyhow::{Context, Result};
use comfy_table::Table;

pub async fn execute(verbs_path: Option<PathBuf>, format: String) -> Result<()> {
    let bank = super::load_bank(verbs_path.as_deref()).await?;

    match format.as_str() {
        "table" => {
            let mut table = Table::new();
            table.set_header(vec!["Present", "Preterit", "Participle"]);
            for verb in bank.verbs() {
                table.add_row(vec![
                    verb.present.clone(),
                    verb.preterit.canonical(),
                    verb.participle.canonical(),
                ]);
            }
            println!("{table}");
            println!("{} verbs", bank.len());
        }
        "json" => {
            let json =
                serde_json::to_string_pretty(bank.verbs()).context("failed to serialize verbs")?;
            println!("{json}");
        }
        other => anyhow::bail!("unknown format: {other} (expected table or json)"),
    }

    Ok(())
}
