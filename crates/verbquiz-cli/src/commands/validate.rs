//! The `verbquiz validate` command.

use std::path::PathBuf;

use anyhow::Result;

use verbquiz_core::parser;

pub async fn execute(verbs_path: PathBuf) -> Result<()> {
    let bank = parser::read_verb_list(&verbs_path).await?;

    println!("Verb list: {} ({} verbs)", verbs_path.display(), bank.len());

    let warnings = parser::validate_verb_list(&bank);
    for w in &warnings {
        let prefix = w
            .present
            .as_ref()
            .map(|present| format!("  [{present}]"))
            .unwrap_or_else(|| "  ".to_string());
        println!("{prefix} WARNING: {}", w.message);
    }

    if warnings.is_empty() {
        println!("Verb list valid.");
    } else {
        println!("\n{} warning(s) found.", warnings.len());
    }

    Ok(())
}
