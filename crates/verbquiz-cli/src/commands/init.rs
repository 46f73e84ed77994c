//! The `verbquiz init` command.

use anyhow::Result;

use verbquiz_core::parser::BUILTIN_VERBS;

const CONFIG_FILE: &str = "verbquiz.toml";
const VERBS_FILE: &str = "verbs-list.json";

pub fn execute() -> Result<()> {
    for (path, content) in [(CONFIG_FILE, SAMPLE_CONFIG), (VERBS_FILE, BUILTIN_VERBS)] {
        if std::path::Path::new(path).exists() {
            println!("{path} already exists, skipping.");
        } else {
            std::fs::write(path, content)?;
            println!("Created {path}");
        }
    }

    println!("\nNext steps:");
    println!("  1. Edit {VERBS_FILE} to add or remove verbs");
    println!("  2. Run: verbquiz validate --verbs {VERBS_FILE}");
    println!("  3. Run: verbquiz play");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# verbquiz configuration

# Questions per round
max_questions = 10

# Verb list; the bundled list is used when this is unset
verbs_path = "verbs-list.json"

# Fixed seed for a reproducible draw order
# seed = 42
"#;
