//! Verb list parser.
//!
//! Loads verb lists from JSON (an array of `[present, preterit, participle]`
//! string arrays) and validates them.

use std::collections::HashSet;
use std::path::Path;

use anyhow::{Context, Result};

use crate::bank::{VerbBank, VerbEntry};
use crate::error::LoadError;
use crate::model::{normalize, VariantSet};
use crate::round::DEFAULT_MAX_QUESTIONS;

/// The verb list bundled with the crate.
pub const BUILTIN_VERBS: &str = include_str!("../data/verbs-list.json");

/// Decode a JSON verb list into raw entries.
pub fn parse_verb_list_str(content: &str) -> Result<Vec<VerbEntry>, LoadError> {
    let entries: Vec<VerbEntry> = serde_json::from_str(content)?;
    Ok(entries)
}

/// Decode a JSON verb list straight into a bank.
pub fn load_bank_str(content: &str) -> Result<VerbBank, LoadError> {
    VerbBank::load(parse_verb_list_str(content)?)
}

/// The bundled verb list as a bank.
pub fn builtin_bank() -> Result<VerbBank, LoadError> {
    load_bank_str(BUILTIN_VERBS)
}

/// Read and parse a verb list file.
pub async fn read_verb_list(path: &Path) -> Result<VerbBank> {
    let content = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("failed to read verb list: {}", path.display()))?;

    let bank = load_bank_str(&content)
        .with_context(|| format!("failed to load verb list: {}", path.display()))?;

    tracing::info!("loaded {} verbs from {}", bank.len(), path.display());
    Ok(bank)
}

/// A warning from verb list validation.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// The present form of the offending verb (if applicable).
    pub present: Option<String>,
    /// Warning message.
    pub message: String,
}

/// Validate a verb list for common issues.
pub fn validate_verb_list(bank: &VerbBank) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    // Check for duplicate present forms
    let mut seen = HashSet::new();
    for verb in bank.verbs() {
        if !seen.insert(normalize(&verb.present)) {
            warnings.push(ValidationWarning {
                present: Some(verb.present.clone()),
                message: format!("duplicate verb: {}", verb.present),
            });
        }
    }

    // Check for repeated spellings inside one field
    for verb in bank.verbs() {
        for (field, set) in [("preterit", &verb.preterit), ("participle", &verb.participle)] {
            if has_repeated_forms(set) {
                warnings.push(ValidationWarning {
                    present: Some(verb.present.clone()),
                    message: format!("{field} lists the same spelling twice: {set}"),
                });
            }
        }
    }

    if bank.len() < DEFAULT_MAX_QUESTIONS {
        warnings.push(ValidationWarning {
            present: None,
            message: format!(
                "only {} verbs, a default round needs {DEFAULT_MAX_QUESTIONS}",
                bank.len()
            ),
        });
    }

    warnings
}

fn has_repeated_forms(set: &VariantSet) -> bool {
    let mut seen = HashSet::new();
    set.forms().iter().any(|f| !seen.insert(normalize(f)))
}
