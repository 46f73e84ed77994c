//! Quiz configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::round::DEFAULT_MAX_QUESTIONS;

/// Top-level verbquiz configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizConfig {
    /// Questions per round.
    #[serde(default = "default_max_questions")]
    pub max_questions: usize,
    /// Verb list to play with; the bundled list when unset.
    #[serde(default)]
    pub verbs_path: Option<PathBuf>,
    /// Fixed seed for the draw order.
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_max_questions() -> usize {
    DEFAULT_MAX_QUESTIONS
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            max_questions: default_max_questions(),
            verbs_path: None,
            seed: None,
        }
    }
}

/// Load config from an explicit path, or search the default locations.
///
/// Search order:
/// 1. `verbquiz.toml` in the current directory
/// 2. `~/.config/verbquiz/config.toml`
///
/// Environment variable overrides: `VERBQUIZ_MAX_QUESTIONS`, `VERBQUIZ_VERBS`,
/// `VERBQUIZ_SEED`.
pub fn load_config_from(path: Option<&Path>) -> Result<QuizConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("verbquiz.toml");
        if local.exists() {
            Some(local)
        } else {
            dirs_path()
                .map(|home| home.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let config = match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            tracing::debug!("using config {}", path.display());
            parse_config_str(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?
        }
        None => QuizConfig::default(),
    };

    apply_env_overrides(config, |name| std::env::var(name).ok())
}

/// Parse a TOML config string.
pub fn parse_config_str(content: &str) -> Result<QuizConfig> {
    Ok(toml::from_str(content)?)
}

fn apply_env_overrides(
    mut config: QuizConfig,
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<QuizConfig> {
    if let Some(value) = lookup("VERBQUIZ_MAX_QUESTIONS") {
        config.max_questions = value
            .trim()
            .parse()
            .with_context(|| format!("VERBQUIZ_MAX_QUESTIONS is not a number: {value}"))?;
    }
    if let Some(value) = lookup("VERBQUIZ_VERBS") {
        config.verbs_path = Some(PathBuf::from(value));
    }
    if let Some(value) = lookup("VERBQUIZ_SEED") {
        config.seed = Some(
            value
                .trim()
                .parse()
                .with_context(|| format!("VERBQUIZ_SEED is not a number: {value}"))?,
        );
    }
    Ok(config)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("verbquiz"))
}
