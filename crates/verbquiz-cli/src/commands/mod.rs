pub mod init;
pub mod list;
pub mod play;
pub mod validate;

use std::path::Path;

use anyhow::Result;

use verbquiz_core::{parser, VerbBank};

/// Load the verb list at `path`, or the bundled one.
pub async fn load_bank(path: Option<&Path>) -> Result<VerbBank> {
    match path {
        Some(path) => parser::read_verb_list(path).await,
        None => Ok(parser::builtin_bank()?),
    }
}
