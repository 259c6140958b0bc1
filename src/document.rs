//! Output document assembly and serialization.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::tokens::TokenRecord;

/// The serialized result: a bare record for file input, or a mapping from
/// discovered file path to record for directory input.
///
/// The directory mapping is keyed by path and order-insensitive; a sorted map
/// keeps the written document reproducible across runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResultDocument {
    File(TokenRecord),
    Directory(BTreeMap<String, TokenRecord>),
}

/// Write the document as pretty-printed JSON with a trailing newline.
///
/// Creates parent directories if they don't exist.
pub fn write_document(path: &Path, document: &ResultDocument) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    let content = serde_json::to_string_pretty(document).context("Failed to serialize tokens")?;

    fs::write(path, format!("{}\n", content))
        .with_context(|| format!("Failed to write file: {}", path.display()))?;

    Ok(())
}
