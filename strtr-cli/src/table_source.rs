//! Replacement table sources for the CLI

use crate::error::CliError;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use strtr_core::ReplacementTable;

/// Source of replacement entries
#[derive(Debug, Clone)]
pub enum TableSource {
    /// Table file in TOML or JSON
    File(PathBuf),
    /// `NEEDLE=REPLACEMENT` pairs from the command line
    Pairs(Vec<(String, String)>),
    /// Character-for-character map
    CharMap {
        /// Characters to replace
        from: String,
        /// Characters written in their place
        to: String,
    },
}

/// On-disk table layout
#[derive(Debug, Deserialize)]
struct TableFile {
    #[serde(default)]
    replacements: ReplacementTable,
}

impl TableSource {
    /// Get the display name for the table source
    pub fn display_name(&self) -> String {
        match self {
            TableSource::File(path) => format!("File: {}", path.display()),
            TableSource::Pairs(pairs) => format!("Command line: {} pairs", pairs.len()),
            TableSource::CharMap { from, to } => format!("Character map: '{from}' -> '{to}'"),
        }
    }

    /// Add this source's entries to `table`, overriding existing needles
    pub fn apply(&self, table: &mut ReplacementTable) -> Result<()> {
        match self {
            TableSource::File(path) => table.extend(load_table_file(path)?.iter().cloned()),
            TableSource::Pairs(pairs) => table.extend(pairs.iter().cloned()),
            TableSource::CharMap { from, to } => {
                let chars = ReplacementTable::from_chars(from, to)
                    .map_err(|e| CliError::ConfigError(e.to_string()))?;
                table.extend(chars.iter().cloned());
            }
        }
        Ok(())
    }
}

/// Build one table from sources applied in order
pub fn build_table(sources: &[TableSource]) -> Result<ReplacementTable> {
    if sources.is_empty() {
        return Err(CliError::MissingTable.into());
    }

    let mut table = ReplacementTable::new();
    for source in sources {
        log::debug!("Loading replacements from {}", source.display_name());
        source.apply(&mut table)?;
    }
    log::info!("Replacement table has {} entries", table.len());
    Ok(table)
}

/// Load a table file; `.json` files are read as JSON, anything else as TOML
pub fn load_table_file(path: &Path) -> Result<ReplacementTable> {
    if !path.is_file() {
        return Err(CliError::FileNotFound(path.display().to_string()).into());
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read table file: {}", path.display()))?;

    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    let file: TableFile = if is_json {
        serde_json::from_str(&content)
            .with_context(|| format!("Invalid JSON table: {}", path.display()))?
    } else {
        toml::from_str(&content)
            .with_context(|| format!("Invalid TOML table: {}", path.display()))?
    };

    Ok(file.replacements)
}

/// Parse a `NEEDLE=REPLACEMENT` argument, splitting at the first `=`
pub fn parse_pair(arg: &str) -> Result<(String, String), String> {
    arg.split_once('=')
        .map(|(needle, replacement)| (needle.to_string(), replacement.to_string()))
        .ok_or_else(|| format!("expected NEEDLE=REPLACEMENT, got '{arg}'"))
}
