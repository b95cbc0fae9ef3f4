//! Ordered needle to replacement table

use crate::error::{ReplaceError, Result};
use std::collections::HashMap;

/// A single needle and the text that replaces it
///
/// `replacement` is `None` when the needle was declared without a value.
/// Using such a table for replacement fails with
/// [`ReplaceError::ConfigurationError`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TableEntry {
    /// Text to search for
    pub needle: String,
    /// Text written in place of the needle
    pub replacement: Option<String>,
}

impl TableEntry {
    /// Create an entry with a replacement value
    pub fn new(needle: impl Into<String>, replacement: impl Into<String>) -> Self {
        Self {
            needle: needle.into(),
            replacement: Some(replacement.into()),
        }
    }

    /// Create an entry whose replacement is absent
    pub fn unmapped(needle: impl Into<String>) -> Self {
        Self {
            needle: needle.into(),
            replacement: None,
        }
    }
}

/// Ordered mapping from needle to replacement
///
/// Needles are unique. Inserting a needle that is already present overwrites
/// its replacement but keeps the position of the first insertion, so
/// [`OrderingMode::InsertionOrder`](crate::OrderingMode::InsertionOrder)
/// sees needles in the order they were first added.
///
/// Empty needles are stored but never matched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "Vec<TableEntry>", into = "Vec<TableEntry>")
)]
pub struct ReplacementTable {
    entries: Vec<TableEntry>,
    index: HashMap<String, usize>,
}

impl ReplacementTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a one-character to one-character table
    ///
    /// `from` and `to` must contain the same number of characters. When a
    /// character repeats in `from`, its last pairing wins.
    pub fn from_chars(from: &str, to: &str) -> Result<Self> {
        let from_len = from.chars().count();
        let to_len = to.chars().count();
        if from_len != to_len {
            return Err(ReplaceError::InvalidArgument {
                reason: format!(
                    "from and to should have the same number of characters ({from_len} != {to_len})"
                ),
            });
        }

        let mut table = Self::new();
        for (f, t) in from.chars().zip(to.chars()) {
            table.insert(f.to_string(), t.to_string());
        }
        Ok(table)
    }

    /// Insert a needle with its replacement
    pub fn insert(&mut self, needle: impl Into<String>, replacement: impl Into<String>) {
        self.insert_entry(TableEntry::new(needle, replacement));
    }

    /// Declare a needle without a replacement value
    pub fn insert_unmapped(&mut self, needle: impl Into<String>) {
        self.insert_entry(TableEntry::unmapped(needle));
    }

    /// Insert an entry, overwriting the replacement of an existing needle
    pub fn insert_entry(&mut self, entry: TableEntry) {
        match self.index.get(&entry.needle) {
            Some(&pos) => self.entries[pos].replacement = entry.replacement,
            None => {
                self.index.insert(entry.needle.clone(), self.entries.len());
                self.entries.push(entry);
            }
        }
    }

    /// Look up the entry for a needle
    pub fn get(&self, needle: &str) -> Option<&TableEntry> {
        self.index.get(needle).map(|&pos| &self.entries[pos])
    }

    /// Whether the table holds the given needle
    pub fn contains_needle(&self, needle: &str) -> bool {
        self.index.contains_key(needle)
    }

    /// Number of entries, empty needles included
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, TableEntry> {
        self.entries.iter()
    }
}

impl From<Vec<TableEntry>> for ReplacementTable {
    fn from(entries: Vec<TableEntry>) -> Self {
        let mut table = Self::new();
        table.extend(entries);
        table
    }
}

impl From<ReplacementTable> for Vec<TableEntry> {
    fn from(table: ReplacementTable) -> Self {
        table.entries
    }
}

impl Extend<TableEntry> for ReplacementTable {
    fn extend<I: IntoIterator<Item = TableEntry>>(&mut self, iter: I) {
        for entry in iter {
            self.insert_entry(entry);
        }
    }
}

impl<K: Into<String>, V: Into<String>> Extend<(K, V)> for ReplacementTable {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (needle, replacement) in iter {
            self.insert(needle, replacement);
        }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ReplacementTable {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut table = Self::new();
        table.extend(iter);
        table
    }
}

impl<'a> IntoIterator for &'a ReplacementTable {
    type Item = &'a TableEntry;
    type IntoIter = std::slice::Iter<'a, TableEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
