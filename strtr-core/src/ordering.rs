//! Needle priority ordering
//!
//! Needles are matched one after another and the first needle to claim a
//! span keeps it, so the order decided here is what resolves conflicts
//! between overlapping needles.

use crate::error::{ReplaceError, Result};
use crate::table::ReplacementTable;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Priority order in which needles are matched
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum OrderingMode {
    /// Longest needle first, equal lengths in ascending lexicographic order
    #[default]
    LengthDescendingThenLexicographic,
    /// Needles in the order the table holds them
    InsertionOrder,
}

impl OrderingMode {
    /// All ordering modes
    pub const ALL: [OrderingMode; 2] = [
        OrderingMode::LengthDescendingThenLexicographic,
        OrderingMode::InsertionOrder,
    ];

    /// Short name used on the command line and in config files
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderingMode::LengthDescendingThenLexicographic => "longest",
            OrderingMode::InsertionOrder => "insertion",
        }
    }

    /// One-line description
    pub fn description(&self) -> &'static str {
        match self {
            OrderingMode::LengthDescendingThenLexicographic => {
                "longest needles first, ties in lexicographic order"
            }
            OrderingMode::InsertionOrder => "needles in table order",
        }
    }
}

impl fmt::Display for OrderingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderingMode {
    type Err = ReplaceError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "longest" | "longest-first" | "length-descending-then-lexicographic" => {
                Ok(OrderingMode::LengthDescendingThenLexicographic)
            }
            "insertion" | "insertion-order" => Ok(OrderingMode::InsertionOrder),
            other => Err(ReplaceError::InvalidArgument {
                reason: format!("unknown ordering mode '{other}'"),
            }),
        }
    }
}

/// A needle ready for scanning, paired with its replacement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Needle<'t> {
    /// Text to search for, never empty
    pub text: &'t str,
    /// Text written in place of the needle
    pub replacement: &'t str,
}

/// Longest-first comparator
///
/// Orders by character count descending, then by ascending lexicographic
/// order of the needle text.
pub fn compare_needles(a: &str, b: &str) -> Ordering {
    b.chars()
        .count()
        .cmp(&a.chars().count())
        .then_with(|| a.cmp(b))
}

/// Produce the scan order for a table
///
/// Empty needles are dropped in every mode. Fails with
/// [`ReplaceError::ConfigurationError`] if any remaining needle has no
/// replacement, before anything is scanned.
pub fn order_needles(table: &ReplacementTable, mode: OrderingMode) -> Result<Vec<Needle<'_>>> {
    let mut needles = Vec::with_capacity(table.len());
    for entry in table {
        if entry.needle.is_empty() {
            continue;
        }
        let replacement =
            entry
                .replacement
                .as_deref()
                .ok_or_else(|| ReplaceError::ConfigurationError {
                    needle: entry.needle.clone(),
                })?;
        needles.push(Needle {
            text: &entry.needle,
            replacement,
        });
    }

    if mode == OrderingMode::LengthDescendingThenLexicographic {
        needles.sort_by(|a, b| compare_needles(a.text, b.text));
    }

    Ok(needles)
}
