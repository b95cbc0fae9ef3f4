//! Configured replacement entry point

use crate::assemble::assemble;
use crate::config::Config;
use crate::error::Result;
use crate::ordering::{order_needles, OrderingMode};
use crate::report::{Metadata, OccurrenceRecord, Output};
use crate::scan::{scan, OccurrenceSet};
use crate::table::ReplacementTable;
use std::time::Instant;

/// Applies replacement tables to text
///
/// A `Replacer` holds only its configuration; every call builds and drops
/// its own occurrence set, so one instance can be shared across threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct Replacer {
    config: Config,
}

impl Replacer {
    /// Create a replacer with longest-first ordering
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a replacer with a custom configuration
    pub fn with_config(config: Config) -> Self {
        Self { config }
    }

    /// Create a replacer with the given ordering mode
    pub fn with_ordering(ordering: OrderingMode) -> Self {
        Self::with_config(Config::builder().ordering(ordering).build())
    }

    /// Get the current configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Resolve the sorted, disjoint occurrences of `table` in `haystack`
    pub fn plan<'t>(
        &self,
        haystack: &str,
        table: &'t ReplacementTable,
    ) -> Result<OccurrenceSet<'t>> {
        let needles = order_needles(table, self.config.ordering)?;
        let mut set = scan(haystack, &needles)?;
        set.sort_by_start();
        Ok(set)
    }

    /// Replace every accepted occurrence of the table's needles
    pub fn replace(&self, haystack: &str, table: &ReplacementTable) -> Result<String> {
        if table.is_empty() {
            return Ok(haystack.to_string());
        }

        let set = self.plan(haystack, table)?;
        Ok(assemble(haystack, set.occurrences(), set.net_delta()))
    }

    /// Replace and report the occurrences and statistics of the call
    pub fn replace_with_report(&self, haystack: &str, table: &ReplacementTable) -> Result<Output> {
        let start = Instant::now();

        let needles = order_needles(table, self.config.ordering)?;
        let mut set = scan(haystack, &needles)?;
        set.sort_by_start();
        let text = assemble(haystack, set.occurrences(), set.net_delta());

        let metadata = Metadata {
            input_bytes: haystack.len(),
            input_chars: haystack.chars().count(),
            output_bytes: text.len(),
            needles_scanned: needles.len(),
            accepted: set.len(),
            rejected: set.rejected(),
            ordering: self.config.ordering,
            processing_time_ms: start.elapsed().as_secs_f64() * 1000.0,
        };

        Ok(Output {
            occurrences: OccurrenceRecord::from_sorted(haystack, set.occurrences()),
            text,
            metadata,
        })
    }
}

// Convenience functions

/// Replace using a table with longest-first ordering
pub fn replace_using_map(haystack: &str, table: &ReplacementTable) -> Result<String> {
    Replacer::new().replace(haystack, table)
}

/// Replace using a table with an explicit ordering mode
pub fn replace_using_map_with_mode(
    haystack: &str,
    table: &ReplacementTable,
    mode: OrderingMode,
) -> Result<String> {
    Replacer::with_ordering(mode).replace(haystack, table)
}

/// Replace characters of `from` with the characters of `to` at the same position
///
/// Fails with [`ReplaceError::InvalidArgument`](crate::ReplaceError::InvalidArgument)
/// when `from` and `to` differ in character count.
pub fn replace_using_chars(haystack: &str, from: &str, to: &str) -> Result<String> {
    let table = ReplacementTable::from_chars(from, to)?;
    replace_using_map(haystack, &table)
}
