//! Multi-needle, non-overlapping string substitution
//!
//! Given a text and a table of needles and replacements, every occurrence
//! of every needle is replaced exactly once. When occurrences overlap, the
//! needle scanned first keeps the span; by default longer needles are
//! scanned first, so `"ab"` wins over `"a"` at the same position.
//!
//! A call runs four stages:
//! - **Ordering**: decide the priority of needles ([`ordering`])
//! - **Scan**: find candidates and accept the non-overlapping ones ([`scan`])
//! - **Sort**: order accepted occurrences by position
//! - **Assembly**: copy unmatched text and write replacements ([`assemble`])
//!
//! # Example
//!
//! ```rust
//! use strtr_core::{replace_using_map, ReplacementTable};
//!
//! let table: ReplacementTable = [("a", "1"), ("ab", "2")].into_iter().collect();
//! assert_eq!(replace_using_map("xaby", &table).unwrap(), "x2y");
//! ```

#![warn(missing_docs)]

pub mod assemble;
pub mod config;
pub mod error;
pub mod occurrence;
pub mod ordering;
pub mod replacer;
pub mod report;
pub mod scan;
pub mod table;

// Re-export key types
pub use config::{Config, ConfigBuilder};
pub use error::{ReplaceError, Result};
pub use occurrence::Occurrence;
pub use ordering::{compare_needles, OrderingMode};
pub use replacer::{
    replace_using_chars, replace_using_map, replace_using_map_with_mode, Replacer,
};
pub use report::{Metadata, OccurrenceRecord, Output};
pub use scan::OccurrenceSet;
pub use table::{ReplacementTable, TableEntry};
