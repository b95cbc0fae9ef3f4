//! Replacement reports

use crate::occurrence::Occurrence;
use crate::ordering::OrderingMode;

/// An accepted occurrence detached from the source text
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OccurrenceRecord {
    /// Inclusive start byte offset in the source text
    pub start: usize,
    /// Inclusive end byte offset in the source text
    pub end: usize,
    /// Start character offset in the source text
    pub char_offset: usize,
    /// Matched needle
    pub needle: String,
    /// Text written in its place
    pub replacement: String,
}

impl OccurrenceRecord {
    /// Convert occurrences sorted by start offset into records
    pub(crate) fn from_sorted(haystack: &str, occurrences: &[Occurrence<'_>]) -> Vec<Self> {
        let mut records = Vec::with_capacity(occurrences.len());
        let mut byte_pos = 0;
        let mut char_pos = 0;
        for occurrence in occurrences {
            char_pos += haystack[byte_pos..occurrence.start()].chars().count();
            byte_pos = occurrence.start();
            records.push(Self {
                start: occurrence.start(),
                end: occurrence.end(),
                char_offset: char_pos,
                needle: occurrence.needle().to_string(),
                replacement: occurrence.replacement().to_string(),
            });
        }
        records
    }
}

/// Statistics about one replacement call
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Metadata {
    /// Input length in bytes
    pub input_bytes: usize,
    /// Input length in characters
    pub input_chars: usize,
    /// Output length in bytes
    pub output_bytes: usize,
    /// Non-empty needles scanned
    pub needles_scanned: usize,
    /// Occurrences replaced
    pub accepted: usize,
    /// Candidates dropped because they overlapped an accepted occurrence
    pub rejected: usize,
    /// Ordering mode used
    pub ordering: OrderingMode,
    /// Processing time in milliseconds
    pub processing_time_ms: f64,
}

/// Replaced text with the occurrences that produced it
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Output {
    /// The replaced text
    pub text: String,
    /// Accepted occurrences by start offset
    pub occurrences: Vec<OccurrenceRecord>,
    /// Call statistics
    pub metadata: Metadata,
}
