//! Accepted needle matches

use crate::error::{ReplaceError, Result};
use crate::ordering::Needle;
use std::fmt;

/// A needle match at a concrete byte span of the source text
///
/// Both offsets are inclusive: a needle of `n` bytes found at `p` spans
/// `[p, p + n - 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Occurrence<'t> {
    start: usize,
    end: usize,
    needle: &'t str,
    replacement: &'t str,
}

impl<'t> Occurrence<'t> {
    /// Create an occurrence, rejecting spans with `start > end`
    pub fn new(start: usize, end: usize, needle: &'t str, replacement: &'t str) -> Result<Self> {
        if start > end {
            return Err(ReplaceError::InvariantViolation { start, end });
        }
        Ok(Self {
            start,
            end,
            needle,
            replacement,
        })
    }

    /// Occurrence of a non-empty needle found at byte offset `start`
    pub fn at(start: usize, needle: Needle<'t>) -> Result<Self> {
        let end = (start + needle.text.len())
            .checked_sub(1)
            .ok_or(ReplaceError::InvariantViolation { start, end: 0 })?;
        Self::new(start, end, needle.text, needle.replacement)
    }

    /// Inclusive start byte offset
    pub fn start(&self) -> usize {
        self.start
    }

    /// Inclusive end byte offset
    pub fn end(&self) -> usize {
        self.end
    }

    /// Matched needle text
    pub fn needle(&self) -> &'t str {
        self.needle
    }

    /// Replacement text
    pub fn replacement(&self) -> &'t str {
        self.replacement
    }

    /// Whether the two spans share at least one offset
    ///
    /// Touching spans such as `[0, 4]` and `[5, 7]` do not overlap.
    pub fn overlaps(&self, other: &Occurrence<'_>) -> bool {
        let lies_before = self.end < other.start;
        let lies_after = self.start > other.end;
        !(lies_before || lies_after)
    }

    /// Change in output length caused by this replacement
    pub fn len_delta(&self) -> isize {
        self.replacement.len() as isize - self.needle.len() as isize
    }
}

impl fmt::Display for Occurrence<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{{},{},{},{}}}",
            self.start, self.end, self.needle, self.replacement
        )
    }
}
