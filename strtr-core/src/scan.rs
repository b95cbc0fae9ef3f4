//! Occurrence scanning and overlap resolution
//!
//! Needles are scanned in priority order. Every position where a needle
//! occurs becomes a candidate, including positions inside an earlier match
//! of the same needle. A candidate is accepted only if its span is disjoint
//! from every span accepted before it, so the first needle (and within a
//! needle, the leftmost position) to reach a span keeps it.

use crate::error::Result;
use crate::occurrence::Occurrence;
use crate::ordering::Needle;
use std::collections::BTreeMap;

/// Accepted, pairwise disjoint occurrences of one replacement call
#[derive(Debug, Clone, Default)]
pub struct OccurrenceSet<'t> {
    occurrences: Vec<Occurrence<'t>>,
    /// Accepted spans keyed by start offset, mapping to inclusive end
    spans: BTreeMap<usize, usize>,
    net_delta: isize,
    rejected: usize,
}

impl<'t> OccurrenceSet<'t> {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Accept the occurrence unless it overlaps an accepted one
    ///
    /// Returns whether the occurrence was accepted.
    pub fn try_accept(&mut self, occurrence: Occurrence<'t>) -> bool {
        if self.overlaps_accepted(&occurrence) {
            self.rejected += 1;
            log::trace!("rejected overlapping occurrence {occurrence}");
            return false;
        }

        log::trace!("accepted occurrence {occurrence}");
        self.spans.insert(occurrence.start(), occurrence.end());
        self.net_delta += occurrence.len_delta();
        self.occurrences.push(occurrence);
        true
    }

    /// Whether the span of `occurrence` shares an offset with an accepted span
    pub fn overlaps_accepted(&self, occurrence: &Occurrence<'_>) -> bool {
        // Accepted spans are disjoint, so the one with the greatest start not
        // past the candidate's end also reaches furthest right.
        self.spans
            .range(..=occurrence.end())
            .next_back()
            .is_some_and(|(_, &end)| end >= occurrence.start())
    }

    /// Order occurrences by start offset
    pub fn sort_by_start(&mut self) {
        self.occurrences.sort_unstable_by_key(Occurrence::start);
    }

    /// Accepted occurrences
    ///
    /// In acceptance order until [`sort_by_start`](Self::sort_by_start) is
    /// called.
    pub fn occurrences(&self) -> &[Occurrence<'t>] {
        &self.occurrences
    }

    /// Number of accepted occurrences
    pub fn len(&self) -> usize {
        self.occurrences.len()
    }

    /// Whether nothing was accepted
    pub fn is_empty(&self) -> bool {
        self.occurrences.is_empty()
    }

    /// Number of candidates rejected because they overlapped
    pub fn rejected(&self) -> usize {
        self.rejected
    }

    /// Sum of `replacement.len() - needle.len()` over accepted occurrences
    pub fn net_delta(&self) -> isize {
        self.net_delta
    }
}

/// Find and resolve the occurrences of `needles` in `haystack`
///
/// `needles` must already be in priority order and free of empty needles.
pub fn scan<'t>(haystack: &str, needles: &[Needle<'t>]) -> Result<OccurrenceSet<'t>> {
    let mut set = OccurrenceSet::new();

    for &needle in needles {
        let mut from = 0;
        while let Some(pos) = haystack.get(from..).and_then(|rest| rest.find(needle.text)) {
            let start = from + pos;
            set.try_accept(Occurrence::at(start, needle)?);

            // Resume one character past the match start so overlapping
            // matches of the same needle are still considered.
            from = start
                + haystack[start..]
                    .chars()
                    .next()
                    .map_or(1, char::len_utf8);
        }
    }

    log::debug!(
        "scanned {} needles: {} accepted, {} rejected",
        needles.len(),
        set.len(),
        set.rejected()
    );

    Ok(set)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn needle<'a>(text: &'a str, replacement: &'a str) -> Needle<'a> {
        Needle { text, replacement }
    }

    fn starts(set: &OccurrenceSet<'_>) -> Vec<usize> {
        set.occurrences().iter().map(Occurrence::start).collect()
    }

    #[test]
    fn test_self_overlapping_needle() {
        let set = scan("aaa", &[needle("aa", "b")]).unwrap();
        assert_eq!(starts(&set), vec![0]);
        assert_eq!(set.rejected(), 1);
    }

    #[test]
    fn test_repeated_disjoint_matches() {
        let set = scan("aaaa", &[needle("aa", "b")]).unwrap();
        assert_eq!(starts(&set), vec![0, 2]);
        assert_eq!(set.rejected(), 1);
    }

    #[test]
    fn test_first_needle_claims_span() {
        let set = scan("abc", &[needle("ab", "1"), needle("bc", "2")]).unwrap();
        assert_eq!(set.len(), 1);
        assert_eq!(set.occurrences()[0].needle(), "ab");

        let set = scan("abc", &[needle("bc", "2"), needle("ab", "1")]).unwrap();
        assert_eq!(set.len(), 1);
        assert_eq!(set.occurrences()[0].needle(), "bc");
    }

    #[test]
    fn test_touching_spans_both_accepted() {
        let set = scan("abab", &[needle("ab", "x"), needle("ba", "y")]).unwrap();
        assert_eq!(starts(&set), vec![0, 2]);
        assert_eq!(set.rejected(), 1);
    }

    #[test]
    fn test_net_delta() {
        let set = scan("cat cat", &[needle("cat", "tiger")]).unwrap();
        assert_eq!(set.net_delta(), 4);

        let set = scan("cat", &[needle("cat", "")]).unwrap();
        assert_eq!(set.net_delta(), -3);
    }

    #[test]
    fn test_sort_by_start() {
        let mut set = scan("b a", &[needle("a", "1"), needle("b", "2")]).unwrap();
        assert_eq!(starts(&set), vec![2, 0]);

        set.sort_by_start();
        assert_eq!(starts(&set), vec![0, 2]);
    }

    #[test]
    fn test_multibyte_characters() {
        let set = scan("ééé", &[needle("éé", "e")]).unwrap();
        assert_eq!(starts(&set), vec![0]);
        assert_eq!(set.occurrences()[0].end(), 3);
        assert_eq!(set.rejected(), 1);
    }

    #[test]
    fn test_no_needles() {
        let set = scan("anything", &[]).unwrap();
        assert!(set.is_empty());
        assert_eq!(set.net_delta(), 0);
    }

    #[test]
    fn test_overlaps_accepted_checks_neighbours() {
        let mut set = OccurrenceSet::new();
        assert!(set.try_accept(Occurrence::new(0, 2, "abc", "").unwrap()));
        assert!(set.try_accept(Occurrence::new(10, 12, "xyz", "").unwrap()));

        assert!(set.overlaps_accepted(&Occurrence::new(2, 5, "n", "").unwrap()));
        assert!(set.overlaps_accepted(&Occurrence::new(9, 10, "n", "").unwrap()));
        assert!(set.overlaps_accepted(&Occurrence::new(0, 20, "n", "").unwrap()));
        assert!(!set.overlaps_accepted(&Occurrence::new(3, 9, "n", "").unwrap()));
        assert!(!set.overlaps_accepted(&Occurrence::new(13, 13, "n", "").unwrap()));
    }
}
