//! Property-based tests
//!
//! Tables and texts are drawn from a tiny alphabet so that needles collide
//! and overlap often.

use proptest::prelude::*;
use strtr_core::{
    compare_needles, replace_using_chars, replace_using_map, replace_using_map_with_mode,
    OrderingMode, ReplacementTable, Replacer,
};

fn pairs_strategy() -> impl Strategy<Value = Vec<(String, String)>> {
    prop::collection::vec(("[abc]{1,3}", "[xyz]{0,3}"), 0..6)
}

fn mode_strategy() -> impl Strategy<Value = OrderingMode> {
    prop_oneof![
        Just(OrderingMode::LengthDescendingThenLexicographic),
        Just(OrderingMode::InsertionOrder),
    ]
}

/// Straightforward rendition with a linear overlap check over accepted spans
fn reference_replace(haystack: &str, table: &ReplacementTable, mode: OrderingMode) -> String {
    let mut needles: Vec<(&str, &str)> = table
        .iter()
        .filter(|e| !e.needle.is_empty())
        .map(|e| (e.needle.as_str(), e.replacement.as_deref().unwrap()))
        .collect();
    if mode == OrderingMode::LengthDescendingThenLexicographic {
        needles.sort_by(|a, b| compare_needles(a.0, b.0));
    }

    let mut accepted: Vec<(usize, usize, &str)> = Vec::new();
    for (needle, replacement) in needles {
        for start in 0..haystack.len() {
            if !haystack[start..].starts_with(needle) {
                continue;
            }
            let end = start + needle.len() - 1;
            if accepted.iter().all(|&(s, e, _)| end < s || start > e) {
                accepted.push((start, end, replacement));
            }
        }
    }
    accepted.sort_by_key(|&(s, _, _)| s);

    let mut out = String::new();
    let mut pos = 0;
    for (s, e, r) in accepted {
        out.push_str(&haystack[pos..s]);
        out.push_str(r);
        pos = e + 1;
    }
    out.push_str(&haystack[pos..]);
    out
}

proptest! {
    #[test]
    fn accepted_occurrences_never_overlap(
        pairs in pairs_strategy(),
        text in "[abc]{0,40}",
        mode in mode_strategy(),
    ) {
        let table: ReplacementTable = pairs.into_iter().collect();
        let set = Replacer::with_ordering(mode).plan(&text, &table).unwrap();
        let occurrences = set.occurrences();

        for window in occurrences.windows(2) {
            prop_assert!(window[0].end() < window[1].start());
        }
        for (i, a) in occurrences.iter().enumerate() {
            prop_assert_eq!(&text[a.start()..=a.end()], a.needle());
            for b in &occurrences[i + 1..] {
                prop_assert!(!a.overlaps(b));
            }
        }
    }

    #[test]
    fn matches_linear_reference(
        pairs in pairs_strategy(),
        text in "[abc]{0,40}",
        mode in mode_strategy(),
    ) {
        let table: ReplacementTable = pairs.into_iter().collect();
        let expected = reference_replace(&text, &table, mode);
        prop_assert_eq!(replace_using_map_with_mode(&text, &table, mode).unwrap(), expected);
    }

    #[test]
    fn empty_needle_never_changes_output(
        pairs in pairs_strategy(),
        text in "[abc]{0,40}",
        filler in "[xyz]{0,3}",
    ) {
        let without: ReplacementTable = pairs.iter().cloned().collect();
        let mut with = without.clone();
        with.insert("", filler);

        prop_assert_eq!(
            replace_using_map(&text, &with).unwrap(),
            replace_using_map(&text, &without).unwrap()
        );
    }

    #[test]
    fn empty_table_is_identity(text in "\\PC{0,100}") {
        prop_assert_eq!(replace_using_map(&text, &ReplacementTable::new()).unwrap(), text);
    }

    #[test]
    fn char_map_preserves_char_count(text in "[a-e]{0,40}", to in "[v-z]{5}") {
        let replaced = replace_using_chars(&text, "abcde", &to).unwrap();
        prop_assert_eq!(replaced.chars().count(), text.chars().count());
    }
}
