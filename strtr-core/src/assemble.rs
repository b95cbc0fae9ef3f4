//! Output assembly

use crate::occurrence::Occurrence;

/// Build the output text from sorted, disjoint occurrences
///
/// Gaps between occurrences are copied verbatim and each occurrence is
/// written as its replacement. `net_delta` only sizes the buffer.
pub fn assemble(haystack: &str, occurrences: &[Occurrence<'_>], net_delta: isize) -> String {
    let capacity = haystack.len().saturating_add_signed(net_delta);
    let mut output = String::with_capacity(capacity);

    let mut copied_to = 0;
    for occurrence in occurrences {
        output.push_str(&haystack[copied_to..occurrence.start()]);
        output.push_str(occurrence.replacement());
        copied_to = occurrence.end() + 1;
    }
    output.push_str(&haystack[copied_to..]);

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_occurrences_copies_input() {
        assert_eq!(assemble("unchanged", &[], 0), "unchanged");
        assert_eq!(assemble("", &[], 0), "");
    }

    #[test]
    fn test_gaps_and_tail_copied() {
        let occurrences = [
            Occurrence::new(4, 6, "cat", "dog").unwrap(),
            Occurrence::new(8, 10, "sat", "ran").unwrap(),
        ];
        assert_eq!(
            assemble("the cat sat down", &occurrences, 0),
            "the dog ran down"
        );
    }

    #[test]
    fn test_occurrences_at_both_ends() {
        let occurrences = [
            Occurrence::new(0, 0, "a", "").unwrap(),
            Occurrence::new(2, 2, "a", "xyz").unwrap(),
        ];
        assert_eq!(assemble("aba", &occurrences, 1), "bxyz");
    }

    #[test]
    fn test_adjacent_occurrences() {
        let occurrences = [
            Occurrence::new(0, 1, "ab", "1").unwrap(),
            Occurrence::new(2, 3, "cd", "2").unwrap(),
        ];
        assert_eq!(assemble("abcd", &occurrences, -2), "12");
    }
}
