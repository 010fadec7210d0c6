//! Suffix Matcher
//!
//! Region-bounded suffix search, removal, and the preceding-codepoint
//! predicate used by conditional removal rules. All offset arithmetic
//! for the step functions lives here so the per-language code never
//! re-derives it.

use crate::word::WordBuffer;

/// A candidate that matched: the table entry plus its length in codepoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuffixMatch {
    pub text: &'static str,
    pub len: usize,
}

/// Whether `chars[..end]` ends with `suffix`.
pub fn ends_with(chars: &[char], end: usize, suffix: &str) -> bool {
    let end = end.min(chars.len());
    let slen = suffix.chars().count();
    slen <= end && chars[end - slen..end].iter().copied().eq(suffix.chars())
}

/// Find the longest candidate that is a suffix of `chars[..region_end]`
/// and whose match *starts* at or after `region_start`.
///
/// The region check is on the start position of the match, not on mere
/// overlap, and the longest matching candidate wins no matter how the
/// table is ordered. Multi-ending tables ("вши" vs "в") rely on that.
pub fn longest_suffix(
    chars: &[char],
    region_start: usize,
    region_end: usize,
    candidates: &'static [&'static str],
) -> Option<SuffixMatch> {
    let region_end = region_end.min(chars.len());
    let mut best: Option<SuffixMatch> = None;
    for candidate in candidates {
        let len = candidate.chars().count();
        if len == 0 || len > region_end {
            continue;
        }
        if region_end - len < region_start {
            continue;
        }
        if let Some(found) = best {
            if found.len >= len {
                continue;
            }
        }
        if ends_with(chars, region_end, candidate) {
            best = Some(SuffixMatch { text: candidate, len });
        }
    }
    best
}

/// The codepoint immediately before a suffix of `suffix_len`
/// codepoints, provided that position lies inside the region. Out of
/// bounds or out of region is `None`, never a panic.
pub fn preceding_char(chars: &[char], region_start: usize, suffix_len: usize) -> Option<char> {
    let len = chars.len();
    if suffix_len + 1 > len {
        return None;
    }
    let idx = len - suffix_len - 1;
    if idx >= region_start {
        Some(chars[idx])
    } else {
        None
    }
}

/// Conditional removal predicate: the codepoint immediately before a
/// matched suffix of `suffix_len` codepoints must lie inside the region
/// and belong to `set`.
pub fn preceded_by_any(chars: &[char], region_start: usize, suffix_len: usize, set: &[char]) -> bool {
    matches!(preceding_char(chars, region_start, suffix_len), Some(ch) if set.contains(&ch))
}

impl WordBuffer {
    /// Longest candidate suffix whose match starts inside the region
    /// beginning at `region_start`, searched up to the end of the word.
    pub fn first_suffix_in(
        &self,
        region_start: usize,
        candidates: &'static [&'static str],
    ) -> Option<SuffixMatch> {
        longest_suffix(self.chars(), region_start, self.len(), candidates)
    }

    /// Find and remove in one call, reporting what was removed so steps
    /// can short-circuit.
    pub fn remove_suffix_in(
        &mut self,
        region_start: usize,
        candidates: &'static [&'static str],
    ) -> Option<SuffixMatch> {
        let matched = self.first_suffix_in(region_start, candidates);
        if let Some(m) = matched {
            self.remove_last(m.len);
        }
        matched
    }

    /// Whether the codepoint just before a suffix of `suffix_len` lies
    /// inside the region and belongs to `set`.
    pub fn preceded_by_any(&self, region_start: usize, suffix_len: usize, set: &[char]) -> bool {
        preceded_by_any(self.chars(), region_start, suffix_len, set)
    }

    /// The codepoint just before a suffix of `suffix_len`, if that
    /// position lies inside the region.
    pub fn preceding_char(&self, region_start: usize, suffix_len: usize) -> Option<char> {
        preceding_char(self.chars(), region_start, suffix_len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(word: &str) -> Vec<char> {
        word.chars().collect()
    }

    static GERUNDS: &[&str] = &["в", "вши", "вшись"];

    #[test]
    fn test_longest_match_wins() {
        // Declared shortest-first on purpose: order must not matter.
        let word = chars("доставшись");
        let matched = longest_suffix(&word, 0, word.len(), GERUNDS).unwrap();
        assert_eq!(matched.text, "вшись");
        assert_eq!(matched.len, 5);
    }

    #[test]
    fn test_region_check_is_on_match_start() {
        let word = chars("доставшись");
        // "вшись" starts at index 5; a region starting later rejects it
        // even though the tail of the suffix overlaps the region.
        assert!(longest_suffix(&word, 5, word.len(), GERUNDS).is_some());
        let matched = longest_suffix(&word, 6, word.len(), GERUNDS);
        assert!(matched.is_none());
    }

    #[test]
    fn test_no_match() {
        let word = chars("кот");
        assert!(longest_suffix(&word, 0, word.len(), GERUNDS).is_none());
        assert!(longest_suffix(&[], 0, 0, GERUNDS).is_none());
    }

    #[test]
    fn test_bounded_region_end() {
        static ES: &[&str] = &["es"];
        let word = chars("cantes");
        assert!(longest_suffix(&word, 0, word.len(), ES).is_some());
        // Searching the word minus its last codepoint.
        assert!(longest_suffix(&word, 0, word.len() - 1, ES).is_none());
    }

    #[test]
    fn test_preceded_by_any() {
        let word = chars("читавши");
        // "вши" is preceded by 'а' at index 3.
        assert!(preceded_by_any(&word, 0, 3, &['а', 'я']));
        assert!(!preceded_by_any(&word, 4, 3, &['а', 'я']));
        assert!(!preceded_by_any(&word, 0, 3, &['е']));
        // Suffix as long as the word: nothing precedes it.
        assert!(!preceded_by_any(&word, 0, 7, &['а']));
        assert!(!preceded_by_any(&[], 0, 1, &['а']));
    }

    #[test]
    fn test_remove_and_report() {
        let mut word = WordBuffer::new("доставшись");
        let removed = word.remove_suffix_in(0, GERUNDS).unwrap();
        assert_eq!(removed.text, "вшись");
        assert!(word.eq_str("доста"));
        assert!(word.remove_suffix_in(0, GERUNDS).is_none());
        assert!(word.eq_str("доста"));
    }
}
