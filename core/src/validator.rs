//! Prefix validation at grapheme granularity.
//!
//! The input buffer must always stay a prefix of the target. The prefix
//! check itself works on the normalized character stream rather than on
//! whole graphemes, so an interim state such as a bare consonant typed
//! before its vowel sign is still accepted. The grapheme-count bound in
//! [`Segmenter::accepts`] keeps the buffer from running past the target.

use crate::grapheme::Segmenter;

impl Segmenter {
    /// True if the normalized `target` starts with the normalized `candidate`.
    pub fn is_prefix_match(&self, candidate: &str, target: &str) -> bool {
        let candidate = self.normalize(candidate);
        let target = self.normalize(target);

        if candidate.len() > target.len() {
            return false;
        }
        target.starts_with(&candidate)
    }

    /// Remove the final grapheme of `text`. Empty text stays empty.
    pub fn drop_last_grapheme(&self, text: &str) -> String {
        let mut graphemes = self.segment(text);
        graphemes.pop();
        graphemes.concat()
    }

    /// Validated-append predicate: `candidate` may replace the input buffer
    /// only if it has no more graphemes than `target` and is a prefix of it.
    pub fn accepts(&self, candidate: &str, target: &str) -> bool {
        self.grapheme_count(candidate) <= self.grapheme_count(target)
            && self.is_prefix_match(candidate, target)
    }
}

/// Prefix check with the default segmenter.
pub fn is_prefix_match(candidate: &str, target: &str) -> bool {
    Segmenter::default().is_prefix_match(candidate, target)
}

/// Backspace with the default segmenter.
pub fn drop_last_grapheme(text: &str) -> String {
    Segmenter::default().drop_last_grapheme(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grapheme::{segment, BoundaryRules, NormalizationMode};

    #[test]
    fn test_prefix_match_basic() {
        assert!(is_prefix_match("", "മല"));
        assert!(is_prefix_match("മ", "മല"));
        assert!(is_prefix_match("മല", "മല"));
        assert!(!is_prefix_match("മത", "മല"));
    }

    #[test]
    fn test_prefix_match_mid_grapheme() {
        // Consonant typed before its vowel sign
        assert!(is_prefix_match("ക", "കാ"));
        assert!(is_prefix_match("സ്", "സ്കൂൾ"));
    }

    #[test]
    fn test_prefix_match_longer_candidate() {
        assert!(!is_prefix_match("മലകൾ", "മല"));
        assert!(!is_prefix_match("a", ""));
    }

    #[test]
    fn test_prefix_match_decomposed_chillu() {
        assert!(is_prefix_match("അവന്\u{200D}", "അവൻ വന്നു"));
        assert!(is_prefix_match("അവൻ", "അവന്\u{200D} വന്നു"));
    }

    #[test]
    fn test_prefix_match_nfkc_only_mode() {
        let seg = Segmenter::new(NormalizationMode::NfkcOnly, BoundaryRules::GraphemeClusters);
        assert!(!seg.is_prefix_match("അവന്\u{200D}", "അവൻ"));
    }

    #[test]
    fn test_drop_last_grapheme() {
        assert_eq!(drop_last_grapheme("മല"), "മ");
        assert_eq!(drop_last_grapheme("മ"), "");
        assert_eq!(drop_last_grapheme(""), "");
        // Removes the whole cluster, not just the vowel sign
        assert_eq!(drop_last_grapheme("മകാ"), "മ");
    }

    #[test]
    fn test_drop_last_grapheme_chillu() {
        assert_eq!(drop_last_grapheme("അവന്\u{200D}"), "അവ");
    }

    #[test]
    fn test_drop_last_reduces_count_by_one() {
        for s in ["മല", "അ ആ ഇ", "കാക്ക", "നമസ്കാരം"] {
            let before = segment(s).len();
            let after = segment(&drop_last_grapheme(s)).len();
            assert_eq!(after, before - 1, "for {:?}", s);
        }
    }

    #[test]
    fn test_accepts_respects_grapheme_bound() {
        let seg = Segmenter::default();
        assert!(seg.accepts("മ", "മല"));
        assert!(seg.accepts("മല", "മല"));
        assert!(!seg.accepts("മലക", "മല"));
        assert!(!seg.accepts("മത", "മല"));
    }
}
