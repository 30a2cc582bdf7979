//! Grapheme segmentation for typing validation.
//!
//! Everything the tutor compares or appends is expressed in grapheme
//! clusters: the units a typist perceives as one character. Malayalam makes
//! this non-trivial because a single perceived character may be a consonant
//! plus vowel sign, a conjunct joined by a virama, or a chillu that can
//! arrive either precomposed (ൻ) or decomposed (ന + ് + ZWJ).
//!
//! Text passes through two stages:
//!
//! 1. **Normalization** rewrites decomposed chillu sequences to their
//!    precomposed codepoints and then applies NFKC.
//! 2. **Segmentation** splits the normalized text into extended grapheme
//!    clusters, or into code points when cluster rules are switched off.

use serde::{Deserialize, Serialize};
use unicode_normalization::UnicodeNormalization;
use unicode_segmentation::UnicodeSegmentation;

/// Zero-width joiner.
pub const ZWJ: char = '\u{200D}';

/// Malayalam sign virama (chandrakkala).
pub const VIRAMA: char = '\u{0D4D}';

/// The five chillaksharam: base consonant and its precomposed chillu.
///
/// Follows the m17n-db definition of the decomposed form
/// (consonant + virama + ZWJ).
pub const CHILLU_FORMS: [(char, char); 5] = [
    ('ന', 'ൻ'),
    ('ല', 'ൽ'),
    ('ര', 'ർ'),
    ('ണ', 'ൺ'),
    ('ള', 'ൾ'),
];

/// How raw text is normalized before comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NormalizationMode {
    /// Rewrite consonant + virama + ZWJ to precomposed chillu, then NFKC.
    #[default]
    ChilluThenNfkc,
    /// NFKC only. Decomposed chillu sequences are left as typed.
    NfkcOnly,
}

/// Where grapheme boundaries are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoundaryRules {
    /// Unicode extended grapheme clusters.
    #[default]
    GraphemeClusters,
    /// One unit per code point. Degraded mode for hosts without cluster rules.
    CodePoints,
}

/// Normalizer and grapheme splitter.
///
/// A `Segmenter` is a plain value: it holds no state between calls, so the
/// same text always produces the same segmentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Segmenter {
    pub normalization: NormalizationMode,
    pub boundaries: BoundaryRules,
}

impl Segmenter {
    /// Create a segmenter with explicit modes.
    pub fn new(normalization: NormalizationMode, boundaries: BoundaryRules) -> Self {
        Self {
            normalization,
            boundaries,
        }
    }

    /// Normalize `text` according to this segmenter's mode.
    ///
    /// Chillu rewriting runs first; NFKC alone leaves the ZWJ sequence intact.
    pub fn normalize(&self, text: &str) -> String {
        if text.is_empty() {
            return String::new();
        }
        match self.normalization {
            NormalizationMode::ChilluThenNfkc => compose_chillu(text).nfkc().collect(),
            NormalizationMode::NfkcOnly => text.nfkc().collect(),
        }
    }

    /// Normalize and split `text` into graphemes.
    pub fn segment(&self, text: &str) -> Vec<String> {
        let normalized = self.normalize(text);
        self.split_normalized(&normalized)
    }

    /// Number of graphemes in `text` after normalization.
    pub fn grapheme_count(&self, text: &str) -> usize {
        let normalized = self.normalize(text);
        match self.boundaries {
            BoundaryRules::GraphemeClusters => normalized.graphemes(true).count(),
            BoundaryRules::CodePoints => normalized.chars().count(),
        }
    }

    /// Split text that is already normalized.
    pub(crate) fn split_normalized(&self, normalized: &str) -> Vec<String> {
        match self.boundaries {
            BoundaryRules::GraphemeClusters => {
                normalized.graphemes(true).map(str::to_owned).collect()
            }
            BoundaryRules::CodePoints => normalized.chars().map(String::from).collect(),
        }
    }
}

/// Replace every decomposed chillu sequence with its precomposed codepoint.
pub fn compose_chillu(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();

    while let Some(ch) = chars.next() {
        let chillu = CHILLU_FORMS
            .iter()
            .find(|(base, _)| *base == ch)
            .map(|(_, chillu)| *chillu);

        if let Some(chillu) = chillu {
            let mut lookahead = chars.clone();
            if lookahead.next() == Some(VIRAMA) && lookahead.next() == Some(ZWJ) {
                out.push(chillu);
                chars = lookahead;
                continue;
            }
        }
        out.push(ch);
    }

    out
}

/// Normalize with the default segmenter.
pub fn normalize(text: &str) -> String {
    Segmenter::default().normalize(text)
}

/// Segment with the default segmenter.
pub fn segment(text: &str) -> Vec<String> {
    Segmenter::default().segment(text)
}

/// Grapheme count with the default segmenter.
pub fn grapheme_count(text: &str) -> usize {
    Segmenter::default().grapheme_count(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        assert_eq!(normalize(""), "");
        assert!(segment("").is_empty());
        assert_eq!(grapheme_count(""), 0);
    }

    #[test]
    fn test_chillu_rewrite() {
        assert_eq!(compose_chillu("ന്\u{200D}"), "ൻ");
        assert_eq!(compose_chillu("ല്\u{200D}"), "ൽ");
        assert_eq!(compose_chillu("ര്\u{200D}"), "ർ");
        assert_eq!(compose_chillu("ണ്\u{200D}"), "ൺ");
        assert_eq!(compose_chillu("ള്\u{200D}"), "ൾ");
    }

    #[test]
    fn test_chillu_rewrite_inside_word() {
        // അവൻ written with a decomposed final chillu
        assert_eq!(normalize("അവന്\u{200D}"), "അവൻ");
        assert_eq!(normalize("അവന്\u{200D} വന്നു"), "അവൻ വന്നു");
    }

    #[test]
    fn test_virama_without_zwj_untouched() {
        assert_eq!(compose_chillu("ന്"), "ന്");
        assert_eq!(compose_chillu("ന്ന"), "ന്ന");
        // ZWJ after a non-chillu consonant stays
        assert_eq!(compose_chillu("ക്\u{200D}"), "ക്\u{200D}");
    }

    #[test]
    fn test_nfkc_only_keeps_decomposed_chillu() {
        let seg = Segmenter::new(NormalizationMode::NfkcOnly, BoundaryRules::GraphemeClusters);
        assert_eq!(seg.normalize("ന്\u{200D}"), "ന്\u{200D}");
    }

    #[test]
    fn test_nfkc_composes_two_part_vowel_sign() {
        // െ + ാ composes to ൊ
        assert_eq!(normalize("ക\u{0D46}\u{0D3E}"), "ക\u{0D4A}");
    }

    #[test]
    fn test_normalize_idempotent() {
        for s in ["", "മല", "അവന്\u{200D}", "ക\u{0D46}\u{0D3E}", "നമസ്കാരം", "abc ൻ"] {
            let once = normalize(s);
            assert_eq!(normalize(&once), once, "not idempotent for {:?}", s);
        }
    }

    #[test]
    fn test_segment_consonant_with_vowel_sign() {
        assert_eq!(segment("മല"), vec!["മ", "ല"]);
        assert_eq!(segment("കാ"), vec!["കാ"]);
        assert_eq!(segment("അ ആ ഇ"), vec!["അ", " ", "ആ", " ", "ഇ"]);
    }

    #[test]
    fn test_decomposed_chillu_counts_as_one() {
        assert_eq!(grapheme_count("ന്\u{200D}"), 1);
        assert_eq!(grapheme_count("ന്\u{200D}"), grapheme_count("ൻ"));
        assert_eq!(segment("ന്\u{200D}"), segment("ൻ"));
    }

    #[test]
    fn test_code_point_fallback() {
        let seg = Segmenter::new(NormalizationMode::ChilluThenNfkc, BoundaryRules::CodePoints);
        assert_eq!(seg.segment("കാ"), vec!["ക", "\u{0D3E}"]);
        assert_eq!(seg.grapheme_count("കാ"), 2);
        assert_eq!(seg.grapheme_count("ന്\u{200D}"), 1);
    }

    #[test]
    fn test_segment_is_restartable() {
        let text = "കേരളം";
        assert_eq!(segment(text), segment(text));
    }
}
