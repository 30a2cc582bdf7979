//! Property-based tests for normalization and the typing state machine.
//!
//! Targets are drawn from real Malayalam words; keystrokes are drawn from the
//! glyphs an InScript keyboard can emit. Invariants are checked after every
//! step.

use proptest::prelude::*;

use libindic_core::grapheme::{normalize, segment};
use libindic_core::stats::accuracy;
use libindic_core::{is_prefix_match, TypingState};

const WORDS: &[&str] = &[
    "മല",
    "കല",
    "പല",
    "നമസ്കാരം",
    "സ്വാഗതം",
    "മലയാളം",
    "ഒരു",
    "ഭാഷയാണ്.",
    "കേരളം",
    "തെക്കുപടിഞ്ഞാറൻ",
    "പുസ്തകം",
    "ആശയങ്ങൾ",
];

const GLYPHS: &[&str] = &[
    "അ", "ആ", "ഇ", "ക", "ത", "മ", "ല", "ന", "ര", "സ", "യ", "ാ", "ി", "ു", "െ", "േ", "്",
    "ം", "ൻ", "ൾ", "ർ", " ", ".", "\u{200D}",
];

const CODE_POINTS: &[char] = &[
    'ന', 'ല', 'ര', 'ണ', 'ള', 'ക', 'മ', '\u{0D4D}', '\u{200D}', 'െ', 'േ', 'ാ', 'ൗ', 'ി', 'ം',
    'ൻ', ' ', 'a',
];

fn arb_target() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(WORDS.to_vec()), 1..5)
        .prop_map(|words| words.join(" "))
}

fn arb_keystrokes() -> impl Strategy<Value = Vec<Option<&'static str>>> {
    // None is a backspace
    prop::collection::vec(
        prop_oneof![
            8 => prop::sample::select(GLYPHS.to_vec()).prop_map(Some),
            1 => Just(None),
        ],
        0..60,
    )
}

fn arb_text() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(CODE_POINTS.to_vec()), 0..24)
        .prop_map(|chars| chars.into_iter().collect())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn normalize_is_idempotent(text in arb_text()) {
        let once = normalize(&text);
        prop_assert_eq!(normalize(&once), once);
    }

    #[test]
    fn target_prefixes_always_match(target in arb_target()) {
        let graphemes = segment(&target);
        for k in 0..=graphemes.len() {
            let prefix: String = graphemes[..k].concat();
            prop_assert!(is_prefix_match(&prefix, &target), "prefix {:?} of {:?}", prefix, target);
        }
    }

    #[test]
    fn input_stays_bounded_prefix(target in arb_target(), keys in arb_keystrokes()) {
        let mut state = TypingState::new(&target);
        for key in keys {
            state = match key {
                Some(glyph) => state.append(glyph).unwrap_or(state),
                None => state.backspace(),
            };
            prop_assert!(state.input_graphemes().len() <= state.target_graphemes().len());
            prop_assert!(is_prefix_match(state.input(), state.target()));
        }
    }

    #[test]
    fn backspace_removes_one_grapheme(target in arb_target(), typed in 1usize..40) {
        let mut state = TypingState::new(&target);
        let graphemes = state.target_graphemes().to_vec();
        let typed = typed.min(graphemes.len());
        for grapheme in &graphemes[..typed] {
            state = state.append(grapheme).expect("target grapheme accepted");
        }
        let before = state.input_graphemes().len();
        prop_assert_eq!(before, typed);
        prop_assert_eq!(state.backspace().input_graphemes().len(), before - 1);
    }

    #[test]
    fn typing_every_grapheme_completes(target in arb_target()) {
        let mut state = TypingState::new(&target);
        let graphemes = state.target_graphemes().to_vec();
        for grapheme in &graphemes {
            prop_assert!(!state.is_complete());
            state = state.append(grapheme).expect("target grapheme accepted");
        }
        prop_assert!(state.is_complete());
        prop_assert_eq!(state.input(), state.target());
    }

    #[test]
    fn accuracy_is_a_percentage(target in arb_target(), keys in arb_keystrokes()) {
        let mut state = TypingState::new(&target);
        for glyph in keys.into_iter().flatten() {
            state = state.append(glyph).unwrap_or(state);
        }
        let value = accuracy(&state.input_graphemes(), state.target_graphemes());
        prop_assert!((0.0..=100.0).contains(&value));
    }
}
