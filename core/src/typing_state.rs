//! The per-keystroke state machine.
//!
//! [`TypingState::apply`] is a pure function from (state, key event) to a
//! new state or a rejection. It owns the invariant that the input is always
//! a prefix of the target; nothing else mutates the input.

use std::fmt;

use crate::grapheme::Segmenter;
use crate::key_event::{KeyAction, KeyEvent};
use crate::mapper::KeystrokeMapper;

/// Why a keystroke left the input unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejected {
    /// The candidate is not a prefix of the target
    PrefixMismatch { glyph: String },
    /// The candidate has more graphemes than the target
    TooLong { glyph: String },
    /// The key does not edit the input
    Ignored,
}

impl fmt::Display for Rejected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejected::PrefixMismatch { glyph } => write!(f, "'{}' does not match the target", glyph),
            Rejected::TooLong { glyph } => write!(f, "'{}' would run past the target", glyph),
            Rejected::Ignored => f.write_str("key ignored"),
        }
    }
}

impl std::error::Error for Rejected {}

/// Target text and what has been typed of it so far.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypingState {
    segmenter: Segmenter,
    target: String,
    target_graphemes: Vec<String>,
    input: String,
}

impl TypingState {
    /// Start typing `target` with an empty input.
    pub fn new(target: &str) -> Self {
        Self::with_segmenter(target, Segmenter::default())
    }

    pub fn with_segmenter(target: &str, segmenter: Segmenter) -> Self {
        let target = segmenter.normalize(target);
        let target_graphemes = segmenter.split_normalized(&target);
        Self {
            segmenter,
            target,
            target_graphemes,
            input: String::new(),
        }
    }

    pub fn segmenter(&self) -> Segmenter {
        self.segmenter
    }

    /// Normalized target text.
    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn target_graphemes(&self) -> &[String] {
        &self.target_graphemes
    }

    /// Normalized input typed so far.
    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn input_graphemes(&self) -> Vec<String> {
        self.segmenter.split_normalized(&self.input)
    }

    pub fn is_empty(&self) -> bool {
        self.input.is_empty()
    }

    /// All target graphemes typed.
    pub fn is_complete(&self) -> bool {
        self.input_graphemes().len() == self.target_graphemes.len()
    }

    /// Same target, empty input.
    pub fn cleared(&self) -> Self {
        Self {
            input: String::new(),
            ..self.clone()
        }
    }

    /// Apply a key event, returning the next state.
    pub fn apply(&self, event: &KeyEvent, mapper: &KeystrokeMapper) -> Result<Self, Rejected> {
        match event.action(mapper) {
            KeyAction::Backspace => Ok(self.backspace()),
            KeyAction::Space => self.append(" "),
            KeyAction::Glyph(glyph) => self.append(&glyph),
            KeyAction::Ignored => Err(Rejected::Ignored),
        }
    }

    /// Tentatively append `glyph`; accept only if the result is still a
    /// grapheme-bounded prefix of the target.
    pub fn append(&self, glyph: &str) -> Result<Self, Rejected> {
        let mut candidate = String::with_capacity(self.input.len() + glyph.len());
        candidate.push_str(&self.input);
        candidate.push_str(glyph);

        if self.segmenter.grapheme_count(&candidate) > self.target_graphemes.len() {
            return Err(Rejected::TooLong {
                glyph: glyph.to_string(),
            });
        }
        if !self.segmenter.is_prefix_match(&candidate, &self.target) {
            return Err(Rejected::PrefixMismatch {
                glyph: glyph.to_string(),
            });
        }

        Ok(Self {
            input: self.segmenter.normalize(&candidate),
            ..self.clone()
        })
    }

    /// Remove one trailing grapheme. Always succeeds; a no-op on empty input.
    pub fn backspace(&self) -> Self {
        if self.input.is_empty() {
            return self.clone();
        }
        Self {
            input: self.segmenter.drop_last_grapheme(&self.input),
            ..self.clone()
        }
    }
}
