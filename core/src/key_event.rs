//! Platform-neutral key events.
//!
//! A host translates its native keyboard events into [`KeyEvent`] values:
//! a physical key code in the W3C `KeyboardEvent.code` naming (`KeyK`,
//! `Digit1`, `Space`, ...) plus modifier state.

use std::fmt;
use std::str::FromStr;

use crate::layout::SPACE;
use crate::mapper::KeystrokeMapper;

/// Keys that move a caret in an ordinary text field. The tutor ignores them.
pub const NAVIGATION_KEYS: [&str; 6] = ["ArrowLeft", "ArrowRight", "ArrowUp", "ArrowDown", "Home", "End"];

/// A single key press.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyEvent {
    pub code: String,
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

/// What a key press asks the typing state to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyAction {
    /// Remove one trailing grapheme
    Backspace,
    /// Append a literal space
    Space,
    /// Append the glyph the layout emits for this key
    Glyph(String),
    /// Nothing to do (navigation, modifiers, unmapped keys, shortcuts)
    Ignored,
}

impl KeyEvent {
    pub fn new(code: &str) -> Self {
        Self {
            code: code.to_string(),
            shift: false,
            ctrl: false,
            alt: false,
            meta: false,
        }
    }

    pub fn shifted(code: &str) -> Self {
        Self::new(code).with_shift(true)
    }

    pub fn with_shift(mut self, shift: bool) -> Self {
        self.shift = shift;
        self
    }

    pub fn with_ctrl(mut self, ctrl: bool) -> Self {
        self.ctrl = ctrl;
        self
    }

    pub fn with_alt(mut self, alt: bool) -> Self {
        self.alt = alt;
        self
    }

    pub fn with_meta(mut self, meta: bool) -> Self {
        self.meta = meta;
        self
    }

    /// True if a shortcut modifier (ctrl, alt or meta) is held.
    pub fn has_command_modifier(&self) -> bool {
        self.ctrl || self.alt || self.meta
    }

    /// Classify this event against a layout.
    pub fn action(&self, mapper: &KeystrokeMapper) -> KeyAction {
        match self.code.as_str() {
            "Backspace" => KeyAction::Backspace,
            SPACE => KeyAction::Space,
            "Tab" => KeyAction::Ignored,
            code if NAVIGATION_KEYS.contains(&code) => KeyAction::Ignored,
            _ if self.has_command_modifier() => KeyAction::Ignored,
            code => match mapper.resolve(code, self.shift) {
                Some(glyph) => KeyAction::Glyph(glyph.to_string()),
                None => KeyAction::Ignored,
            },
        }
    }
}

impl fmt::Display for KeyEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.ctrl {
            f.write_str("C-")?;
        }
        if self.alt {
            f.write_str("A-")?;
        }
        if self.meta {
            f.write_str("M-")?;
        }
        if self.shift {
            f.write_str("S-")?;
        }
        f.write_str(&self.code)
    }
}

/// Parse error for the textual key notation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseKeyEventError(String);

impl fmt::Display for ParseKeyEventError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid key token '{}'", self.0)
    }
}

impl std::error::Error for ParseKeyEventError {}

impl FromStr for KeyEvent {
    type Err = ParseKeyEventError;

    /// Parse `[C-][A-][M-][S-]Code`, e.g. `KeyK`, `S-KeyD`, `C-KeyA`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut rest = s.trim();
        let mut event = KeyEvent::new("");
        loop {
            if let Some(tail) = rest.strip_prefix("S-") {
                event.shift = true;
                rest = tail;
            } else if let Some(tail) = rest.strip_prefix("C-") {
                event.ctrl = true;
                rest = tail;
            } else if let Some(tail) = rest.strip_prefix("A-") {
                event.alt = true;
                rest = tail;
            } else if let Some(tail) = rest.strip_prefix("M-") {
                event.meta = true;
                rest = tail;
            } else {
                break;
            }
        }
        if rest.is_empty() || !rest.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(ParseKeyEventError(s.to_string()));
        }
        event.code = rest.to_string();
        Ok(event)
    }
}
