//! Malayalam InScript keyboard layout.
//!
//! The table follows the standard InScript arrangement on a US physical
//! keyboard: vowel signs on the left hand, consonants on the right, the
//! independent vowel behind shift on the same key as its sign.

use std::sync::Arc;

use libindic_core::{KeyLayout, KeyboardRow, Layout};
use once_cell::sync::Lazy;

pub const LAYOUT_NAME: &str = "Malayalam InScript";

static INSCRIPT: Lazy<Arc<Layout>> = Lazy::new(|| Arc::new(build_inscript()));

/// Shared InScript layout.
pub fn inscript_layout() -> Arc<Layout> {
    Arc::clone(&INSCRIPT)
}

fn key(code: &str, primary: &str, shift: &str) -> KeyLayout {
    KeyLayout::new(code, primary, Some(shift))
}

fn build_inscript() -> Layout {
    let number_row = KeyboardRow::new(vec![
        key("Backquote", "`", "~"),
        key("Digit1", "1", "!"),
        key("Digit2", "2", "@"),
        key("Digit3", "3", "#"),
        key("Digit4", "4", "$"),
        key("Digit5", "5", "%"),
        key("Digit6", "6", "^"),
        key("Digit7", "7", "&"),
        key("Digit8", "8", "*"),
        key("Digit9", "9", "("),
        key("Digit0", "0", ")"),
        key("Minus", "-", "_"),
        key("Equal", "=", "+"),
        KeyLayout::control("Backspace", "Backspace", 2.0),
    ]);

    let top_row = KeyboardRow::new(vec![
        KeyLayout::control("Tab", "Tab", 1.5),
        key("KeyQ", "ൗ", "ഔ"),
        key("KeyW", "ൈ", "ഐ"),
        key("KeyE", "ാ", "ആ"),
        key("KeyR", "ീ", "ഈ"),
        key("KeyT", "ൂ", "ഊ"),
        key("KeyY", "ബ", "ഭ"),
        key("KeyU", "ഹ", "ങ"),
        key("KeyI", "ഗ", "ഘ"),
        key("KeyO", "ദ", "ധ"),
        key("KeyP", "ജ", "ഝ"),
        key("BracketLeft", "ഡ", "ഢ"),
        key("BracketRight", "ഞ", "ണ"),
        key("Backslash", "ർ", "റ്"),
    ]);

    let home_row = KeyboardRow::new(vec![
        KeyLayout::control("CapsLock", "Caps", 1.8),
        key("KeyA", "ൊ", "ഓ"),
        key("KeyS", "േ", "ഏ"),
        key("KeyD", "്", "അ"),
        key("KeyF", "ി", "ഇ"),
        key("KeyG", "ു", "ഉ"),
        key("KeyH", "പ", "ഫ"),
        key("KeyJ", "ര", "റ"),
        key("KeyK", "ക", "ഖ"),
        key("KeyL", "ത", "ഥ"),
        key("Semicolon", "ച", "ഛ"),
        key("Quote", "ട", "ഠ"),
        KeyLayout::control("Enter", "Enter", 1.8),
    ]);

    let bottom_row = KeyboardRow::new(vec![
        KeyLayout::control("ShiftLeft", "Shift", 2.0),
        key("KeyZ", "െ", "എ"),
        key("KeyX", "ം", "ൺ"),
        key("KeyC", "മ", "ണ"),
        key("KeyV", "ന", "ൻ"),
        key("KeyB", "വ", "ഴ"),
        key("KeyN", "ല", "ള"),
        key("KeyM", "സ", "ശ"),
        key("Comma", ",", "ഷ"),
        key("Period", ".", "।"),
        key("Slash", "യ", "ൽ"),
        KeyLayout::control("ShiftRight", "Shift", 2.0),
    ]);

    let space_row = KeyboardRow::new(vec![
        KeyLayout::control("ShiftLeft", "Shift", 2.0),
        KeyLayout::control("Space", "Space", 6.0),
        KeyLayout::control("ShiftRight", "Shift", 2.0),
    ]);

    Layout::new(
        LAYOUT_NAME,
        vec![number_row, top_row, home_row, bottom_row, space_row],
    )
}
