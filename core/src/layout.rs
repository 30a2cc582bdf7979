//! Keyboard layout tables and the derived glyph-to-key index.
//!
//! A [`Layout`] is a static, hand-authored table of rows, each row a list of
//! physical keys with the glyphs they emit with and without shift. Layouts
//! are immutable once built and are shared read-only (usually behind an
//! `Arc`) between the keystroke mapper and whatever renders the keyboard.

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

/// Physical key codes that never emit a glyph.
pub const CONTROL_KEYS: [&str; 7] = [
    "Backspace",
    "Enter",
    "Tab",
    "ShiftLeft",
    "ShiftRight",
    "CapsLock",
    "Space",
];

pub const SHIFT_LEFT: &str = "ShiftLeft";
pub const SHIFT_RIGHT: &str = "ShiftRight";
pub const SPACE: &str = "Space";

/// Display symbols for keys whose code is not a useful label.
static SPECIAL_KEY_LABELS: phf::Map<&'static str, &'static str> = phf::phf_map! {
    "Backspace" => "⌫",
    "Enter" => "↵",
    "Shift" => "⇧",
    "ShiftLeft" => "⇧",
    "ShiftRight" => "⇧",
    "Space" => "Space",
    "Tab" => "⇥",
    "CapsLock" => "⇪",
    "Control" => "Ctrl",
    "Alt" => "Alt",
    "Meta" => "⌘",
    "Backquote" => "`",
    "Minus" => "-",
    "Equal" => "=",
    "BracketLeft" => "[",
    "BracketRight" => "]",
    "Backslash" => "\\",
    "Semicolon" => ";",
    "Quote" => "'",
    "Comma" => ",",
    "Period" => ".",
    "Slash" => "/",
};

fn default_width() -> f32 {
    1.0
}

/// One physical key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyLayout {
    /// Physical key code, e.g. `KeyQ`, `Digit1`, `Space`
    pub code: String,
    /// Glyph (or label, for control keys) in the unshifted state
    pub primary: String,
    /// Glyph emitted with shift held
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shift: Option<String>,
    /// Relative key width for rendering
    #[serde(default = "default_width")]
    pub width: f32,
}

impl KeyLayout {
    pub fn new(code: &str, primary: &str, shift: Option<&str>) -> Self {
        Self {
            code: code.to_string(),
            primary: primary.to_string(),
            shift: shift.map(str::to_string),
            width: default_width(),
        }
    }

    /// A control key (label only, no glyph) with a relative width.
    pub fn control(code: &str, label: &str, width: f32) -> Self {
        Self {
            code: code.to_string(),
            primary: label.to_string(),
            shift: None,
            width,
        }
    }

    /// Whether pressing this key appends a glyph to the input.
    pub fn emits_glyph(&self) -> bool {
        !is_control_key(&self.code)
    }

    /// Glyph for the given shift state, falling back to the primary glyph
    /// when the key has no shifted form.
    pub fn glyph(&self, shift_held: bool) -> &str {
        match (&self.shift, shift_held) {
            (Some(shifted), true) => shifted,
            _ => &self.primary,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct KeyboardRow {
    pub keys: Vec<KeyLayout>,
}

impl KeyboardRow {
    pub fn new(keys: Vec<KeyLayout>) -> Self {
        Self { keys }
    }
}

/// An ordered set of keyboard rows.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Layout {
    pub name: String,
    pub rows: Vec<KeyboardRow>,
}

impl Layout {
    pub fn new(name: &str, rows: Vec<KeyboardRow>) -> Self {
        Self {
            name: name.to_string(),
            rows,
        }
    }

    /// Iterate over every key in row order.
    pub fn keys(&self) -> impl Iterator<Item = &KeyLayout> {
        self.rows.iter().flat_map(|row| row.keys.iter())
    }

    /// Find a key by physical code. The first occurrence wins; some layouts
    /// repeat the shift keys on the space-bar row.
    pub fn key(&self, code: &str) -> Option<&KeyLayout> {
        self.keys().find(|key| key.code == code)
    }

    /// Load a layout from a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Load a layout from a JSON document.
    pub fn from_json_str(content: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(content)
    }

    /// Load a layout file, choosing the format by extension (`.json` or TOML).
    pub fn load<P: AsRef<std::path::Path>>(path: P) -> Result<Self, Box<dyn std::error::Error>> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let layout = match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::from_json_str(&content)?,
            _ => Self::from_toml_str(&content)?,
        };
        Ok(layout)
    }

    pub fn to_json_string(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// A physical key together with the shift state needed to produce a glyph.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct KeyRef {
    pub code: String,
    pub requires_shift: bool,
}

impl KeyRef {
    pub fn new(code: &str, requires_shift: bool) -> Self {
        Self {
            code: code.to_string(),
            requires_shift,
        }
    }

    pub fn is_shift_key(&self) -> bool {
        is_shift_key(&self.code)
    }
}

/// Reverse lookup from an emitted glyph to the key that produces it.
///
/// When two keys emit the same glyph the later one in row order wins.
#[derive(Debug, Clone, Default)]
pub struct GlyphToKeyIndex {
    map: AHashMap<String, KeyRef>,
}

impl GlyphToKeyIndex {
    pub fn get(&self, glyph: &str) -> Option<&KeyRef> {
        self.map.get(glyph)
    }

    /// Look up a single character.
    pub fn get_char(&self, ch: char) -> Option<&KeyRef> {
        let mut buf = [0u8; 4];
        self.map.get(&*ch.encode_utf8(&mut buf))
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

/// Build the glyph-to-key index for a layout.
///
/// Every glyph-emitting key contributes its primary glyph (no shift) and its
/// shifted glyph. The space bar is indexed under a literal space.
pub fn build_index(layout: &Layout) -> GlyphToKeyIndex {
    let mut map = AHashMap::new();
    for key in layout.keys() {
        if key.code == SPACE {
            map.insert(" ".to_string(), KeyRef::new(SPACE, false));
            continue;
        }
        if !key.emits_glyph() {
            continue;
        }
        if !key.primary.is_empty() {
            map.insert(key.primary.clone(), KeyRef::new(&key.code, false));
        }
        if let Some(shifted) = key.shift.as_ref().filter(|s| !s.is_empty()) {
            map.insert(shifted.clone(), KeyRef::new(&key.code, true));
        }
    }
    GlyphToKeyIndex { map }
}

pub fn is_control_key(code: &str) -> bool {
    CONTROL_KEYS.contains(&code)
}

pub fn is_shift_key(code: &str) -> bool {
    code == SHIFT_LEFT || code == SHIFT_RIGHT
}

/// Short label printed on a key cap for a physical code.
pub fn key_display_name(code: &str) -> &str {
    if let Some(digit) = code.strip_prefix("Digit") {
        return digit;
    }
    if let Some(letter) = code.strip_prefix("Key") {
        return letter;
    }
    SPECIAL_KEY_LABELS.get(code).copied().unwrap_or(code)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_layout() -> Layout {
        Layout::new(
            "sample",
            vec![
                KeyboardRow::new(vec![
                    KeyLayout::new("KeyK", "ക", Some("ഖ")),
                    KeyLayout::new("KeyE", "ാ", Some("ആ")),
                    KeyLayout::new("BracketRight", "ഞ", Some("ണ")),
                ]),
                KeyboardRow::new(vec![
                    KeyLayout::control("ShiftLeft", "Shift", 2.0),
                    KeyLayout::new("KeyC", "മ", Some("ണ")),
                    KeyLayout::control("Space", "Space", 6.0),
                ]),
            ],
        )
    }

    #[test]
    fn test_glyph_for_shift_state() {
        let key = KeyLayout::new("KeyK", "ക", Some("ഖ"));
        assert_eq!(key.glyph(false), "ക");
        assert_eq!(key.glyph(true), "ഖ");

        let no_shift = KeyLayout::new("Digit1", "1", None);
        assert_eq!(no_shift.glyph(true), "1");
    }

    #[test]
    fn test_control_keys_emit_nothing() {
        assert!(!KeyLayout::control("Backspace", "Backspace", 2.0).emits_glyph());
        assert!(!KeyLayout::control("ShiftRight", "Shift", 2.0).emits_glyph());
        assert!(KeyLayout::new("KeyQ", "ൗ", Some("ഔ")).emits_glyph());
    }

    #[test]
    fn test_index_primary_and_shift() {
        let index = build_index(&sample_layout());
        assert_eq!(index.get("ക"), Some(&KeyRef::new("KeyK", false)));
        assert_eq!(index.get("ഖ"), Some(&KeyRef::new("KeyK", true)));
        assert_eq!(index.get_char('ാ'), Some(&KeyRef::new("KeyE", false)));
    }

    #[test]
    fn test_index_last_wins() {
        let index = build_index(&sample_layout());
        // ണ appears on BracketRight and KeyC; the later key wins
        assert_eq!(index.get("ണ"), Some(&KeyRef::new("KeyC", true)));
    }

    #[test]
    fn test_index_skips_control_labels() {
        let index = build_index(&sample_layout());
        assert!(index.get("Shift").is_none());
        assert_eq!(index.get(" "), Some(&KeyRef::new("Space", false)));
    }

    #[test]
    fn test_key_lookup() {
        let layout = sample_layout();
        assert_eq!(layout.key("KeyC").map(|k| k.primary.as_str()), Some("മ"));
        assert!(layout.key("KeyZ").is_none());
        assert_eq!(layout.keys().count(), 6);
    }

    #[test]
    fn test_key_display_name() {
        assert_eq!(key_display_name("Digit7"), "7");
        assert_eq!(key_display_name("KeyQ"), "Q");
        assert_eq!(key_display_name("Backspace"), "⌫");
        assert_eq!(key_display_name("Slash"), "/");
        assert_eq!(key_display_name("F13"), "F13");
    }

    #[test]
    fn test_layout_from_toml() {
        let content = r#"
name = "tiny"

[[rows]]
keys = [
    { code = "KeyK", primary = "ക", shift = "ഖ" },
    { code = "Space", primary = "Space", width = 6.0 },
]
"#;
        let layout = Layout::from_toml_str(content).expect("parse toml layout");
        assert_eq!(layout.name, "tiny");
        assert_eq!(layout.rows[0].keys[0].width, 1.0);
        assert_eq!(layout.rows[0].keys[1].width, 6.0);
        assert_eq!(layout.rows[0].keys[0].shift.as_deref(), Some("ഖ"));
    }

    #[test]
    fn test_layout_json_round_trip() {
        let layout = sample_layout();
        let json = layout.to_json_string().expect("serialize");
        let back = Layout::from_json_str(&json).expect("parse");
        assert_eq!(back, layout);
    }
}
