//! Keystroke mapping: physical key + shift state to glyph, and next-key
//! suggestions for the on-screen keyboard.

use std::sync::Arc;

use crate::layout::{build_index, GlyphToKeyIndex, KeyRef, Layout, SHIFT_LEFT, SHIFT_RIGHT};

/// Glyph a physical key emits in the given shift state.
///
/// Returns `None` for unknown codes and for control keys (shift, tab, ...).
pub fn resolve_output<'a>(layout: &'a Layout, code: &str, shift_held: bool) -> Option<&'a str> {
    let key = layout.key(code)?;
    if !key.emits_glyph() {
        return None;
    }
    let glyph = key.glyph(shift_held);
    if glyph.is_empty() {
        None
    } else {
        Some(glyph)
    }
}

/// Keys to highlight for the next expected input.
///
/// Two cases, checked in order:
///
/// 1. The last typed grapheme is a strict prefix of the target grapheme at
///    the same position (a multi-keystroke character is half typed). The
///    first character of the missing remainder is looked up.
/// 2. Otherwise the first character of the next target grapheme is looked up.
///
/// A key that needs shift is returned together with both shift keys.
/// Returns `None` when the target is fully typed or the needed character has
/// no key on this layout.
pub fn suggest_next_keys(
    index: &GlyphToKeyIndex,
    target: &[String],
    input: &[String],
) -> Option<Vec<KeyRef>> {
    if target.is_empty() {
        return None;
    }

    if let Some(last) = input.len().checked_sub(1) {
        if let (Some(typed), Some(expected)) = (input.get(last), target.get(last)) {
            if typed != expected && !typed.is_empty() {
                if let Some(pending) = expected.strip_prefix(typed.as_str()) {
                    let completing = pending.chars().next().and_then(|ch| index.get_char(ch));
                    if let Some(key) = completing {
                        return Some(with_shift_keys(key));
                    }
                }
            }
        }
    }

    let next = target.get(input.len())?;
    let first = next.chars().next()?;
    let key = index.get_char(first)?;
    Some(with_shift_keys(key))
}

fn with_shift_keys(key: &KeyRef) -> Vec<KeyRef> {
    if key.requires_shift && !key.is_shift_key() {
        vec![
            key.clone(),
            KeyRef::new(SHIFT_LEFT, true),
            KeyRef::new(SHIFT_RIGHT, true),
        ]
    } else {
        vec![key.clone()]
    }
}

/// A layout paired with its glyph index.
///
/// The index is computed once at construction and never rebuilt.
#[derive(Debug, Clone)]
pub struct KeystrokeMapper {
    layout: Arc<Layout>,
    index: GlyphToKeyIndex,
}

impl KeystrokeMapper {
    pub fn new(layout: Arc<Layout>) -> Self {
        let index = build_index(&layout);
        tracing::debug!(layout = %layout.name, glyphs = index.len(), "built glyph index");
        Self { layout, index }
    }

    pub fn layout(&self) -> &Arc<Layout> {
        &self.layout
    }

    pub fn index(&self) -> &GlyphToKeyIndex {
        &self.index
    }

    pub fn resolve(&self, code: &str, shift_held: bool) -> Option<&str> {
        resolve_output(&self.layout, code, shift_held)
    }

    pub fn suggest(&self, target: &[String], input: &[String]) -> Option<Vec<KeyRef>> {
        suggest_next_keys(&self.index, target, input)
    }
}
