//! Pressed-key highlight as an expiring token.
//!
//! Instead of scheduling a callback to clear the highlight, the token stores
//! its expiry and every read compares against the caller's clock.

use std::time::{Duration, Instant};

pub const DEFAULT_HIGHLIGHT_TTL: Duration = Duration::from_millis(100);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyHighlight {
    code: String,
    expires_at: Instant,
}

impl KeyHighlight {
    pub fn new(code: &str, now: Instant, ttl: Duration) -> Self {
        Self {
            code: code.to_string(),
            expires_at: now + ttl,
        }
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn is_active(&self, now: Instant) -> bool {
        now < self.expires_at
    }
}

/// Holds at most one highlight. Triggering again replaces it and restarts
/// the delay.
#[derive(Debug, Clone, Default)]
pub struct HighlightSlot {
    current: Option<KeyHighlight>,
}

impl HighlightSlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn trigger(&mut self, code: &str, now: Instant, ttl: Duration) {
        self.current = Some(KeyHighlight::new(code, now, ttl));
    }

    /// Code of the highlighted key, if it has not expired.
    pub fn active(&self, now: Instant) -> Option<&str> {
        self.current
            .as_ref()
            .filter(|h| h.is_active(now))
            .map(KeyHighlight::code)
    }

    pub fn clear(&mut self) {
        self.current = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_highlight_expires() {
        let t0 = Instant::now();
        let mut slot = HighlightSlot::new();
        slot.trigger("KeyK", t0, DEFAULT_HIGHLIGHT_TTL);

        assert_eq!(slot.active(t0), Some("KeyK"));
        assert_eq!(slot.active(t0 + Duration::from_millis(99)), Some("KeyK"));
        assert_eq!(slot.active(t0 + Duration::from_millis(100)), None);
    }

    #[test]
    fn test_retrigger_restarts_delay() {
        let t0 = Instant::now();
        let mut slot = HighlightSlot::new();
        slot.trigger("KeyK", t0, DEFAULT_HIGHLIGHT_TTL);
        slot.trigger("KeyK", t0 + Duration::from_millis(80), DEFAULT_HIGHLIGHT_TTL);
        assert_eq!(slot.active(t0 + Duration::from_millis(150)), Some("KeyK"));
    }

    #[test]
    fn test_clear() {
        let t0 = Instant::now();
        let mut slot = HighlightSlot::new();
        assert!(slot.active(t0).is_none());

        slot.trigger("KeyE", t0, DEFAULT_HIGHLIGHT_TTL);
        slot.clear();
        assert!(slot.active(t0).is_none());
    }
}
