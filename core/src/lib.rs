//! libindic-core
//!
//! Grapheme segmentation, keystroke validation and layout mapping shared by
//! language-specific typing tutor crates (libmalayalam).
//!
//! Everything here is script-agnostic apart from the chillu rewrite in
//! [`grapheme`]; a language crate supplies a [`Layout`], its tutorial
//! [`LevelSet`]s and practice samples, and registers them in a
//! [`LanguageRegistry`].
//!
//! Public API:
//! - `Segmenter` - Normalization and grapheme segmentation
//! - `TypingState` - Pure keystroke state machine over a target text
//! - `KeystrokeMapper` - Physical key to glyph resolution and next-key hints
//! - `PracticeSession` - Timer, stats, highlight and completion around a `TypingState`
//! - `LanguageRegistry` - Layouts, levels and samples per language
//! - `Config` - Configuration shared by all language crates
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub mod grapheme;
pub use grapheme::{BoundaryRules, NormalizationMode, Segmenter};

pub mod validator;
pub use validator::{drop_last_grapheme, is_prefix_match};

pub mod layout;
pub use layout::{GlyphToKeyIndex, KeyLayout, KeyRef, KeyboardRow, Layout};

pub mod mapper;
pub use mapper::KeystrokeMapper;

pub mod key_event;
pub use key_event::{KeyAction, KeyEvent};

pub mod typing_state;
pub use typing_state::{Rejected, TypingState};

pub mod stats;
pub use stats::Stats;

pub mod highlight;
pub use highlight::{HighlightSlot, KeyHighlight};

pub mod progress;
pub use progress::{GraphemeStatus, Progress};

pub mod levels;
pub use levels::{Difficulty, Level, LevelSet, LevelType};

pub mod registry;
pub use registry::{LanguageConfig, LanguageRegistry};

pub mod session;
pub use session::{KeyOutcome, PracticeSession};

/// Generic configuration for typing tutor core functionality.
///
/// Language-specific options (default tutorial level, etc.) belong in the
/// language crate's own config, which flattens this one.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Normalization applied to target and input before comparison
    pub normalization: NormalizationMode,

    /// Grapheme boundary rules
    pub boundaries: BoundaryRules,

    /// How long a pressed key stays highlighted, in milliseconds
    /// Default: 100
    pub highlight_ms: u64,

    /// Graphemes counted as one word when computing WPM
    /// Default: 5.0
    pub chars_per_word: f64,

    /// Language used when none is given
    pub default_language: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            normalization: NormalizationMode::default(),
            boundaries: BoundaryRules::default(),
            highlight_ms: highlight::DEFAULT_HIGHLIGHT_TTL.as_millis() as u64,
            chars_per_word: stats::DEFAULT_CHARS_PER_WORD,
            default_language: "malayalam".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load_toml<P: AsRef<std::path::Path>>(
        path: P,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to a TOML file.
    pub fn save_toml<P: AsRef<std::path::Path>>(
        &self,
        path: P,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Load configuration from TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Serialize configuration to TOML string.
    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Segmenter built from the normalization and boundary settings.
    pub fn segmenter(&self) -> Segmenter {
        Segmenter::new(self.normalization, self.boundaries)
    }

    pub fn highlight_ttl(&self) -> Duration {
        Duration::from_millis(self.highlight_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = Config::default();
        assert_eq!(config.normalization, NormalizationMode::ChilluThenNfkc);
        assert_eq!(config.boundaries, BoundaryRules::GraphemeClusters);
        assert_eq!(config.highlight_ttl(), Duration::from_millis(100));
        assert_eq!(config.chars_per_word, 5.0);
    }

    #[test]
    fn test_config_partial_toml() {
        let config = Config::from_toml_str("normalization = \"nfkc_only\"\nhighlight_ms = 250\n")
            .expect("parse config");
        assert_eq!(config.normalization, NormalizationMode::NfkcOnly);
        assert_eq!(config.highlight_ms, 250);
        assert_eq!(config.boundaries, BoundaryRules::GraphemeClusters);
        assert_eq!(config.default_language, "malayalam");
    }

    #[test]
    fn test_config_toml_roundtrip() {
        let mut config = Config::default();
        config.boundaries = BoundaryRules::CodePoints;
        let text = config.to_toml_string().expect("serialize");
        assert_eq!(Config::from_toml_str(&text).expect("parse"), config);
    }
}
