//! Malayalam-specific configuration that extends the base `Config` from core.
//!
//! This configuration includes:
//! - All generic options from `libindic_core::Config` (flattened via serde)
//! - The tutorial level a fresh session starts on
//!
//! # Example
//!
//! ```rust
//! use libmalayalam::MalayalamConfig;
//!
//! let config = MalayalamConfig::default();
//! let base_config = config.into_base();
//! assert_eq!(base_config.default_language, "malayalam");
//! ```

use serde::{Deserialize, Serialize};

use crate::LANGUAGE;

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct MalayalamConfig {
    /// Base configuration fields (normalization, highlight, WPM, etc.)
    #[serde(flatten)]
    pub base: libindic_core::Config,

    /// Level id opened by the tutorial when none is given
    pub default_level: String,
}

impl Default for MalayalamConfig {
    fn default() -> Self {
        let mut base = libindic_core::Config::default();
        base.default_language = LANGUAGE.to_string();

        Self {
            base,
            default_level: "mal-basic-1".to_string(),
        }
    }
}

impl MalayalamConfig {
    /// Load configuration from TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Serialize configuration to TOML string.
    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Convert this config into the base config used by core sessions
    pub fn into_base(self) -> libindic_core::Config {
        self.base
    }

    /// Get a reference to the base config
    pub fn base(&self) -> &libindic_core::Config {
        &self.base
    }

    /// Get a mutable reference to the base config
    pub fn base_mut(&mut self) -> &mut libindic_core::Config {
        &mut self.base
    }
}
