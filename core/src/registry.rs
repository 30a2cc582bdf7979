//! Registry of supported languages.
//!
//! The registry is an ordinary owned value built at startup. Language crates
//! register themselves against it and callers pass it by reference.

use std::sync::Arc;

use ahash::AHashMap;

use crate::layout::Layout;
use crate::levels::{Level, LevelSet};

/// Everything the tutor needs for one language.
#[derive(Debug, Clone)]
pub struct LanguageConfig {
    pub language: String,
    pub layout: Arc<Layout>,
    pub levels: Vec<LevelSet>,
    /// Free-practice texts, cycled by "new text"
    pub samples: Vec<String>,
}

#[derive(Debug, Clone, Default)]
pub struct LanguageRegistry {
    languages: AHashMap<String, LanguageConfig>,
    order: Vec<String>,
}

impl LanguageRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a language, replacing any earlier registration of the same name.
    pub fn register(&mut self, config: LanguageConfig) {
        let name = config.language.clone();
        if self.languages.insert(name.clone(), config).is_none() {
            self.order.push(name.clone());
        }
        tracing::debug!(language = %name, "registered language");
    }

    /// Registered language names in registration order.
    pub fn languages(&self) -> &[String] {
        &self.order
    }

    pub fn get(&self, language: &str) -> Option<&LanguageConfig> {
        self.languages.get(language)
    }

    pub fn layout_for(&self, language: &str) -> Option<Arc<Layout>> {
        self.get(language).map(|config| Arc::clone(&config.layout))
    }

    pub fn levels_for(&self, language: &str) -> &[LevelSet] {
        self.get(language)
            .map(|config| config.levels.as_slice())
            .unwrap_or(&[])
    }

    /// Every level of a language, flattened in set order.
    pub fn all_levels(&self, language: &str) -> Vec<&Level> {
        self.levels_for(language)
            .iter()
            .flat_map(|set| set.levels.iter())
            .collect()
    }

    pub fn level_by_id(&self, language: &str, id: &str) -> Option<&Level> {
        self.all_levels(language).into_iter().find(|level| level.id == id)
    }

    /// Zero-based position of a level in the flattened list.
    pub fn level_position(&self, language: &str, id: &str) -> Option<usize> {
        self.all_levels(language).iter().position(|level| level.id == id)
    }

    pub fn next_level(&self, language: &str, current_id: &str) -> Option<&Level> {
        let idx = self.level_position(language, current_id)?;
        self.all_levels(language).get(idx + 1).copied()
    }

    pub fn previous_level(&self, language: &str, current_id: &str) -> Option<&Level> {
        let prev = self.level_position(language, current_id)?.checked_sub(1)?;
        self.all_levels(language).get(prev).copied()
    }

    pub fn samples_for(&self, language: &str) -> &[String] {
        self.get(language)
            .map(|config| config.samples.as_slice())
            .unwrap_or(&[])
    }

    /// Sample after `current`, wrapping around. An unknown `current` yields
    /// the first sample.
    pub fn next_sample(&self, language: &str, current: &str) -> Option<&str> {
        let samples = self.samples_for(language);
        if samples.is_empty() {
            return None;
        }
        let next = samples
            .iter()
            .position(|sample| sample == current)
            .map(|idx| (idx + 1) % samples.len())
            .unwrap_or(0);
        Some(samples[next].as_str())
    }
}
