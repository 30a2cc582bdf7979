//! Tutorial levels.
//!
//! Levels are language-agnostic: a language crate supplies its own level
//! sets with target texts in that language.

use serde::{Deserialize, Serialize};

use crate::stats::Stats;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LevelType {
    BasicKeys,
    Words,
    Sentences,
    Paragraphs,
    Speed,
    Accuracy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Level {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub level_type: LevelType,
    pub difficulty: Difficulty,
    /// Order within the same difficulty
    pub order: u32,
    pub target_text: String,
    /// Minimum accuracy (0-100) to pass
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_accuracy: Option<f64>,
    /// Minimum WPM to pass
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_wpm: Option<f64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub hints: Vec<String>,
}

impl Level {
    /// Whether finished-session figures meet this level's thresholds.
    ///
    /// A missing or zero threshold is not enforced.
    pub fn is_passed_by(&self, stats: &Stats) -> bool {
        let accuracy_ok = match self.min_accuracy {
            Some(min) if min > 0.0 => stats.accuracy >= min,
            _ => true,
        };
        let wpm_ok = match self.min_wpm {
            Some(min) if min > 0.0 => stats.wpm >= min,
            _ => true,
        };
        accuracy_ok && wpm_ok
    }
}

/// Levels of one difficulty for one language.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelSet {
    pub language: String,
    pub difficulty: Difficulty,
    pub levels: Vec<Level>,
}
