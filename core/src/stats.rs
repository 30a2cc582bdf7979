//! Accuracy and speed figures derived from the typing state.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Characters counted as one word for WPM.
pub const DEFAULT_CHARS_PER_WORD: f64 = 5.0;

/// Snapshot of a session's figures.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Stats {
    /// Words per minute
    pub wpm: f64,
    /// Percentage in `[0, 100]`
    pub accuracy: f64,
    /// Time since the first accepted keystroke
    pub elapsed: Duration,
}

impl Stats {
    /// `m:ss` rendering of the elapsed time.
    pub fn elapsed_display(&self) -> String {
        format_elapsed(self.elapsed)
    }
}

/// Percentage of typed graphemes that equal the target grapheme at the same
/// position. 100 when nothing has been typed.
pub fn accuracy(input: &[String], target: &[String]) -> f64 {
    if input.is_empty() {
        return 100.0;
    }
    let correct = input
        .iter()
        .zip(target.iter())
        .filter(|(typed, expected)| typed == expected)
        .count();
    correct as f64 / input.len() as f64 * 100.0
}

/// `(graphemes / chars_per_word) / minutes`, or 0 before any time elapsed.
pub fn words_per_minute(grapheme_count: usize, elapsed: Duration, chars_per_word: f64) -> f64 {
    let minutes = elapsed.as_secs_f64() / 60.0;
    if grapheme_count == 0 || minutes <= 0.0 || chars_per_word <= 0.0 {
        return 0.0;
    }
    (grapheme_count as f64 / chars_per_word) / minutes
}

/// Format a duration as `m:ss`.
pub fn format_elapsed(elapsed: Duration) -> String {
    let secs = elapsed.as_secs();
    format!("{}:{:02}", secs / 60, secs % 60)
}
