//! Practice and tutorial sessions.
//!
//! A `PracticeSession` wraps the pure [`TypingState`] machine with what a
//! front-end needs around it: the elapsed-time clock, completion detection,
//! the pressed-key highlight and next-key suggestions. Every time-dependent
//! call takes the caller's `now` so sessions can be driven by a real clock
//! or by tests.

use std::time::{Duration, Instant};

use tracing::{debug, info};

use crate::highlight::HighlightSlot;
use crate::key_event::KeyEvent;
use crate::layout::KeyRef;
use crate::levels::Level;
use crate::mapper::KeystrokeMapper;
use crate::progress::{progress, Progress};
use crate::stats::{accuracy, words_per_minute, Stats};
use crate::typing_state::{Rejected, TypingState};
use crate::Config;

/// Result of feeding one key event to a session.
#[derive(Debug, Clone, PartialEq)]
pub enum KeyOutcome {
    /// Input changed (or backspace on empty input)
    Accepted,
    /// Input unchanged
    Rejected(Rejected),
    /// The last target grapheme was typed; figures are final
    Completed(Stats),
}

pub struct PracticeSession {
    mapper: KeystrokeMapper,
    config: Config,
    state: TypingState,
    level: Option<Level>,
    started_at: Option<Instant>,
    final_elapsed: Option<Duration>,
    highlight: HighlightSlot,
}

impl PracticeSession {
    /// Free-practice session on `target`.
    pub fn new(mapper: KeystrokeMapper, config: Config, target: &str) -> Self {
        let state = TypingState::with_segmenter(target, config.segmenter());
        Self {
            mapper,
            config,
            state,
            level: None,
            started_at: None,
            final_elapsed: None,
            highlight: HighlightSlot::new(),
        }
    }

    /// Tutorial session on a level's target text.
    pub fn for_level(mapper: KeystrokeMapper, config: Config, level: Level) -> Self {
        let mut session = Self::new(mapper, config, &level.target_text);
        session.level = Some(level);
        session
    }

    pub fn state(&self) -> &TypingState {
        &self.state
    }

    pub fn mapper(&self) -> &KeystrokeMapper {
        &self.mapper
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn level(&self) -> Option<&Level> {
        self.level.as_ref()
    }

    pub fn target(&self) -> &str {
        self.state.target()
    }

    pub fn input(&self) -> &str {
        self.state.input()
    }

    pub fn is_started(&self) -> bool {
        self.started_at.is_some()
    }

    pub fn is_complete(&self) -> bool {
        self.final_elapsed.is_some()
    }

    /// Feed one key event.
    pub fn handle_key(&mut self, event: &KeyEvent, now: Instant) -> KeyOutcome {
        self.highlight
            .trigger(&event.code, now, self.config.highlight_ttl());

        let next = match self.state.apply(event, &self.mapper) {
            Ok(next) => next,
            Err(rejected) => {
                debug!(key = %event, reason = %rejected, "keystroke rejected");
                return KeyOutcome::Rejected(rejected);
            }
        };

        self.state = next;
        debug!(key = %event, input = %self.state.input(), "keystroke accepted");

        if self.started_at.is_none() && !self.state.is_empty() {
            self.started_at = Some(now);
        }

        if self.state.is_complete() && !self.state.target_graphemes().is_empty() {
            if self.final_elapsed.is_none() {
                self.final_elapsed = Some(self.running_elapsed(now));
            }
            let stats = self.stats(now);
            info!(
                wpm = stats.wpm,
                accuracy = stats.accuracy,
                elapsed_ms = stats.elapsed.as_millis() as u64,
                "session complete"
            );
            return KeyOutcome::Completed(stats);
        }

        // Backspacing out of a finished text resumes the clock.
        self.final_elapsed = None;
        KeyOutcome::Accepted
    }

    /// Clear the input and the clock, keeping the target.
    pub fn reset(&mut self) {
        self.state = self.state.cleared();
        self.started_at = None;
        self.final_elapsed = None;
        self.highlight.clear();
        info!(target_len = self.state.target_graphemes().len(), "session reset");
    }

    /// Replace the target with free-practice text.
    pub fn load_text(&mut self, target: &str) {
        self.state = TypingState::with_segmenter(target, self.config.segmenter());
        self.level = None;
        self.reset();
    }

    /// Replace the target with a tutorial level.
    pub fn load_level(&mut self, level: Level) {
        self.state = TypingState::with_segmenter(&level.target_text, self.config.segmenter());
        info!(level = %level.id, "level loaded");
        self.level = Some(level);
        self.reset();
    }

    fn running_elapsed(&self, now: Instant) -> Duration {
        self.started_at
            .map(|start| now.saturating_duration_since(start))
            .unwrap_or(Duration::ZERO)
    }

    /// Time since the first accepted keystroke, frozen at completion.
    pub fn elapsed(&self, now: Instant) -> Duration {
        self.final_elapsed
            .unwrap_or_else(|| self.running_elapsed(now))
    }

    pub fn stats(&self, now: Instant) -> Stats {
        let input = self.state.input_graphemes();
        let elapsed = self.elapsed(now);
        Stats {
            wpm: words_per_minute(input.len(), elapsed, self.config.chars_per_word),
            accuracy: accuracy(&input, self.state.target_graphemes()),
            elapsed,
        }
    }

    /// Whether a finished tutorial level met its thresholds. `None` until
    /// the text is complete or when no level is loaded.
    pub fn level_passed(&self, now: Instant) -> Option<bool> {
        if !self.is_complete() {
            return None;
        }
        let level = self.level.as_ref()?;
        Some(level.is_passed_by(&self.stats(now)))
    }

    pub fn suggested_keys(&self) -> Option<Vec<KeyRef>> {
        self.mapper
            .suggest(self.state.target_graphemes(), &self.state.input_graphemes())
    }

    pub fn highlighted_key(&self, now: Instant) -> Option<&str> {
        self.highlight.active(now)
    }

    pub fn progress(&self) -> Progress {
        progress(self.state.target_graphemes(), &self.state.input_graphemes())
    }
}
