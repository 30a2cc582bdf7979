//! # libmalayalam
//!
//! Malayalam InScript typing tutor built on libindic-core.
//!
//! Supplies the InScript layout, the tutorial levels and the practice texts,
//! and wires them into a [`LanguageRegistry`].

pub mod config;
pub mod layout;
pub mod levels;
pub mod samples;

pub use libindic_core::*;

use tracing::info;

pub use config::MalayalamConfig;
pub use layout::{inscript_layout, LAYOUT_NAME};
pub use levels::malayalam_levels;
pub use samples::{malayalam_samples, MALAYALAM_SAMPLES};

/// Registry key for Malayalam.
pub const LANGUAGE: &str = "malayalam";

/// Add Malayalam to an existing registry.
pub fn register(registry: &mut LanguageRegistry) {
    registry.register(LanguageConfig {
        language: LANGUAGE.to_string(),
        layout: inscript_layout(),
        levels: malayalam_levels(),
        samples: malayalam_samples(),
    });
}

/// A registry holding only Malayalam.
pub fn create_registry() -> LanguageRegistry {
    let mut registry = LanguageRegistry::new();
    register(&mut registry);
    registry
}

/// Keystroke mapper over the InScript layout.
pub fn create_mapper() -> KeystrokeMapper {
    KeystrokeMapper::new(inscript_layout())
}

/// Free-practice session on the first sample text.
pub fn create_practice_session(config: &MalayalamConfig) -> PracticeSession {
    PracticeSession::new(create_mapper(), config.base().clone(), MALAYALAM_SAMPLES[0])
}

/// Tutorial session on a level, or `None` for an unknown id.
pub fn create_tutorial_session(
    registry: &LanguageRegistry,
    config: &MalayalamConfig,
    level_id: &str,
) -> Option<PracticeSession> {
    let level = registry.level_by_id(LANGUAGE, level_id)?.clone();
    Some(PracticeSession::for_level(
        create_mapper(),
        config.base().clone(),
        level,
    ))
}

/// Where [`advance_session`] moved a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Advance {
    /// Loaded the level with this id
    Level(String),
    /// Loaded the next practice sample
    Sample,
    /// The current level is the last one; nothing changed
    LastLevel,
}

/// Move a tutorial session to the next level, or a free-practice session to
/// the next sample (wrapping around).
pub fn advance_session(registry: &LanguageRegistry, session: &mut PracticeSession) -> Advance {
    if let Some(current) = session.level().map(|level| level.id.clone()) {
        return match registry.next_level(LANGUAGE, &current) {
            Some(next) => {
                info!(from = %current, to = %next.id, "advancing to next level");
                let id = next.id.clone();
                session.load_level(next.clone());
                Advance::Level(id)
            }
            None => {
                info!(level = %current, "already at the last level");
                Advance::LastLevel
            }
        };
    }

    let current = session.target().to_string();
    match registry.next_sample(LANGUAGE, &current) {
        Some(next) => {
            info!("switching to next practice sample");
            session.load_text(next);
        }
        None => info!("no practice samples registered"),
    }
    Advance::Sample
}
