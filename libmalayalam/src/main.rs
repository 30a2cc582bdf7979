use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

use libindic_core::layout::key_display_name;
use libindic_core::{KeystrokeMapper, Layout, Segmenter};
use libmalayalam::{
    advance_session, create_mapper, create_registry, Advance, GraphemeStatus, KeyEvent,
    KeyOutcome, LanguageRegistry, MalayalamConfig, PracticeSession, TypingState, LANGUAGE,
};

#[derive(Parser)]
#[command(name = "libmalayalam")]
#[command(about = "Malayalam InScript typing tutor")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// TOML configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Layout file (TOML or .json) replacing the built-in InScript table
    #[arg(long, global = true)]
    layout: Option<PathBuf>,

    /// Log at debug level unless RUST_LOG is set
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Split text into normalized graphemes
    Segment {
        text: String,
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Check whether input is an accepted prefix of target
    Check { input: String, target: String },
    /// Show the keys to press next
    Suggest {
        target: String,
        #[arg(default_value = "")]
        input: String,
    },
    /// Print the keyboard layout
    Keys {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// List tutorial levels
    Levels {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Interactive practice; each line holds key codes like `KeyK S-KeyE Space Backspace`
    Practice {
        /// Tutorial level id
        #[arg(short, long)]
        level: Option<String>,
        /// Practice sample index
        #[arg(short, long, conflicts_with = "level")]
        sample: Option<usize>,
    },
    /// Interactive tutorial starting at a level (default from config)
    Tutorial { level: Option<String> },
}

fn init_tracing(verbose: bool) {
    let fallback = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_target(false)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback)),
        )
        .init();
}

fn load_config(path: Option<&Path>) -> Result<MalayalamConfig> {
    let Some(path) = path else {
        debug!("no config file given, using defaults");
        return Ok(MalayalamConfig::default());
    };
    debug!(path = %path.display(), "loading config");
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    MalayalamConfig::from_toml_str(&content)
        .with_context(|| format!("parsing config {}", path.display()))
}

fn load_mapper(path: Option<&Path>) -> Result<KeystrokeMapper> {
    let Some(path) = path else {
        return Ok(create_mapper());
    };
    let layout = Layout::load(path).map_err(|e| {
        warn!(path = %path.display(), error = %e, "layout load failed");
        anyhow::anyhow!("loading layout {}: {}", path.display(), e)
    })?;
    debug!(name = %layout.name, keys = layout.keys().count(), "loaded layout");
    Ok(KeystrokeMapper::new(std::sync::Arc::new(layout)))
}

fn handle_segment(segmenter: Segmenter, text: &str, json: bool) -> Result<()> {
    let graphemes = segmenter.segment(text);
    if json {
        println!("{}", serde_json::to_string_pretty(&graphemes)?);
        return Ok(());
    }
    for (i, g) in graphemes.iter().enumerate() {
        let points: Vec<String> = g.chars().map(|c| format!("U+{:04X}", c as u32)).collect();
        println!("{:>3}  {}  {}", i, g, points.join(" "));
    }
    println!("{} graphemes", graphemes.len());
    Ok(())
}

fn handle_check(segmenter: Segmenter, input: &str, target: &str) {
    let ok = segmenter.accepts(input, target);
    println!(
        "{} ({} of {} graphemes)",
        if ok { "accepted" } else { "rejected" },
        segmenter.grapheme_count(input),
        segmenter.grapheme_count(target)
    );
}

fn handle_suggest(
    mapper: &KeystrokeMapper,
    config: &MalayalamConfig,
    target: &str,
    input: &str,
) -> Result<()> {
    let state = TypingState::with_segmenter(target, config.base().segmenter());
    let state = state
        .append(input)
        .with_context(|| format!("'{}' is not a prefix of the target", input))?;
    match mapper.suggest(state.target_graphemes(), &state.input_graphemes()) {
        Some(keys) => {
            let names: Vec<&str> = keys.iter().map(|k| k.code.as_str()).collect();
            println!("{}", names.join(" + "));
        }
        None => println!("(nothing to suggest)"),
    }
    Ok(())
}

fn handle_keys(mapper: &KeystrokeMapper, json: bool) -> Result<()> {
    let layout = mapper.layout();
    if json {
        println!("{}", layout.to_json_string()?);
        return Ok(());
    }
    println!("{}", layout.name);
    for row in &layout.rows {
        let cells: Vec<String> = row
            .keys
            .iter()
            .map(|k| match &k.shift {
                Some(shift) => format!("{}:{}/{}", key_display_name(&k.code), k.primary, shift),
                None => key_display_name(&k.code).to_string(),
            })
            .collect();
        println!("  {}", cells.join("  "));
    }
    Ok(())
}

fn handle_levels(registry: &LanguageRegistry, json: bool) -> Result<()> {
    let sets = registry.levels_for(LANGUAGE);
    if json {
        println!("{}", serde_json::to_string_pretty(sets)?);
        return Ok(());
    }
    for set in sets {
        println!("{:?}", set.difficulty);
        for level in &set.levels {
            let mut limits = Vec::new();
            if let Some(acc) = level.min_accuracy {
                limits.push(format!("acc>={}%", acc));
            }
            if let Some(wpm) = level.min_wpm {
                limits.push(format!("wpm>={}", wpm));
            }
            println!("  {:<18} {}  [{}]", level.id, level.title, limits.join(", "));
        }
    }
    Ok(())
}

fn render(session: &PracticeSession, now: Instant) {
    let progress = session.progress();
    let mut line = String::new();
    for (i, g) in progress.graphemes.iter().enumerate() {
        if i == progress.caret {
            line.push('|');
        }
        match g.status {
            GraphemeStatus::Correct | GraphemeStatus::Pending => line.push_str(&g.grapheme),
            GraphemeStatus::Partial => line.push_str(&format!("({})", g.grapheme)),
            GraphemeStatus::Incorrect => line.push_str(&format!("!{}!", g.grapheme)),
        }
    }
    if progress.caret >= progress.graphemes.len() {
        line.push('|');
    }
    let stats = session.stats(now);
    println!("  {}", line);
    println!(
        "  input: {}   wpm {:.0}  accuracy {:.0}%  time {}",
        session.input(),
        stats.wpm,
        stats.accuracy,
        stats.elapsed_display()
    );
    if let Some(keys) = session.suggested_keys() {
        let names: Vec<&str> = keys.iter().map(|k| key_display_name(&k.code)).collect();
        println!("  next: {}", names.join(" + "));
    }
}

fn run_practice(
    mapper: KeystrokeMapper,
    registry: &LanguageRegistry,
    config: &MalayalamConfig,
    level: Option<String>,
    sample: Option<usize>,
) -> Result<()> {
    let mut session = match level {
        Some(id) => {
            let level = registry
                .level_by_id(LANGUAGE, &id)
                .with_context(|| format!("unknown level '{}'", id))?;
            PracticeSession::for_level(mapper, config.base().clone(), level.clone())
        }
        None => {
            let samples = registry.samples_for(LANGUAGE);
            let index = sample.unwrap_or(0);
            let Some(text) = samples.get(index) else {
                bail!("sample index {} out of range (0..{})", index, samples.len());
            };
            PracticeSession::new(mapper, config.base().clone(), text)
        }
    };

    if let Some(level) = session.level() {
        println!("{} - {}", level.title, level.description);
        for hint in &level.hints {
            println!("  hint: {}", hint);
        }
    }
    println!("Type key codes separated by spaces (KeyK, S-KeyD, Space, Backspace).");
    println!("Commands: :reset  :new  :quit");
    render(&session, Instant::now());

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line.context("reading stdin")?;
        match line.trim() {
            "" => continue,
            ":quit" | ":q" => break,
            ":reset" => session.reset(),
            ":new" | ":next" => {
                if advance_session(registry, &mut session) == Advance::LastLevel {
                    println!("  last level");
                }
            }
            tokens => {
                for token in tokens.split_whitespace() {
                    let event: KeyEvent = match token.parse() {
                        Ok(event) => event,
                        Err(e) => {
                            println!("  {}", e);
                            continue;
                        }
                    };
                    match session.handle_key(&event, Instant::now()) {
                        KeyOutcome::Accepted => {}
                        KeyOutcome::Rejected(reason) => println!("  {}: {}", token, reason),
                        KeyOutcome::Completed(stats) => {
                            println!(
                                "  complete: {:.0} wpm, {:.0}% accuracy in {}",
                                stats.wpm,
                                stats.accuracy,
                                stats.elapsed_display()
                            );
                            if let Some(passed) = session.level_passed(Instant::now()) {
                                println!("  {}", if passed { "level passed" } else { "level not passed" });
                            }
                        }
                    }
                }
            }
        }
        render(&session, Instant::now());
        io::stdout().flush()?;
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = load_config(cli.config.as_deref())?;
    let segmenter = config.base().segmenter();

    match cli.command {
        Commands::Segment { text, json } => handle_segment(segmenter, &text, json)?,
        Commands::Check { input, target } => handle_check(segmenter, &input, &target),
        Commands::Suggest { target, input } => {
            let mapper = load_mapper(cli.layout.as_deref())?;
            handle_suggest(&mapper, &config, &target, &input)?
        }
        Commands::Keys { json } => handle_keys(&load_mapper(cli.layout.as_deref())?, json)?,
        Commands::Levels { json } => handle_levels(&create_registry(), json)?,
        Commands::Practice { level, sample } => {
            let mapper = load_mapper(cli.layout.as_deref())?;
            run_practice(mapper, &create_registry(), &config, level, sample)?
        }
        Commands::Tutorial { level } => {
            let mapper = load_mapper(cli.layout.as_deref())?;
            let level = level.unwrap_or_else(|| config.default_level.clone());
            run_practice(mapper, &create_registry(), &config, Some(level), None)?
        }
    }
    Ok(())
}
