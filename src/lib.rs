//! Configurable rock-paper-scissors engine.
//!
//! A [`ChoiceEngine`] owns a fixed, ordered roster of gestures and the
//! [`Rules`] deciding every matchup between them. It draws the machine's
//! choice, validates the human's, and settles the pair into an [`Outcome`].
//! A [`Session`] wraps the engine with the interactive retry loop and a
//! running [`Tally`]; where its input comes from is a [`Prompt`].
//!
//! ```
//! use roshambo::*;
//! let engine = ChoiceEngine::default();
//! let human = engine.validate("scissors").unwrap();
//! let machine = engine.random();
//! let outcome = engine.resolve(&human, &machine);
//! assert_eq!(outcome == Outcome::Draw, machine.gesture().name() == "Scissors");
//! ```
mod choice;
mod engine;
mod error;
mod gesture;
mod outcome;
mod prompt;
mod rules;
mod session;

#[cfg(feature = "cli")]
pub mod cli;

pub use choice::*;
pub use engine::*;
pub use error::*;
pub use gesture::Gesture;
pub use outcome::*;
pub use prompt::*;
pub use rules::*;
pub use session::*;

// ============================================================================
// INTERACTION
// ============================================================================
/// Printed after every rejected line.
pub const REPROMPT: &str = "You must enter a valid choice.";
/// Words that end an interactive session, unless the rules name a gesture that way.
pub const QUIT_WORDS: [&str; 2] = ["quit", "exit"];

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Directory receiving one timestamped log file per run.
pub const LOG_DIRECTORY: &str = "logs";

/// Initialize dual logging (terminal + file) with timestamped log files.
/// Writes DEBUG level to file and WARN to the terminal, which is shared with the game.
#[cfg(feature = "cli")]
pub fn log() -> anyhow::Result<()> {
    use anyhow::Context;
    std::fs::create_dir_all(LOG_DIRECTORY).context("create logs directory")?;
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .context("time moves slow")?
        .as_secs();
    let path = format!("{}/{}.log", LOG_DIRECTORY, time);
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(&path).with_context(|| format!("create log file {}", path))?,
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Warn,
        config.clone(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).context("initialize logger")
}
