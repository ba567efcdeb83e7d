//! lsviz - Linear Search Visualizer
//!
//! Generates a deterministic trace of a linear search and plays it back
//! step by step, manually or with cancellable autoplay.
//!
//! - [`search`]: input validation, trace generation, frame description
//! - [`player`]: playback controller, autoplay, interactive terminal player
//! - [`config`]: user configuration
//! - [`theme`]: colors for the player and CLI output

pub mod cli;
pub mod config;
pub mod logging;
pub mod player;
pub mod search;
pub mod theme;

pub use config::Config;
pub use player::{AutoplayScheduler, AutoplayStatus, PlaybackController};
pub use search::{generate, Frame, SearchRequest, Step, StepSequence, ValidationError};

/// Version string: `0.1.0 (abc1234 2026-10-19)` for dev builds, plain
/// package version with the `release` feature.
pub fn version_string() -> String {
    let version = env!("CARGO_PKG_VERSION");
    match option_env!("VERGEN_GIT_SHA") {
        Some(sha) if !cfg!(feature = "release") => {
            let short = sha.get(..7).unwrap_or(sha);
            let date = option_env!("LSVIZ_BUILD_DATE").unwrap_or("unknown");
            format!("{} ({} {})", version, short, date)
        }
        _ => version.to_string(),
    }
}
