//! Play subcommand handler

use anyhow::Result;

use lsviz::player;
use lsviz::Config;

/// Open the interactive player, optionally pre-filled with input.
#[cfg(not(tarpaulin_include))]
pub fn handle(config: &Config, array: &str, target: &str) -> Result<()> {
    if !atty::is(atty::Stream::Stdout) {
        anyhow::bail!("The player needs an interactive terminal; use `lsviz trace` instead.");
    }
    player::play(config, array, target)
}
