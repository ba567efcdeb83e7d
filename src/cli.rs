//! Command-line interface definition.

use std::path::PathBuf;

use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};
use clap_complete::Shell;

/// Linear Search Visualizer - step through a linear search in the terminal
#[derive(Debug, Parser)]
#[command(name = "lsviz", version, about, propagate_version = true)]
pub struct Cli {
    /// Use this config file instead of the default location
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Append logs to this file (filter with LSVIZ_LOG)
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Open the interactive player
    Play {
        /// Comma-separated list of integers, e.g. "4, 1, 9, 2"
        #[arg(short, long, default_value = "", allow_hyphen_values = true)]
        array: String,

        /// Integer to search for
        #[arg(short, long, default_value = "", allow_hyphen_values = true)]
        target: String,
    },

    /// Print every step of the search trace
    Trace {
        /// Comma-separated list of integers, e.g. "4, 1, 9, 2"
        #[arg(short, long, allow_hyphen_values = true)]
        array: String,

        /// Integer to search for
        #[arg(short, long, allow_hyphen_values = true)]
        target: String,

        /// Print the trace as JSON
        #[arg(long, conflicts_with = "animate")]
        json: bool,

        /// Print steps one interval apart, like autoplay (Ctrl-C stops)
        #[arg(long)]
        animate: bool,

        /// Autoplay interval in milliseconds (overrides config)
        #[arg(long, value_name = "MS")]
        interval_ms: Option<u64>,

        /// Disable colored output
        #[arg(long)]
        no_color: bool,
    },

    /// Show or edit the configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the effective configuration as TOML
    Show,
    /// Open the configuration file in $EDITOR
    Edit,
    /// Print the configuration file location
    Path,
}

impl Cli {
    /// Parse process arguments, with build info in `--version`.
    pub fn parse_args() -> Self {
        let matches = Self::command()
            .version(crate::version_string())
            .get_matches();
        match Self::from_arg_matches(&matches) {
            Ok(cli) => cli,
            Err(e) => e.exit(),
        }
    }
}
