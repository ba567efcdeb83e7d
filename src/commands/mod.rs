//! Subcommand handlers for the lsviz binary.

pub mod completions;
pub mod config;
pub mod play;
pub mod trace;
