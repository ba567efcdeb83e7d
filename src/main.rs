mod commands;

use anyhow::Result;
use tracing::debug;

use lsviz::cli::{Cli, Commands, ConfigCommands};
use lsviz::theme::init_theme;
use lsviz::{logging, Config};

use commands::trace::TraceOptions;

#[cfg(not(tarpaulin_include))]
fn main() -> Result<()> {
    let cli = Cli::parse_args();

    // The player owns the terminal; without --log-file it stays silent
    match (&cli.log_file, &cli.command) {
        (Some(path), _) => logging::init_file(path)?,
        (None, Commands::Play { .. }) => {}
        (None, _) => logging::init_stderr()?,
    }

    let config_path = match cli.config {
        Some(path) => path,
        None => Config::config_path()?,
    };

    // Must work even when the config file does not parse
    if let Commands::Config { command } = &cli.command {
        init_theme(&Config::default().display.theme);
        return match command {
            ConfigCommands::Show => commands::config::handle_show(&config_path),
            ConfigCommands::Edit => commands::config::handle_edit(&config_path),
            ConfigCommands::Path => commands::config::handle_path(&config_path),
        };
    }

    let config = Config::load_from(&config_path)?;
    init_theme(&config.display.theme);
    debug!(path = %config_path.display(), "config loaded");

    match cli.command {
        Commands::Play { array, target } => commands::play::handle(&config, &array, &target),
        Commands::Trace {
            array,
            target,
            json,
            animate,
            interval_ms,
            no_color,
        } => commands::trace::handle(
            &config,
            &TraceOptions {
                array: &array,
                target: &target,
                json,
                animate,
                interval_ms,
                no_color,
            },
        ),
        Commands::Completions { shell } => commands::completions::handle(shell),
        Commands::Config { .. } => Ok(()),
    }
}
