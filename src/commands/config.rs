//! Config subcommands handler

use std::path::Path;

use anyhow::Result;

use lsviz::theme::current_theme;
use lsviz::Config;

/// Show the effective configuration as TOML.
#[cfg(not(tarpaulin_include))]
pub fn handle_show(path: &Path) -> Result<()> {
    let config = Config::load_from(path)?;
    let toml_str = toml::to_string_pretty(&config)?;
    let theme = current_theme();
    println!("{}", theme.primary_text(toml_str.trim_end()));
    Ok(())
}

/// Open the configuration file in the default editor.
///
/// Uses $EDITOR environment variable (defaults to 'vi').
#[cfg(not(tarpaulin_include))]
pub fn handle_edit(path: &Path) -> Result<()> {
    let theme = current_theme();

    // Ensure config exists
    if !path.exists() {
        Config::default().save_to(path)?;
    }

    let editor = std::env::var("EDITOR").unwrap_or_else(|_| "vi".to_string());

    println!(
        "{}",
        theme.primary_text(&format!("Opening {} with {}", path.display(), editor))
    );

    let status = std::process::Command::new(&editor)
        .arg(path)
        .status()
        .map_err(|e| anyhow::anyhow!("Failed to open editor: {}", e))?;
    if !status.success() {
        anyhow::bail!("Editor exited with {}", status);
    }

    // Surface syntax errors right away rather than on the next run
    Config::load_from(path)?;
    println!("{}", theme.success_text("Config saved."));
    Ok(())
}

/// Print the configuration file location.
#[cfg(not(tarpaulin_include))]
pub fn handle_path(path: &Path) -> Result<()> {
    println!("{}", path.display());
    Ok(())
}
