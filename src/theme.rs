//! Theme configuration for TUI and CLI
//!
//! Centralizes all color and style definitions for easy customization.
//! Provides both ratatui styles (for the player) and ANSI escape codes
//! (for `trace` output).

use std::sync::OnceLock;

use ratatui::style::{Color, Modifier, Style};
use tracing::warn;

/// Theme configuration.
///
/// All colors and styles are defined here for easy customization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    /// Primary text color (used for most content)
    pub text_primary: Color,
    /// Secondary/dimmed text color
    pub text_secondary: Color,
    /// Accent color for key hints and titles
    pub accent: Color,
    /// Cell under comparison
    pub current: Color,
    /// Cell that matched the target
    pub matched: Color,
    /// Error/warning color
    pub error: Color,
    /// Success color
    pub success: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::standard()
    }
}

impl Theme {
    /// Default theme - light gray text, yellow comparison, green match.
    pub fn standard() -> Self {
        Self {
            text_primary: Color::Gray,
            text_secondary: Color::DarkGray,
            accent: Color::Green,
            current: Color::Yellow,
            matched: Color::Green,
            error: Color::Red,
            success: Color::Green,
        }
    }

    /// Classic terminal theme - white text.
    pub fn classic() -> Self {
        Self {
            text_primary: Color::White,
            text_secondary: Color::DarkGray,
            accent: Color::Yellow,
            current: Color::LightBlue,
            matched: Color::LightGreen,
            error: Color::Red,
            success: Color::Green,
        }
    }

    /// Cyan/blue theme.
    pub fn ocean() -> Self {
        Self {
            text_primary: Color::Cyan,
            text_secondary: Color::DarkGray,
            accent: Color::LightCyan,
            current: Color::LightBlue,
            matched: Color::LightGreen,
            error: Color::Red,
            success: Color::Green,
        }
    }

    /// Look up a theme by its config name.
    pub fn by_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "default" | "standard" => Some(Self::standard()),
            "classic" => Some(Self::classic()),
            "ocean" => Some(Self::ocean()),
            _ => None,
        }
    }

    // Style helpers

    /// Style for primary text content.
    pub fn text_style(&self) -> Style {
        Style::default().fg(self.text_primary)
    }

    /// Style for secondary/dimmed text.
    pub fn text_secondary_style(&self) -> Style {
        Style::default().fg(self.text_secondary)
    }

    /// Style for accented text.
    pub fn accent_style(&self) -> Style {
        Style::default().fg(self.accent)
    }

    /// Style for bold accented text (keybindings, etc).
    pub fn accent_bold_style(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for the cell being compared.
    pub fn current_style(&self) -> Style {
        Style::default()
            .fg(self.current)
            .add_modifier(Modifier::BOLD | Modifier::REVERSED)
    }

    /// Style for the matching cell.
    pub fn matched_style(&self) -> Style {
        Style::default()
            .fg(self.matched)
            .add_modifier(Modifier::BOLD | Modifier::REVERSED)
    }

    /// Style for error text.
    pub fn error_style(&self) -> Style {
        Style::default().fg(self.error)
    }

    /// Style for success text.
    pub fn success_style(&self) -> Style {
        Style::default().fg(self.success)
    }

    // ANSI color helpers for CLI output

    /// Format text with the accent color (for CLI output).
    pub fn accent_text(&self, text: &str) -> String {
        paint(self.accent, text)
    }

    /// Format text with the primary color (for CLI output).
    pub fn primary_text(&self, text: &str) -> String {
        paint(self.text_primary, text)
    }

    /// Format text with the secondary color (for CLI output).
    pub fn secondary_text(&self, text: &str) -> String {
        paint(self.text_secondary, text)
    }

    /// Format text with the comparison color (for CLI output).
    pub fn current_text(&self, text: &str) -> String {
        paint(self.current, text)
    }

    /// Format text with the match color (for CLI output).
    pub fn matched_text(&self, text: &str) -> String {
        paint(self.matched, text)
    }

    /// Format text with the error color (for CLI output).
    pub fn error_text(&self, text: &str) -> String {
        paint(self.error, text)
    }

    /// Format text with the success color (for CLI output).
    pub fn success_text(&self, text: &str) -> String {
        paint(self.success, text)
    }
}

/// ANSI reset sequence
const ANSI_RESET: &str = "\x1b[0m";

fn paint(color: Color, text: &str) -> String {
    format!("{}{}{}", color_to_ansi(color), text, ANSI_RESET)
}

/// Convert a ratatui Color to an ANSI escape code.
fn color_to_ansi(color: Color) -> &'static str {
    match color {
        Color::Black => "\x1b[30m",
        Color::Red => "\x1b[31m",
        Color::Green => "\x1b[32m",
        Color::Yellow => "\x1b[33m",
        Color::Blue => "\x1b[34m",
        Color::Magenta => "\x1b[35m",
        Color::Cyan => "\x1b[36m",
        Color::Gray => "\x1b[37m",
        Color::DarkGray => "\x1b[90m",
        Color::LightRed => "\x1b[91m",
        Color::LightGreen => "\x1b[92m",
        Color::LightYellow => "\x1b[93m",
        Color::LightBlue => "\x1b[94m",
        Color::LightMagenta => "\x1b[95m",
        Color::LightCyan => "\x1b[96m",
        Color::White => "\x1b[97m",
        Color::Reset => "\x1b[0m",
        // For RGB and indexed colors, fall back to reset (no color)
        _ => "",
    }
}

static THEME: OnceLock<Theme> = OnceLock::new();

/// Select the process-wide theme by config name.
///
/// Only the first call has an effect. Unknown names fall back to the
/// default theme.
pub fn init_theme(name: &str) {
    let theme = Theme::by_name(name).unwrap_or_else(|| {
        warn!(theme = name, "unknown theme, using default");
        Theme::default()
    });
    let _ = THEME.set(theme);
}

/// Global theme instance.
pub fn current_theme() -> Theme {
    THEME.get().cloned().unwrap_or_default()
}
