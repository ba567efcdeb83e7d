//! Status bar rendering for the player.
//!
//! Displays autoplay state, mode indicators, and keyboard shortcuts.

use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

use crate::player::state::{Mode, StatusMessage};
use crate::theme::Theme;

/// Count digits in a number (for width calculation).
#[inline]
pub fn count_digits(n: usize) -> usize {
    if n == 0 {
        1
    } else {
        (n as f64).log10().floor() as usize + 1
    }
}

/// Step counter padded so its width does not change while playing.
pub fn format_step_counter(position: usize, len: usize) -> String {
    let digits = count_digits(len);
    let current = if len == 0 { 0 } else { position.min(len - 1) + 1 };
    format!("{:>width$}/{}", current, len, width = digits)
}

/// Build the status/controls bar.
///
/// # Arguments
/// * `width` - Terminal width
/// * `playing` - Whether autoplay is running
/// * `mode` - Current UI mode
/// * `position` - Current position in the trace
/// * `len` - Number of steps in the trace
/// * `interval_ms` - Autoplay interval
pub fn build_status_line(
    width: u16,
    playing: bool,
    mode: Mode,
    position: usize,
    len: usize,
    interval_ms: u64,
    theme: &Theme,
) -> Line<'static> {
    let mut spans = Vec::with_capacity(24);

    // ▶ and ⏸ are double-width unicode
    let icon = if playing { " ⏸  " } else { " ▶  " };
    spans.push(Span::styled(icon, theme.text_style()));

    if mode == Mode::Edit {
        spans.push(Span::styled("[E] ", theme.accent_bold_style()));
    }

    spans.push(Span::styled("step:", theme.text_secondary_style()));
    spans.push(Span::styled(
        format!("{} ", format_step_counter(position, len)),
        theme.text_style(),
    ));
    spans.push(Span::styled("int:", theme.text_secondary_style()));
    spans.push(Span::styled(format!("{}ms ", interval_ms), theme.text_style()));
    spans.push(Span::styled("│ ", theme.text_secondary_style()));

    let play_action = if playing { ":pause " } else { ":play " };
    let hints: [(&str, &str); 6] = [
        ("space", play_action),
        ("←→", ":step "),
        ("e", ":edit "),
        ("s", ":stop "),
        ("?", ":hlp "),
        ("q", ":quit"),
    ];
    for (key, action) in hints {
        spans.push(Span::styled(key, theme.accent_style()));
        spans.push(Span::styled(action, theme.text_secondary_style()));
    }

    // Pad to full width to overwrite any leftover content
    let used: usize = spans.iter().map(|s| s.content.width()).sum();
    let padding = (width as usize).saturating_sub(used);
    if padding > 0 {
        spans.push(Span::raw(" ".repeat(padding)));
    }

    Line::from(spans)
}

/// Build the message line (submission errors and notices).
pub fn build_message_line(message: Option<&StatusMessage>, theme: &Theme) -> Line<'static> {
    match message {
        Some(StatusMessage::Error(text)) => {
            Line::from(Span::styled(format!(" {}", text), theme.error_style()))
        }
        Some(StatusMessage::Info(text)) => {
            Line::from(Span::styled(format!(" {}", text), theme.success_style()))
        }
        None => Line::default(),
    }
}
