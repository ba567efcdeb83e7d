//! Progress bar rendering for the player.
//!
//! Displays the position within the trace, with a marker where the
//! target was found.

use ratatui::text::{Line, Span};

use crate::theme::Theme;

/// Format a trace position as `current/total` (1-based).
pub fn format_position(position: usize, len: usize) -> String {
    if len == 0 {
        return "0/0".to_string();
    }
    format!("{}/{}", position.min(len - 1) + 1, len)
}

/// Build the progress bar character array.
///
/// # Arguments
/// * `bar_width` - Width of the bar in characters
/// * `position` - Current position in the trace
/// * `len` - Number of steps in the trace
/// * `match_position` - Position of the matching step, if any
///
/// # Returns
/// A tuple of (bar_chars, filled_count).
pub fn build_progress_bar_chars(
    bar_width: usize,
    position: usize,
    len: usize,
    match_position: Option<usize>,
) -> (Vec<char>, usize) {
    let progress = if len > 1 {
        (position as f64 / (len - 1) as f64).clamp(0.0, 1.0)
    } else if len == 1 {
        1.0
    } else {
        0.0
    };

    let filled = (bar_width as f64 * progress) as usize;

    let mut bar: Vec<char> = vec!['─'; bar_width];

    if filled < bar_width {
        bar[filled] = '⏺';
    }

    if let Some(found) = match_position {
        let marker_pos = if len > 1 {
            ((found as f64 / (len - 1) as f64) * bar_width as f64) as usize
        } else {
            0
        };
        let marker_pos = marker_pos.min(bar_width.saturating_sub(1));
        if marker_pos < bar_width && bar[marker_pos] != '⏺' {
            bar[marker_pos] = '◆';
        }
    }

    (bar, filled)
}

/// Build the progress line: bar followed by `step current/total`.
pub fn build_progress_line(
    width: u16,
    position: usize,
    len: usize,
    match_position: Option<usize>,
    theme: &Theme,
) -> Line<'static> {
    let label = format!(" step {}", format_position(position, len));
    let bar_width = (width as usize).saturating_sub(label.chars().count() + 1);
    let (bar, filled) = build_progress_bar_chars(bar_width, position, len, match_position);

    let done: String = bar[..filled.min(bar.len())]
        .iter()
        .map(|&c| if c == '◆' { c } else { '━' })
        .collect();
    let rest: String = bar[filled.min(bar.len())..].iter().collect();

    Line::from(vec![
        Span::raw(" "),
        Span::styled(done, theme.success_style()),
        Span::styled(rest, theme.text_secondary_style()),
        Span::styled(label, theme.text_style()),
    ])
}
