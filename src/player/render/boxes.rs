//! Array box rendering.
//!
//! Turns a frame's visual descriptor into a row of boxes, one per array
//! element, either as ratatui spans or as plain/ANSI text.

use ratatui::text::{Line, Span};

use crate::search::{Cell, Highlight, VisualDescriptor};
use crate::theme::Theme;

/// Gap between two boxes.
const SEPARATOR: &str = "  ";

/// Shown instead of boxes when the array is empty.
pub const EMPTY_ARRAY_TEXT: &str = "(empty list)";

/// Glyph marking a cell's highlight.
pub fn highlight_glyph(highlight: Highlight) -> &'static str {
    match highlight {
        Highlight::Plain => "⬜",
        Highlight::Current => "🟨",
        Highlight::Match => "🟩",
    }
}

/// Text of a single box, e.g. `🟨 9`.
pub fn cell_label(cell: &Cell) -> String {
    format!("{} {}", highlight_glyph(cell.highlight), cell.value)
}

/// Build the row as a styled ratatui line.
pub fn build_box_line(visual: &VisualDescriptor, theme: &Theme) -> Line<'static> {
    if visual.cells.is_empty() {
        return Line::from(Span::styled(
            EMPTY_ARRAY_TEXT,
            theme.text_secondary_style(),
        ));
    }

    let mut spans = Vec::with_capacity(visual.cells.len() * 2);
    for (i, cell) in visual.cells.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(SEPARATOR));
        }
        let style = match cell.highlight {
            Highlight::Plain => theme.text_style(),
            Highlight::Current => theme.current_style(),
            Highlight::Match => theme.matched_style(),
        };
        spans.push(Span::styled(cell_label(cell), style));
    }
    Line::from(spans)
}

/// Format the row for CLI output, with ANSI colors when `color` is set.
pub fn format_box_row(visual: &VisualDescriptor, theme: &Theme, color: bool) -> String {
    if visual.cells.is_empty() {
        return if color {
            theme.secondary_text(EMPTY_ARRAY_TEXT)
        } else {
            EMPTY_ARRAY_TEXT.to_string()
        };
    }

    visual
        .cells
        .iter()
        .map(|cell| {
            let label = cell_label(cell);
            if !color {
                return label;
            }
            match cell.highlight {
                Highlight::Plain => theme.primary_text(&label),
                Highlight::Current => theme.current_text(&label),
                Highlight::Match => theme.matched_text(&label),
            }
        })
        .collect::<Vec<_>>()
        .join(SEPARATOR)
}
