//! Plain-text trace output for the `trace` command.

use crate::search::{Frame, StepSequence};
use crate::theme::Theme;

use super::boxes::format_box_row;
use super::progress::format_position;

/// Indent applied to explanation lines below the box row.
const EXPLANATION_INDENT: &str = "    ";

/// Header line, e.g. `Searching for 9 in [4, 1, 9]`.
pub fn format_trace_header(sequence: &StepSequence) -> String {
    let request = sequence.request();
    let values: Vec<String> = request.array().iter().map(i64::to_string).collect();
    format!(
        "Searching for {} in [{}]",
        request.target(),
        values.join(", ")
    )
}

/// One frame as text: position and boxes, then the indented explanation.
pub fn format_trace_frame(frame: &Frame, len: usize, theme: &Theme, color: bool) -> String {
    let position = format_position(frame.index, len);
    let position = if color {
        theme.secondary_text(&position)
    } else {
        position
    };

    let mut out = format!("{}  {}", position, format_box_row(&frame.visual, theme, color));
    for line in frame.explanation.lines().filter(|l| !l.is_empty()) {
        out.push('\n');
        out.push_str(EXPLANATION_INDENT);
        if !color {
            out.push_str(line);
        } else if line.starts_with('✔') {
            out.push_str(&theme.success_text(line));
        } else if line.starts_with('✘') {
            out.push_str(&theme.error_text(line));
        } else {
            out.push_str(&theme.primary_text(line));
        }
    }
    out
}

/// Closing summary line.
pub fn format_trace_summary(sequence: &StepSequence) -> String {
    let comparisons = sequence
        .steps()
        .iter()
        .filter(|s| s.compared_value.is_some())
        .count();
    let plural = if comparisons == 1 { "" } else { "s" };
    let target = sequence.request().target();

    match sequence.match_index() {
        Some(index) => format!(
            "Found {} at index {} after {} comparison{}.",
            target, index, comparisons, plural
        ),
        None => format!(
            "{} not found after {} comparison{}.",
            target, comparisons, plural
        ),
    }
}
