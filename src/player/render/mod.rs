//! Rendering components for the player.
//!
//! This module contains all the UI rendering functions for the player,
//! including array boxes, progress bar, status bar and help overlay, plus
//! the plain-text trace printed by `lsviz trace`.

mod boxes;
mod help;
mod progress;
mod screen;
mod status;
mod text;

pub use boxes::{build_box_line, cell_label, format_box_row, highlight_glyph};
pub use help::{calc_help_start_col, calc_help_start_row, help_area, render_help, HELP_BOX_WIDTH, HELP_LINES};
pub use progress::{build_progress_bar_chars, build_progress_line, format_position};
pub use screen::{build_input_lines, render_player, screen_layout, ScreenContext};
pub use status::{build_message_line, build_status_line, count_digits, format_step_counter};
pub use text::{format_trace_frame, format_trace_header, format_trace_summary};
