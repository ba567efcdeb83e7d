//! Help overlay rendering for the player.
//!
//! Displays a centered help overlay with all available keyboard shortcuts.

use ratatui::{
    layout::Rect,
    text::{Line, Text},
    widgets::{Clear, Paragraph},
    Frame,
};

use crate::theme::Theme;

/// Help text lines for the help overlay.
pub const HELP_LINES: &[&str] = &[
    "",
    "  ╔═══════════════════════════════════════════╗",
    "  ║             lsviz Player Help             ║",
    "  ╠═══════════════════════════════════════════╣",
    "  ║                                           ║",
    "  ║  Navigation                               ║",
    "  ║    <-/h/p     Previous step               ║",
    "  ║    ->/l/n     Next step                   ║",
    "  ║    Home/g     First step                  ║",
    "  ║    End/G      Last step                   ║",
    "  ║                                           ║",
    "  ║  Autoplay                                 ║",
    "  ║    Space      Start / pause autoplay      ║",
    "  ║    s          Stop autoplay               ║",
    "  ║                                           ║",
    "  ║  Input                                    ║",
    "  ║    e or /     Edit list and target        ║",
    "  ║    Tab        Switch field                ║",
    "  ║    Enter      Generate steps              ║",
    "  ║    Esc        Cancel editing              ║",
    "  ║                                           ║",
    "  ║  General                                  ║",
    "  ║    ?          Show this help              ║",
    "  ║    q          Quit player                 ║",
    "  ║                                           ║",
    "  ║           Press any key to close          ║",
    "  ╚═══════════════════════════════════════════╝",
    "",
];

/// Width of the help box (for centering calculations).
pub const HELP_BOX_WIDTH: usize = 47;

/// Calculate the starting row for centering the help box.
pub fn calc_help_start_row(term_height: u16) -> u16 {
    let box_height = HELP_LINES.len() as u16;
    (term_height.saturating_sub(box_height)) / 2
}

/// Calculate the starting column for centering the help box.
pub fn calc_help_start_col(term_width: u16) -> u16 {
    ((term_width as usize).saturating_sub(HELP_BOX_WIDTH) / 2) as u16
}

/// Area covered by the help box inside `area`, clipped to fit.
pub fn help_area(area: Rect) -> Rect {
    let x = area.x + calc_help_start_col(area.width);
    let y = area.y + calc_help_start_row(area.height);
    let width = (HELP_BOX_WIDTH as u16).min(area.width);
    let height = (HELP_LINES.len() as u16).min(area.height);
    Rect::new(x, y, width, height)
}

/// Render the help overlay on top of whatever was drawn.
pub fn render_help(frame: &mut Frame, theme: &Theme) {
    let area = help_area(frame.area());
    let text: Text = HELP_LINES.iter().map(|l| Line::from(*l)).collect();

    frame.render_widget(Clear, area);
    frame.render_widget(Paragraph::new(text).style(theme.accent_style()), area);
}
