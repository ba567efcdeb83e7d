//! Full-screen layout of the player.
//!
//! ```text
//!  lsviz - Linear Search Visualizer
//!  List:   4, 1, 9, 2, 7
//!  Target: 9
//! ┌ Array ──────────────────────────┐
//! │ ⬜ 4  🟨 1  ⬜ 9  ⬜ 2  ⬜ 7       │
//! └─────────────────────────────────┘
//! ┌ Explanation ────────────────────┐
//! │ Step 2: Compare target (9) ...  │
//! └─────────────────────────────────┘
//!  message
//!  ━━━━━━━━⏺────────◆──── step 2/3
//!  ▶  step:2/3 ...
//! ```

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use super::boxes::build_box_line;
use super::help::render_help;
use super::progress::build_progress_line;
use super::status::{build_message_line, build_status_line};
use crate::player::controller::PlaybackController;
use crate::player::state::{InputField, Mode, ViewState};
use crate::search::Frame as StepFrame;
use crate::theme::Theme;

/// Everything the screen needs besides the controller.
pub struct ScreenContext<'a> {
    /// Step to draw in the array and explanation panels
    pub current: &'a StepFrame,
    pub view: &'a ViewState,
    pub playing: bool,
    pub interval_ms: u64,
    pub theme: &'a Theme,
}

/// Split the frame into the player's rows.
pub fn screen_layout(area: Rect) -> [Rect; 7] {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // title
            Constraint::Length(2), // inputs
            Constraint::Length(3), // boxes
            Constraint::Min(3),    // explanation
            Constraint::Length(1), // message
            Constraint::Length(1), // progress
            Constraint::Length(1), // status
        ])
        .split(area);
    [
        chunks[0], chunks[1], chunks[2], chunks[3], chunks[4], chunks[5], chunks[6],
    ]
}

/// Draw the whole player.
pub fn render_player(frame: &mut Frame, controller: &PlaybackController, ctx: &ScreenContext) {
    let [title, inputs, boxes, explanation, message, progress, status] =
        screen_layout(frame.area());
    let theme = ctx.theme;
    let current = ctx.current;

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            " lsviz - Linear Search Visualizer",
            theme.accent_bold_style(),
        ))),
        title,
    );

    frame.render_widget(Paragraph::new(build_input_lines(ctx.view, theme)), inputs);

    frame.render_widget(
        Paragraph::new(build_box_line(&current.visual, theme))
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(theme.text_secondary_style())
                    .title(" Array "),
            ),
        boxes,
    );

    let explanation_text: Text = current
        .explanation
        .lines()
        .map(|l| Line::from(l.to_string()))
        .collect();
    frame.render_widget(
        Paragraph::new(explanation_text)
            .style(theme.text_style())
            .wrap(Wrap { trim: false })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(theme.text_secondary_style())
                    .title(" Explanation "),
            ),
        explanation,
    );

    frame.render_widget(
        Paragraph::new(build_message_line(ctx.view.message.as_ref(), theme)),
        message,
    );

    let match_position = controller.sequence().and_then(|seq| seq.match_index());
    frame.render_widget(
        Paragraph::new(build_progress_line(
            progress.width,
            controller.current_index(),
            controller.len(),
            match_position,
            theme,
        )),
        progress,
    );

    frame.render_widget(
        Paragraph::new(build_status_line(
            status.width,
            ctx.playing,
            ctx.view.mode,
            controller.current_index(),
            controller.len(),
            ctx.interval_ms,
            theme,
        )),
        status,
    );

    if ctx.view.mode == Mode::Help {
        render_help(frame, theme);
    }
}

/// The two input rows; the focused field gets a cursor while editing.
pub fn build_input_lines(view: &ViewState, theme: &Theme) -> Text<'static> {
    let editing = view.mode == Mode::Edit;
    let row = |label: &'static str, value: &str, field: InputField| {
        let focused = editing && view.field == field;
        let label_style = if focused {
            theme.accent_bold_style()
        } else {
            theme.text_secondary_style()
        };
        let mut spans = vec![
            Span::styled(label, label_style),
            Span::styled(value.to_string(), theme.text_style()),
        ];
        if focused {
            spans.push(Span::styled("█", theme.accent_style()));
        }
        Line::from(spans)
    };

    Text::from(vec![
        row(" List:   ", &view.array_input, InputField::Array),
        row(" Target: ", &view.target_input, InputField::Target),
    ])
}
