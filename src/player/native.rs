//! Terminal event loop for the interactive player.
//!
//! Blocks on `crossterm::event::poll` for at most the time left until the
//! next autoplay tick, so input and autoplay share one thread and a key
//! press is always applied before the next tick is checked.

use std::io::{self, Stdout};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::{
    event,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::debug;

use crate::config::Config;
use crate::player::input::handle_event;
use crate::player::render::{render_player, ScreenContext};
use crate::player::session::Session;
use crate::player::state::{InputResult, ViewState};
use crate::theme::current_theme;

/// Longest the loop blocks when no autoplay tick is pending.
const IDLE_POLL: Duration = Duration::from_millis(250);

/// Restores the terminal when dropped, including on error paths.
struct TerminalGuard {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalGuard {
    fn enter() -> Result<Self> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stdout = io::stdout();
        if let Err(e) = execute!(stdout, EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(e).context("Failed to enter alternate screen");
        }
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        Ok(Self { terminal })
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}

/// Run the interactive player until the user quits.
///
/// With non-empty input the trace is generated immediately (surfacing a
/// validation error in the message line); otherwise the player opens in
/// edit mode.
pub fn play(config: &Config, array_input: &str, target_input: &str) -> Result<()> {
    let mut session = Session::new(&config.playback, ViewState::new(array_input, target_input));
    if array_input.trim().is_empty() && target_input.trim().is_empty() {
        session.view.begin_edit();
    } else {
        let _ = session.submit(Instant::now());
    }

    let mut guard = TerminalGuard::enter()?;
    run_loop(&mut guard.terminal, &mut session)
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    session: &mut Session,
) -> Result<()> {
    let theme = current_theme();
    let interval_ms = session.scheduler.interval().as_millis() as u64;

    loop {
        // Also flags a render when autoplay emitted
        let current = session.take_display_frame();
        if session.view.needs_render {
            let ctx = ScreenContext {
                current: &current,
                view: &session.view,
                playing: session.is_playing(),
                interval_ms,
                theme: &theme,
            };
            terminal.draw(|frame| render_player(frame, &session.controller, &ctx))?;
            session.view.needs_render = false;
        }

        let timeout = session.poll_timeout(Instant::now(), IDLE_POLL);
        if event::poll(timeout)? {
            let event = event::read()?;
            if handle_event(event, session, Instant::now()) == InputResult::Quit {
                debug!("player quit");
                break;
            }
        }

        session.tick(Instant::now());
    }

    session.stop_autoplay();
    Ok(())
}
