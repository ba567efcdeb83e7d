//! Keyboard input handling for the player.
//!
//! Handles all keyboard shortcuts including navigation, autoplay
//! controls, mode toggles, and input editing.

use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::player::session::Session;
use crate::player::state::{InputResult, Mode};

/// Handle a keyboard event.
///
/// This is the main keyboard input handler that processes all key events
/// and updates the session or returns control flow signals.
pub fn handle_key_event(key: KeyEvent, session: &mut Session, now: Instant) -> InputResult {
    // Windows reports releases too
    if key.kind == KeyEventKind::Release {
        return InputResult::Continue;
    }

    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return InputResult::Quit;
    }

    match session.view.mode {
        Mode::Help => {
            // If help is showing, any key closes it
            session.view.toggle_help();
            InputResult::Continue
        }
        Mode::Edit => {
            handle_edit_key(key, session, now);
            InputResult::Continue
        }
        Mode::Normal => handle_normal_key(key, session, now),
    }
}

fn handle_normal_key(key: KeyEvent, session: &mut Session, now: Instant) -> InputResult {
    match key.code {
        // === Quit ===
        KeyCode::Char('q') => InputResult::Quit,
        KeyCode::Esc => {
            if session.view.exit_mode_or_quit() {
                InputResult::Continue
            } else {
                InputResult::Quit
            }
        }

        // === Mode toggles ===
        KeyCode::Char('?') => {
            session.view.toggle_help();
            InputResult::Continue
        }
        KeyCode::Char('e') | KeyCode::Char('/') => {
            session.view.begin_edit();
            InputResult::Continue
        }

        // === Autoplay ===
        KeyCode::Char(' ') => {
            session.toggle_autoplay(now);
            InputResult::Continue
        }
        KeyCode::Char('s') => {
            session.stop_autoplay();
            InputResult::Continue
        }

        // === Navigation ===
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('p') => {
            session.previous();
            InputResult::Continue
        }
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('n') => {
            session.next();
            InputResult::Continue
        }
        KeyCode::Home | KeyCode::Char('g') => {
            session.first();
            InputResult::Continue
        }
        KeyCode::End | KeyCode::Char('G') => {
            session.last();
            InputResult::Continue
        }

        _ => InputResult::Continue,
    }
}

fn handle_edit_key(key: KeyEvent, session: &mut Session, now: Instant) {
    match key.code {
        KeyCode::Esc => {
            session.view.exit_mode_or_quit();
        }
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
            session.view.field = session.view.field.toggle();
        }
        KeyCode::Enter => {
            // Errors are surfaced in the message line by submit()
            let _ = session.submit(now);
            session.view.exit_mode_or_quit();
        }
        KeyCode::Backspace => {
            session.view.active_input_mut().pop();
        }
        KeyCode::Char(c) => {
            session.view.active_input_mut().push(c);
        }
        _ => {}
    }
    session.view.needs_render = true;
}
