//! Input handling for the player.
//!
//! This module handles terminal input events, dispatching them to the
//! appropriate handlers and returning control flow signals.

mod keyboard;

pub use keyboard::handle_key_event;

use std::time::Instant;

use crossterm::event::Event;

use crate::player::session::Session;
use crate::player::state::InputResult;

/// Handle any input event, dispatching to the appropriate handler.
pub fn handle_event(event: Event, session: &mut Session, now: Instant) -> InputResult {
    match event {
        Event::Key(key) => handle_key_event(key, session, now),
        Event::Resize(_, _) => {
            session.view.needs_render = true;
            InputResult::Continue
        }
        _ => InputResult::Continue, // Ignore focus, mouse and paste events
    }
}
