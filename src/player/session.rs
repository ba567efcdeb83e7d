//! One interactive player session.
//!
//! Bundles the playback controller, its autoplay scheduler and the view
//! state, and exposes the operations the keyboard handler maps keys to.
//! The session is passed explicitly to every handler; nothing here is
//! global.

use std::time::{Duration, Instant};

use tracing::{debug, info};

use crate::config::PlaybackConfig;
use crate::player::autoplay::{AutoplayScheduler, AutoplayStatus};
use crate::player::controller::PlaybackController;
use crate::player::state::{StatusMessage, ViewState};
use crate::search::{generate, Frame, SearchRequest, ValidationError};

/// State of one running player.
#[derive(Debug)]
pub struct Session {
    pub controller: PlaybackController,
    pub scheduler: AutoplayScheduler,
    pub view: ViewState,
    /// Start autoplay after each successful submission
    pub autoplay_on_submit: bool,
    /// Frames emitted by autoplay since the last draw
    emitted: Vec<Frame>,
}

impl Session {
    pub fn new(playback: &PlaybackConfig, view: ViewState) -> Self {
        Self {
            controller: PlaybackController::new(),
            scheduler: AutoplayScheduler::new(playback.interval()),
            view,
            autoplay_on_submit: playback.autoplay,
            emitted: Vec::new(),
        }
    }

    /// Validate the current input and load its trace.
    ///
    /// On failure the controller is reset to the empty state and the
    /// validation message is shown as-is.
    pub fn submit(&mut self, now: Instant) -> Result<(), ValidationError> {
        self.view.needs_render = true;
        match SearchRequest::parse(&self.view.array_input, &self.view.target_input) {
            Ok(request) => {
                self.emitted.clear();
                let sequence = generate(&request);
                info!(
                    len = request.array().len(),
                    target = request.target(),
                    steps = sequence.len(),
                    "search submitted"
                );
                let steps = sequence.len();
                self.controller.load(sequence);
                self.view.message = Some(StatusMessage::Info(format!(
                    "Loaded {} step{}. Press space to play.",
                    steps,
                    if steps == 1 { "" } else { "s" }
                )));
                if self.autoplay_on_submit {
                    self.start_autoplay(now);
                }
                Ok(())
            }
            Err(err) => {
                info!(error = %err, "search input rejected");
                self.controller.reset();
                self.view.message = Some(StatusMessage::Error(err.to_string()));
                Err(err)
            }
        }
    }

    pub fn is_playing(&self) -> bool {
        self.scheduler.is_playing(&self.controller)
    }

    pub fn start_autoplay(&mut self, now: Instant) {
        self.scheduler
            .start(&mut self.controller, &mut self.emitted, now);
        self.view.needs_render = true;
    }

    pub fn toggle_autoplay(&mut self, now: Instant) {
        self.scheduler
            .toggle(&mut self.controller, &mut self.emitted, now);
        self.view.needs_render = true;
    }

    pub fn stop_autoplay(&mut self) {
        self.scheduler.stop(&mut self.controller);
        self.view.needs_render = true;
    }

    pub fn next(&mut self) {
        self.controller.next();
        self.view.needs_render = true;
    }

    pub fn previous(&mut self) {
        self.controller.previous();
        self.view.needs_render = true;
    }

    pub fn first(&mut self) {
        self.controller.first();
        self.view.needs_render = true;
    }

    pub fn last(&mut self) {
        self.controller.last();
        self.view.needs_render = true;
    }

    /// How long the event loop may block: until the next autoplay tick,
    /// or `idle` when nothing is scheduled.
    pub fn poll_timeout(&self, now: Instant, idle: Duration) -> Duration {
        self.scheduler.poll_timeout(now).unwrap_or(idle).min(idle)
    }

    /// Fire a due autoplay tick.
    pub fn tick(&mut self, now: Instant) -> AutoplayStatus {
        let before = self.scheduler.status();
        let status = self
            .scheduler
            .on_tick(&mut self.controller, &mut self.emitted, now);
        if status != before {
            self.view.needs_render = true;
        }
        status
    }

    /// Frame to draw next: the newest autoplay emission when it still
    /// matches the controller position, the controller's current frame
    /// otherwise. Drains pending emissions.
    pub fn take_display_frame(&mut self) -> Frame {
        let current = self.controller.current_index();
        match self.drain_emitted().pop() {
            Some(frame) if frame.index == current => frame,
            _ => self.controller.current_frame(),
        }
    }

    /// Frames emitted since the last call, oldest first.
    pub fn drain_emitted(&mut self) -> Vec<Frame> {
        let frames = std::mem::take(&mut self.emitted);
        if !frames.is_empty() {
            debug!(count = frames.len(), "autoplay frames emitted");
            self.view.needs_render = true;
        }
        frames
    }
}
