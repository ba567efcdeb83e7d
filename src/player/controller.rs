//! Playback controller
//!
//! Owns the [`PlaybackState`] and mediates every position change. Manual
//! navigation always invalidates the active autoplay token before it
//! applies, so a pending autoplay tick can never overrule the user.
//! Autoplay itself advances only through [`PlaybackController::autoplay_tick`].

use tracing::debug;

use crate::player::state::{AutoplayToken, PlaybackState};
use crate::search::{describe, Frame, Step, StepSequence};

/// Outcome of one autoplay checkpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The token is no longer authoritative; nothing changed
    Cancelled,
    /// Already at the last step; the token has been released
    Completed,
    /// Moved one step forward to the given position
    Advanced(usize),
}

/// Tracks the current position within one step sequence.
#[derive(Debug, Default)]
pub struct PlaybackController {
    state: PlaybackState,
    /// Last token value handed out
    issued: u64,
}

impl PlaybackController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read-only view of the playback state.
    pub fn state(&self) -> &PlaybackState {
        &self.state
    }

    pub fn sequence(&self) -> Option<&StepSequence> {
        self.state.sequence.as_ref()
    }

    pub fn current_index(&self) -> usize {
        self.state.current_index
    }

    /// Number of steps in the loaded sequence (0 when none is loaded).
    pub fn len(&self) -> usize {
        self.sequence().map_or(0, StepSequence::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// True when positioned on the last step of a loaded sequence.
    pub fn is_at_end(&self) -> bool {
        self.sequence()
            .is_some_and(|seq| self.state.current_index == seq.last_position())
    }

    /// Replace the sequence and rewind to its first step.
    pub fn load(&mut self, sequence: StepSequence) {
        self.cancel_autoplay();
        debug!(len = sequence.len(), "loading step sequence");
        self.state.sequence = Some(sequence);
        self.state.current_index = 0;
    }

    /// Drop the sequence and return to the empty state.
    pub fn reset(&mut self) {
        self.cancel_autoplay();
        self.state.sequence = None;
        self.state.current_index = 0;
    }

    /// Move one step forward, stopping at the last step.
    pub fn next(&mut self) {
        self.cancel_autoplay();
        self.step_forward();
    }

    /// Move one step back, stopping at the first step.
    pub fn previous(&mut self) {
        self.cancel_autoplay();
        self.state.current_index = self.state.current_index.saturating_sub(1);
    }

    /// Jump to `index`, clamped into the sequence.
    pub fn go_to(&mut self, index: usize) {
        self.cancel_autoplay();
        if let Some(last) = self.sequence().map(StepSequence::last_position) {
            self.state.current_index = index.min(last);
        }
    }

    pub fn first(&mut self) {
        self.go_to(0);
    }

    pub fn last(&mut self) {
        self.go_to(usize::MAX);
    }

    /// The step at the current position, or [`Step::PLACEHOLDER`].
    pub fn current_step(&self) -> &Step {
        self.sequence()
            .and_then(|seq| seq.get(self.state.current_index))
            .unwrap_or(&Step::PLACEHOLDER)
    }

    /// Renderer tuple for the current position.
    pub fn current_frame(&self) -> Frame {
        match self.sequence() {
            Some(seq) => describe(seq, self.state.current_index),
            None => Frame::placeholder(),
        }
    }

    // === Autoplay seam ===

    /// Cancel any active run and issue a fresh token.
    pub fn begin_autoplay(&mut self) -> AutoplayToken {
        self.cancel_autoplay();
        self.issued += 1;
        let token = AutoplayToken(self.issued);
        self.state.autoplay_token = Some(token);
        debug!(token = token.0, "autoplay token issued");
        token
    }

    /// Invalidate the active token.
    ///
    /// Returns whether a token was active. Calling it again is a no-op.
    pub fn cancel_autoplay(&mut self) -> bool {
        match self.state.autoplay_token.take() {
            Some(token) => {
                debug!(token = token.0, "autoplay token cancelled");
                true
            }
            None => false,
        }
    }

    /// Whether `token` identifies the currently authoritative run.
    pub fn is_authoritative(&self, token: AutoplayToken) -> bool {
        self.state.autoplay_token == Some(token)
    }

    /// One autoplay checkpoint on behalf of `token`.
    pub fn autoplay_tick(&mut self, token: AutoplayToken) -> TickOutcome {
        if !self.is_authoritative(token) {
            return TickOutcome::Cancelled;
        }
        if self.is_empty() || self.is_at_end() {
            self.state.autoplay_token = None;
            return TickOutcome::Completed;
        }
        self.step_forward();
        TickOutcome::Advanced(self.state.current_index)
    }

    fn step_forward(&mut self) {
        if let Some(last) = self.sequence().map(StepSequence::last_position) {
            self.state.current_index = (self.state.current_index + 1).min(last);
        }
    }
}
