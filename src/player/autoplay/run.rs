//! State machine for a single autoplay run.
//!
//! A run goes `Running → {Completed, Cancelled}` and never comes back.
//! It holds nothing but its token: all position changes go through the
//! controller, which decides whether the token is still authoritative.

use tracing::debug;

use super::sink::StepSink;
use crate::player::controller::{PlaybackController, TickOutcome};
use crate::player::state::AutoplayToken;

/// Lifecycle of autoplay as seen by a driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AutoplayStatus {
    /// No run has been started
    #[default]
    Idle,
    /// Waiting for the next tick
    Running,
    /// Reached the last step
    Completed,
    /// Superseded or stopped before reaching the end
    Cancelled,
}

impl AutoplayStatus {
    pub fn is_terminal(self) -> bool {
        matches!(self, AutoplayStatus::Completed | AutoplayStatus::Cancelled)
    }
}

/// One autoplay run bound to a token.
#[derive(Debug)]
pub struct AutoplayRun {
    token: Option<AutoplayToken>,
    status: AutoplayStatus,
}

impl AutoplayRun {
    /// Start a run: supersede any active one, then emit the current step.
    ///
    /// On an empty controller the placeholder frame is emitted once and the
    /// run is already `Completed`.
    pub fn start(controller: &mut PlaybackController, sink: &mut impl StepSink) -> Self {
        if controller.is_empty() {
            controller.cancel_autoplay();
            sink.emit(controller.current_frame());
            debug!("autoplay started on empty trace, nothing to play");
            return Self {
                token: None,
                status: AutoplayStatus::Completed,
            };
        }

        let token = controller.begin_autoplay();
        sink.emit(controller.current_frame());
        debug!(
            token = token.0,
            from = controller.current_index(),
            "autoplay running"
        );
        Self {
            token: Some(token),
            status: AutoplayStatus::Running,
        }
    }

    pub fn status(&self) -> AutoplayStatus {
        self.status
    }

    pub fn token(&self) -> Option<AutoplayToken> {
        self.token
    }

    /// Whether this run is running and still authoritative.
    pub fn is_active(&self, controller: &PlaybackController) -> bool {
        self.status == AutoplayStatus::Running
            && self.token.is_some_and(|t| controller.is_authoritative(t))
    }

    /// Checkpoint after one wait interval.
    ///
    /// Emits exactly one frame when the controller advanced, nothing
    /// otherwise. Ticking a finished run is a no-op.
    pub fn tick(
        &mut self,
        controller: &mut PlaybackController,
        sink: &mut impl StepSink,
    ) -> AutoplayStatus {
        if self.status != AutoplayStatus::Running {
            return self.status;
        }
        let Some(token) = self.token else {
            self.status = AutoplayStatus::Completed;
            return self.status;
        };

        match controller.autoplay_tick(token) {
            TickOutcome::Cancelled => {
                debug!(token = token.0, "autoplay observed cancellation");
                self.status = AutoplayStatus::Cancelled;
            }
            TickOutcome::Completed => {
                debug!(token = token.0, "autoplay completed");
                self.status = AutoplayStatus::Completed;
            }
            TickOutcome::Advanced(_) => sink.emit(controller.current_frame()),
        }
        self.status
    }
}
