//! Event-loop driver for autoplay.
//!
//! The scheduler holds at most one [`AutoplayRun`] and the deadline of its
//! next tick. The host loop asks [`AutoplayScheduler::poll_timeout`] how long
//! it may block waiting for input, then calls [`AutoplayScheduler::on_tick`];
//! the wait between ticks is the only suspension point.

use std::time::{Duration, Instant};

use tracing::debug;

use super::run::{AutoplayRun, AutoplayStatus};
use super::sink::StepSink;
use crate::player::controller::PlaybackController;

/// Cancellable, timed autoplay for one playback controller.
#[derive(Debug)]
pub struct AutoplayScheduler {
    interval: Duration,
    run: Option<AutoplayRun>,
    deadline: Option<Instant>,
}

impl AutoplayScheduler {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            run: None,
            deadline: None,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Status of the most recent run (`Idle` if none was started).
    pub fn status(&self) -> AutoplayStatus {
        self.run.as_ref().map_or(AutoplayStatus::Idle, AutoplayRun::status)
    }

    /// Whether a run is in flight and still authoritative.
    ///
    /// Turns false as soon as manual navigation cancels the token, before
    /// the run itself observes it at the next checkpoint.
    pub fn is_playing(&self, controller: &PlaybackController) -> bool {
        self.run.as_ref().is_some_and(|run| run.is_active(controller))
    }

    /// Start autoplay, superseding any run in flight.
    pub fn start(
        &mut self,
        controller: &mut PlaybackController,
        sink: &mut impl StepSink,
        now: Instant,
    ) {
        let run = AutoplayRun::start(controller, sink);
        self.deadline = (run.status() == AutoplayStatus::Running).then(|| now + self.interval);
        self.run = Some(run);
    }

    /// Pause: invalidate the active token.
    ///
    /// The run notices at its next checkpoint and ends as `Cancelled`.
    /// Calling this while nothing is playing is a no-op.
    pub fn stop(&mut self, controller: &mut PlaybackController) {
        let Some(token) = self.run.as_ref().and_then(AutoplayRun::token) else {
            return;
        };
        if controller.is_authoritative(token) {
            controller.cancel_autoplay();
            debug!("autoplay stop requested");
        }
    }

    /// Start if nothing is playing, otherwise stop.
    pub fn toggle(
        &mut self,
        controller: &mut PlaybackController,
        sink: &mut impl StepSink,
        now: Instant,
    ) {
        if self.is_playing(controller) {
            self.stop(controller);
        } else {
            self.start(controller, sink, now);
        }
    }

    /// How long the host may wait before the next tick is due.
    ///
    /// `None` when no tick is pending.
    pub fn poll_timeout(&self, now: Instant) -> Option<Duration> {
        self.deadline
            .map(|deadline| deadline.saturating_duration_since(now))
    }

    /// Fire the pending tick if its deadline has passed.
    pub fn on_tick(
        &mut self,
        controller: &mut PlaybackController,
        sink: &mut impl StepSink,
        now: Instant,
    ) -> AutoplayStatus {
        let Some(deadline) = self.deadline else {
            return self.status();
        };
        if now < deadline {
            return self.status();
        }
        let Some(run) = self.run.as_mut() else {
            self.deadline = None;
            return AutoplayStatus::Idle;
        };

        let status = run.tick(controller, sink);
        self.deadline = (status == AutoplayStatus::Running).then(|| now + self.interval);
        status
    }
}
