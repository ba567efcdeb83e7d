//! Background thread driver for autoplay.
//!
//! Runs one [`AutoplayRun`] on a dedicated thread, sleeping between
//! ticks and taking the controller lock only at checkpoints. Any other
//! holder of the controller (the main thread, a Ctrl-C handler, a newer
//! worker) can pre-empt the run by cancelling or replacing its token.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use super::run::{AutoplayRun, AutoplayStatus};
use super::sink::StepSink;
use crate::player::controller::PlaybackController;

/// Controller handle shared between the main thread and autoplay workers.
pub type SharedController = Arc<Mutex<PlaybackController>>;

/// Lock the controller, recovering from a poisoned lock.
///
/// The controller keeps its invariants across every operation, so state
/// left behind by a panicking holder is still consistent.
pub fn lock_controller(controller: &Mutex<PlaybackController>) -> MutexGuard<'_, PlaybackController> {
    controller.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Spawn an autoplay worker.
///
/// The run is started (and the current step emitted) before this function
/// returns, so two consecutive calls always leave the second run
/// authoritative. The handle yields the run's terminal status.
pub fn spawn_autoplay<S>(
    controller: SharedController,
    interval: Duration,
    mut sink: S,
) -> JoinHandle<AutoplayStatus>
where
    S: StepSink + Send + 'static,
{
    let mut run = AutoplayRun::start(&mut lock_controller(&controller), &mut sink);

    thread::spawn(move || {
        while run.status() == AutoplayStatus::Running {
            thread::sleep(interval);
            run.tick(&mut lock_controller(&controller), &mut sink);
        }
        run.status()
    })
}
