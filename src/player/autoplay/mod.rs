//! Timed autoplay over a playback controller.
//!
//! Autoplay is cancelled by token identity, never by a shared flag:
//! every run holds the token it was issued, and the controller only lets
//! the holder of the current token advance.
//!
//! - `run`: the Idle/Running/{Completed, Cancelled} state machine of one run
//! - `scheduler`: event-loop driver (deadline + poll timeout)
//! - `worker`: thread driver (sleep + lock at checkpoints)
//! - `sink`: where emitted frames go

mod run;
mod scheduler;
mod sink;
mod worker;

pub use run::{AutoplayRun, AutoplayStatus};
pub use scheduler::AutoplayScheduler;
pub use sink::StepSink;
pub use worker::{lock_controller, spawn_autoplay, SharedController};
