//! Trace playback.
//!
//! Provides the playback controller and autoplay, plus the interactive
//! terminal player built on top of them:
//!
//! - `state`: PlaybackState, autoplay tokens and UI-only view state
//! - `controller`: PlaybackController (navigation + token arbitration)
//! - `autoplay/`: autoplay run state machine and its drivers
//! - `session`: one interactive session (controller + scheduler + view)
//! - `input/`: Keyboard input handling
//! - `render/`: UI rendering (boxes, progress bar, status bar, help)
//!
//! # Usage
//!
//! ```
//! use lsviz::player::PlaybackController;
//! use lsviz::search::{generate, SearchRequest};
//!
//! let mut controller = PlaybackController::new();
//! controller.load(generate(&SearchRequest::new(vec![4, 1, 9, 2, 7], 9)));
//! controller.next();
//! assert_eq!(controller.current_frame().explanation, "Step 2: Compare target (9) with arr[1] = 1");
//! ```

pub mod autoplay;
pub mod controller;
pub(crate) mod input;
mod native;
pub mod render;
pub mod session;
pub mod state;

pub use autoplay::{
    lock_controller, spawn_autoplay, AutoplayRun, AutoplayScheduler, AutoplayStatus,
    SharedController, StepSink,
};
pub use controller::{PlaybackController, TickOutcome};
pub use native::play;
pub use session::Session;
pub use state::{AutoplayToken, InputField, InputResult, Mode, PlaybackState, StatusMessage, ViewState};
