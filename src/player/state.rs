//! Player state management
//!
//! Contains the `PlaybackState` owned by the playback controller, the
//! autoplay token type, and the UI-only `ViewState` used by the
//! interactive player.

use crate::search::StepSequence;

/// Result of processing an input event.
///
/// This enum is returned by input handlers to signal control flow
/// decisions to the main loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputResult {
    /// Continue normal playback/rendering
    Continue,
    /// Exit the player normally
    Quit,
}

/// Opaque identity of one autoplay run.
///
/// Tokens are issued from a per-controller counter and never reused, so a
/// superseded run can never mistake the current token for its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AutoplayToken(pub(crate) u64);

/// Position within the loaded trace.
///
/// Whenever a sequence is loaded `current_index < sequence.len()`;
/// without one `current_index == 0`. Only
/// [`PlaybackController`](crate::player::PlaybackController) mutates it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlaybackState {
    pub(crate) sequence: Option<StepSequence>,
    pub(crate) current_index: usize,
    pub(crate) autoplay_token: Option<AutoplayToken>,
}

impl PlaybackState {
    /// The loaded trace, if any.
    pub fn sequence(&self) -> Option<&StepSequence> {
        self.sequence.as_ref()
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Token of the authoritative autoplay run, if one is active.
    pub fn autoplay_token(&self) -> Option<AutoplayToken> {
        self.autoplay_token
    }
}

/// UI mode for the interactive player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Navigating the trace
    #[default]
    Normal,
    /// Typing a new array/target
    Edit,
    /// Help overlay is visible
    Help,
}

/// Which input field receives typed characters in edit mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputField {
    #[default]
    Array,
    Target,
}

impl InputField {
    pub fn toggle(self) -> Self {
        match self {
            InputField::Array => InputField::Target,
            InputField::Target => InputField::Array,
        }
    }
}

/// Message shown in the status line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusMessage {
    Info(String),
    Error(String),
}

/// UI-only state of the interactive player.
///
/// Holds nothing the playback controller depends on.
#[derive(Debug, Default)]
pub struct ViewState {
    pub mode: Mode,
    /// Raw list text, kept so a failed submission can be corrected
    pub array_input: String,
    /// Raw target text
    pub target_input: String,
    pub field: InputField,
    pub message: Option<StatusMessage>,
    /// True when screen needs to be redrawn
    pub needs_render: bool,
}

impl ViewState {
    /// Create a view pre-filled with the given raw input.
    pub fn new(array_input: impl Into<String>, target_input: impl Into<String>) -> Self {
        Self {
            array_input: array_input.into(),
            target_input: target_input.into(),
            needs_render: true,
            ..Self::default()
        }
    }

    /// Toggle help overlay visibility.
    pub fn toggle_help(&mut self) {
        self.mode = if self.mode == Mode::Help {
            Mode::Normal
        } else {
            Mode::Help
        };
        self.needs_render = true;
    }

    /// Enter edit mode with the list field focused.
    pub fn begin_edit(&mut self) {
        self.mode = Mode::Edit;
        self.field = InputField::Array;
        self.needs_render = true;
    }

    /// The raw text of the focused field.
    pub fn active_input_mut(&mut self) -> &mut String {
        match self.field {
            InputField::Array => &mut self.array_input,
            InputField::Target => &mut self.target_input,
        }
    }

    /// Exit current mode or quit.
    ///
    /// Returns true if a mode was exited, false if should quit.
    pub fn exit_mode_or_quit(&mut self) -> bool {
        if self.mode == Mode::Normal {
            return false;
        }
        self.mode = Mode::Normal;
        self.needs_render = true;
        true
    }
}
