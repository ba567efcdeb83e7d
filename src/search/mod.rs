//! Linear search tracing.
//!
//! - `request`: raw text validation into a [`SearchRequest`]
//! - `step`: the immutable trace types ([`Step`], [`StepSequence`])
//! - `generator`: the early-exit scan producing a trace
//! - `frame`: renderer-facing description of a trace position

mod frame;
mod generator;
mod request;
mod step;

pub use frame::{describe, Cell, Frame, Highlight, VisualDescriptor};
pub use generator::generate;
pub use request::{SearchRequest, ValidationError};
pub use step::{Step, StepSequence};
