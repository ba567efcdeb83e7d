//! Renderer-facing description of a trace position.
//!
//! A [`Frame`] is the `(visual descriptor, explanation, index)` tuple handed
//! to whatever draws the trace. It carries highlight flags only; turning
//! them into terminal styles is the renderer's job.

use serde::Serialize;

use super::step::StepSequence;

/// How a single array cell should be highlighted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Highlight {
    /// Not under examination
    Plain,
    /// Being compared at this step
    Current,
    /// Compared at this step and equal to the target
    Match,
}

/// One array cell with its highlight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Cell {
    pub value: i64,
    pub highlight: Highlight,
}

/// Per-position highlight flags for the whole array.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct VisualDescriptor {
    pub cells: Vec<Cell>,
}

impl VisualDescriptor {
    /// Position of the highlighted cell, if any.
    pub fn focus(&self) -> Option<usize> {
        self.cells
            .iter()
            .position(|c| c.highlight != Highlight::Plain)
    }
}

/// Everything a renderer needs to draw one step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Frame {
    pub visual: VisualDescriptor,
    pub explanation: String,
    /// Position within the step sequence
    pub index: usize,
}

impl Frame {
    /// Explanation shown before any trace is loaded.
    pub const PLACEHOLDER_TEXT: &'static str = "No data yet";

    /// Frame shown when no sequence is loaded.
    pub fn placeholder() -> Self {
        Self {
            visual: VisualDescriptor::default(),
            explanation: Self::PLACEHOLDER_TEXT.to_string(),
            index: 0,
        }
    }
}

/// Describe the step at `position`, clamping out-of-range positions to the
/// last step.
pub fn describe(sequence: &StepSequence, position: usize) -> Frame {
    let position = position.min(sequence.last_position());
    let array = sequence.request().array();
    let target = sequence.request().target();

    let Some(step) = sequence.get(position) else {
        return Frame::placeholder();
    };

    let cells = array
        .iter()
        .enumerate()
        .map(|(i, &value)| {
            let highlight = if i != step.index || step.is_not_found() {
                Highlight::Plain
            } else if step.is_match {
                Highlight::Match
            } else {
                Highlight::Current
            };
            Cell { value, highlight }
        })
        .collect();

    let explanation = match step.compared_value {
        None => "✘ Target not found.".to_string(),
        Some(value) => {
            let mut text = format!(
                "Step {}: Compare target ({}) with arr[{}] = {}",
                step.index + 1,
                target,
                step.index,
                value
            );
            if step.is_match {
                text.push_str("\n\n✔ Target found!");
            }
            text
        }
    };

    Frame {
        visual: VisualDescriptor { cells },
        explanation,
        index: position,
    }
}
