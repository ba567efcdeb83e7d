//! Step-sequence generation for linear search.
//!
//! The generator scans the array in index order and stops at the first
//! match. Elements after the match are never examined or emitted.

use tracing::debug;

use super::request::SearchRequest;
use super::step::{Step, StepSequence};

/// Build the trace for `request`.
///
/// Pure and total: every request, including an empty array, produces a
/// non-empty sequence. An exhaustive scan without a match is closed by a
/// synthetic "not found" step.
pub fn generate(request: &SearchRequest) -> StepSequence {
    let target = request.target();
    let mut steps = Vec::with_capacity(request.array().len() + 1);

    for (index, &value) in request.array().iter().enumerate() {
        let step = Step::comparison(index, value, target);
        steps.push(step);
        if step.is_match {
            break;
        }
    }

    if !steps.last().is_some_and(|s| s.is_match) {
        steps.push(Step::not_found(request.array().len()));
    }

    let sequence = StepSequence::new(request.clone(), steps);
    debug!(
        len = sequence.len(),
        found = sequence.found(),
        target,
        "generated search trace"
    );
    sequence
}
