//! Trace types produced by the step generator.

use serde::Serialize;

use super::request::SearchRequest;

/// One recorded comparison, or the terminal outcome, of a search trace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Step {
    /// Array position examined (`array.len()` on the terminal "not found" step)
    pub index: usize,
    /// Value read at `index`, `None` on the terminal "not found" step
    pub compared_value: Option<i64>,
    /// Whether `compared_value` equals the target
    pub is_match: bool,
    /// True only on the last step of a sequence
    pub is_final: bool,
}

impl Step {
    /// Stand-in returned when no sequence is loaded.
    pub const PLACEHOLDER: Step = Step {
        index: 0,
        compared_value: None,
        is_match: false,
        is_final: false,
    };

    pub(crate) fn comparison(index: usize, value: i64, target: i64) -> Self {
        let is_match = value == target;
        Self {
            index,
            compared_value: Some(value),
            is_match,
            is_final: is_match,
        }
    }

    pub(crate) fn not_found(array_len: usize) -> Self {
        Self {
            index: array_len,
            compared_value: None,
            is_match: false,
            is_final: true,
        }
    }

    /// True for the synthetic "not found" step that closes an exhaustive scan.
    pub fn is_not_found(&self) -> bool {
        self.is_final && !self.is_match
    }

    /// True for [`Step::PLACEHOLDER`].
    pub fn is_placeholder(&self) -> bool {
        *self == Self::PLACEHOLDER
    }
}

/// The complete, immutable trace produced for one [`SearchRequest`].
///
/// Always non-empty. Exactly one step is final and it is the last one;
/// when the target was found that final step is also the match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepSequence {
    request: SearchRequest,
    steps: Vec<Step>,
    found: bool,
}

impl StepSequence {
    pub(crate) fn new(request: SearchRequest, steps: Vec<Step>) -> Self {
        debug_assert!(!steps.is_empty(), "a step sequence is never empty");
        debug_assert_eq!(steps.iter().filter(|s| s.is_final).count(), 1);
        debug_assert!(steps.last().is_some_and(|s| s.is_final));
        let found = steps.iter().any(|s| s.is_match);
        Self {
            request,
            steps,
            found,
        }
    }

    /// The request this trace was generated from.
    pub fn request(&self) -> &SearchRequest {
        &self.request
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn get(&self, position: usize) -> Option<&Step> {
        self.steps.get(position)
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Always false for a generated sequence; present for API symmetry.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Position of the final step.
    pub fn last_position(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }

    /// Whether some step matched the target.
    pub fn found(&self) -> bool {
        self.found
    }

    /// Array index of the first occurrence of the target, if found.
    pub fn match_index(&self) -> Option<usize> {
        self.steps.iter().find(|s| s.is_match).map(|s| s.index)
    }
}
