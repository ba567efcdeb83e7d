//! Search request construction and input validation.
//!
//! Converts the raw text typed by the user into a well-formed
//! [`SearchRequest`], or a [`ValidationError`] whose message is shown
//! to the user verbatim.

use std::num::{IntErrorKind, ParseIntError};

use serde::Serialize;

/// Errors produced while validating raw search input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Your list must contain only integers.")]
    NonIntegerElement { element: String },

    #[error("Target is required.")]
    EmptyTarget,

    #[error("Target must be an integer.")]
    NonIntegerTarget { target: String },

    #[error("Integers must be between {} and {}.", i64::MIN, i64::MAX)]
    IntegerOutOfRange { value: String },
}

/// A validated array/target pair. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchRequest {
    array: Vec<i64>,
    target: i64,
}

impl SearchRequest {
    /// Create a request from already-typed values.
    pub fn new(array: Vec<i64>, target: i64) -> Self {
        Self { array, target }
    }

    /// Validate raw text input.
    ///
    /// The list is split on commas; each piece is trimmed and empty pieces
    /// are skipped, so `"4, 1,,9 "` yields `[4, 1, 9]`. The target is
    /// trimmed and must be a non-empty integer.
    pub fn parse(array_text: &str, target_text: &str) -> Result<Self, ValidationError> {
        let array = parse_array(array_text)?;
        let target = parse_target(target_text)?;
        Ok(Self { array, target })
    }

    /// The array to scan.
    pub fn array(&self) -> &[i64] {
        &self.array
    }

    /// The value searched for.
    pub fn target(&self) -> i64 {
        self.target
    }
}

fn parse_array(text: &str) -> Result<Vec<i64>, ValidationError> {
    text.split(',')
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(|piece| {
            piece.parse::<i64>().map_err(|e| {
                out_of_range(&e, piece).unwrap_or_else(|| ValidationError::NonIntegerElement {
                    element: piece.to_string(),
                })
            })
        })
        .collect()
}

fn parse_target(text: &str) -> Result<i64, ValidationError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyTarget);
    }
    trimmed.parse::<i64>().map_err(|e| {
        out_of_range(&e, trimmed).unwrap_or_else(|| ValidationError::NonIntegerTarget {
            target: trimmed.to_string(),
        })
    })
}

/// A well-formed integer that does not fit in `i64`.
fn out_of_range(err: &ParseIntError, text: &str) -> Option<ValidationError> {
    matches!(err.kind(), IntErrorKind::PosOverflow | IntErrorKind::NegOverflow).then(|| {
        ValidationError::IntegerOutOfRange {
            value: text.to_string(),
        }
    })
}
