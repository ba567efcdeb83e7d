//! Integration tests for trace generation and manual playback

use lsviz::search::Highlight;
use lsviz::{Frame, PlaybackController, SearchRequest, ValidationError};

use crate::helpers::{loaded_controller, sequence};

// ============================================================================
// Trace Generation
// ============================================================================

#[test]
fn found_trace_stops_at_first_match() {
    let seq = sequence(&[4, 1, 9, 2, 7], 9);

    assert_eq!(seq.len(), 3);
    assert!(seq.steps()[2].is_match);
    assert!(seq.steps()[2].is_final);
    assert!(seq.steps()[..2].iter().all(|s| !s.is_match && !s.is_final));
    assert_eq!(seq.match_index(), Some(2));
}

#[test]
fn missing_target_appends_not_found_step() {
    let seq = sequence(&[1, 2, 3], 5);

    assert_eq!(seq.len(), 4);
    let last = seq.steps()[3];
    assert!(!last.is_match);
    assert!(last.is_final);
    assert_eq!(last.compared_value, None);
    assert!(!seq.found());
}

#[test]
fn empty_array_yields_single_not_found_step() {
    let seq = sequence(&[], 1);

    assert_eq!(seq.len(), 1);
    assert!(!seq.steps()[0].is_match);
    assert!(seq.steps()[0].is_final);
}

#[test]
fn length_properties_hold_across_inputs() {
    let arrays: [&[i64]; 5] = [&[0], &[3, 3], &[-1, 0, 1], &[10, 20, 30, 40], &[7, 8, 7, 8]];
    for array in arrays {
        for target in -2..12 {
            let seq = sequence(array, target);
            match array.iter().position(|&v| v == target) {
                Some(k) => {
                    assert_eq!(seq.len(), k + 1, "{:?} / {}", array, target);
                    assert!(seq.steps()[k].is_match);
                }
                None => assert_eq!(seq.len(), array.len() + 1, "{:?} / {}", array, target),
            }
            assert_eq!(seq.steps().iter().filter(|s| s.is_final).count(), 1);
        }
    }
}

#[test]
fn invalid_text_produces_no_request() {
    let mut controller = PlaybackController::new();

    let result = SearchRequest::parse("a,b", "1");
    assert!(matches!(result, Err(ValidationError::NonIntegerElement { .. })));
    if let Ok(request) = result {
        controller.load(lsviz::generate(&request));
    }

    assert!(controller.is_empty());
    assert_eq!(controller.current_frame(), Frame::placeholder());
}

// ============================================================================
// Manual Navigation
// ============================================================================

#[test]
fn next_nine_times_clamps_to_last_step() {
    let mut controller = loaded_controller(&[4, 1, 9, 2, 7], 9);

    for _ in 0..9 {
        controller.next();
    }

    assert_eq!(controller.current_index(), 2);
    assert!(controller.is_at_end());
}

#[test]
fn previous_at_start_is_idempotent() {
    let mut controller = loaded_controller(&[1, 2, 3], 5);

    controller.previous();
    controller.previous();

    assert_eq!(controller.current_index(), 0);
}

#[test]
fn frames_follow_navigation() {
    let mut controller = loaded_controller(&[4, 1, 9, 2, 7], 9);

    let first = controller.current_frame();
    assert_eq!(first.visual.cells[0].highlight, Highlight::Current);
    assert_eq!(first.explanation, "Step 1: Compare target (9) with arr[0] = 4");

    controller.last();
    let last = controller.current_frame();
    assert_eq!(last.index, 2);
    assert_eq!(last.visual.cells[2].highlight, Highlight::Match);
    assert_eq!(
        last.explanation,
        "Step 3: Compare target (9) with arr[2] = 9\n\n✔ Target found!"
    );

    controller.go_to(1);
    assert_eq!(controller.current_frame().index, 1);
}

#[test]
fn reloading_resets_position() {
    let mut controller = loaded_controller(&[1, 2, 3], 5);
    controller.last();

    controller.load(sequence(&[8, 9], 9));

    assert_eq!(controller.current_index(), 0);
    assert_eq!(controller.len(), 2);
}

#[test]
fn reset_clears_to_placeholder() {
    let mut controller = loaded_controller(&[1, 2, 3], 5);
    controller.next();

    controller.reset();

    assert!(controller.is_empty());
    assert_eq!(controller.current_frame().explanation, "No data yet");
    assert!(controller.current_step().is_placeholder());
}
