//! Integration tests for autoplay runs, the scheduler and the thread worker

use std::sync::{mpsc, Arc, Mutex};
use std::time::{Duration, Instant};

use lsviz::player::{lock_controller, spawn_autoplay, AutoplayRun};
use lsviz::{AutoplayScheduler, AutoplayStatus, Frame, PlaybackController};

use crate::helpers::{loaded_controller, sequence};

fn indices(frames: &[Frame]) -> Vec<usize> {
    frames.iter().map(|f| f.index).collect()
}

#[test]
fn autoplay_completes_at_match() {
    let mut controller = loaded_controller(&[4, 1, 9, 2, 7], 9);
    let mut frames: Vec<Frame> = Vec::new();

    let mut run = AutoplayRun::start(&mut controller, &mut frames);
    while run.tick(&mut controller, &mut frames) == AutoplayStatus::Running {}

    assert_eq!(run.status(), AutoplayStatus::Completed);
    assert_eq!(indices(&frames), vec![0, 1, 2]);
    assert_eq!(controller.current_index(), 2);
}

#[test]
fn restarting_autoplay_leaves_one_active_run() {
    let mut controller = loaded_controller(&[1, 2, 3, 4, 5], 0);
    let mut frames: Vec<Frame> = Vec::new();

    let mut old = AutoplayRun::start(&mut controller, &mut frames);
    old.tick(&mut controller, &mut frames);
    let mut new = AutoplayRun::start(&mut controller, &mut frames);

    // Both runs get ticked, interleaved, as two timers would
    loop {
        let a = old.tick(&mut controller, &mut frames);
        let b = new.tick(&mut controller, &mut frames);
        if a.is_terminal() && b.is_terminal() {
            break;
        }
    }

    assert_eq!(old.status(), AutoplayStatus::Cancelled);
    assert_eq!(new.status(), AutoplayStatus::Completed);
    // 0, 1 from the old run; the new run re-emits 1 and continues without gaps
    assert_eq!(indices(&frames), vec![0, 1, 1, 2, 3, 4, 5]);
}

#[test]
fn manual_navigation_cancels_scheduled_autoplay() {
    let mut controller = loaded_controller(&[1, 2, 3, 4], 9);
    let mut scheduler = AutoplayScheduler::new(Duration::from_millis(100));
    let mut frames: Vec<Frame> = Vec::new();
    let t0 = Instant::now();

    scheduler.start(&mut controller, &mut frames, t0);
    scheduler.on_tick(&mut controller, &mut frames, t0 + Duration::from_millis(100));
    controller.next();

    let status = scheduler.on_tick(&mut controller, &mut frames, t0 + Duration::from_millis(200));

    assert_eq!(status, AutoplayStatus::Cancelled);
    assert_eq!(controller.current_index(), 2);
    assert_eq!(indices(&frames), vec![0, 1]);
    assert_eq!(scheduler.poll_timeout(t0 + Duration::from_millis(300)), None);
}

#[test]
fn scheduler_waits_for_deadline() {
    let mut controller = loaded_controller(&[1, 2], 2);
    let mut scheduler = AutoplayScheduler::new(Duration::from_millis(100));
    let mut frames: Vec<Frame> = Vec::new();
    let t0 = Instant::now();

    scheduler.start(&mut controller, &mut frames, t0);
    scheduler.on_tick(&mut controller, &mut frames, t0 + Duration::from_millis(50));
    assert_eq!(controller.current_index(), 0);
    assert_eq!(
        scheduler.poll_timeout(t0 + Duration::from_millis(50)),
        Some(Duration::from_millis(50))
    );

    scheduler.on_tick(&mut controller, &mut frames, t0 + Duration::from_millis(100));
    assert_eq!(controller.current_index(), 1);
}

#[test]
fn autoplay_on_empty_controller_emits_placeholder() {
    let mut controller = PlaybackController::new();
    let mut frames: Vec<Frame> = Vec::new();

    let run = AutoplayRun::start(&mut controller, &mut frames);

    assert_eq!(run.status(), AutoplayStatus::Completed);
    assert_eq!(frames, vec![Frame::placeholder()]);
}

#[test]
fn worker_superseded_by_newer_worker() {
    let mut controller = PlaybackController::new();
    controller.load(sequence(&[1, 2, 3, 4, 5, 6], 0));
    let controller = Arc::new(Mutex::new(controller));
    let (old_tx, old_rx) = mpsc::channel::<Frame>();
    let (new_tx, new_rx) = mpsc::channel::<Frame>();

    let old = spawn_autoplay(Arc::clone(&controller), Duration::from_millis(200), old_tx);
    let new = spawn_autoplay(Arc::clone(&controller), Duration::from_millis(1), new_tx);

    assert_eq!(new.join().unwrap(), AutoplayStatus::Completed);
    assert_eq!(old.join().unwrap(), AutoplayStatus::Cancelled);

    // The old worker only emitted its starting frame
    assert_eq!(indices(&old_rx.iter().collect::<Vec<_>>()), vec![0]);
    assert_eq!(
        indices(&new_rx.iter().collect::<Vec<_>>()),
        vec![0, 1, 2, 3, 4, 5, 6]
    );
    assert_eq!(lock_controller(&controller).current_index(), 6);
}
