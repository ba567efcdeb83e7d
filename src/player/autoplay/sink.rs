//! Destinations for frames emitted during autoplay.

use std::sync::mpsc::Sender;

use crate::search::Frame;

/// Receives every frame an autoplay run visits, in order.
pub trait StepSink {
    fn emit(&mut self, frame: Frame);
}

impl StepSink for Vec<Frame> {
    fn emit(&mut self, frame: Frame) {
        self.push(frame);
    }
}

impl StepSink for Sender<Frame> {
    fn emit(&mut self, frame: Frame) {
        // Ignore send errors (receiver may have exited)
        let _ = self.send(frame);
    }
}

impl<S: StepSink + ?Sized> StepSink for &mut S {
    fn emit(&mut self, frame: Frame) {
        (**self).emit(frame);
    }
}
