use log::{debug, warn};

use super::swipe::detect_swipe;
use crate::model::{SwipeDirection, TouchPoint};

// Start/end of the current gesture. Neither slot is reset between gestures:
// a missed touchstart means the previous start is reused.
#[derive(Default, Debug, Clone, Copy, PartialEq)]
pub struct TouchState {
    pub start: TouchPoint,
    pub end: TouchPoint,
}

impl TouchState {
    /// Records the first active touch as the gesture start.
    pub fn on_touch_start(&mut self, touches: &[TouchPoint]) {
        match touches.first() {
            Some(p) => {
                self.start = *p;
                debug!("touch start at ({}, {})", p.x, p.y);
            }
            None => warn!("touchstart without active touches, keeping previous start"),
        }
    }

    /// Records the first lifted touch as the gesture end and classifies the gesture.
    pub fn on_touch_end(&mut self, changed: &[TouchPoint]) -> Option<SwipeDirection> {
        let Some(p) = changed.first() else {
            warn!("touchend without changed touches, ignoring");
            return None;
        };
        self.end = *p;
        let dir = self.detect_swipe();
        debug!(
            "touch end at ({}, {}) -> {}",
            p.x,
            p.y,
            dir.map(|d| d.key()).unwrap_or("no gesture")
        );
        dir
    }

    pub fn detect_swipe(&self) -> Option<SwipeDirection> {
        detect_swipe(self.start, self.end)
    }
}
