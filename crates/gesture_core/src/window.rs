//! Latest-state pair for the two sources and its edge detection.

use shared::domain::{Coincidence, GestureState, StateFrame};

/// What applying a frame did to the both-started condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowEdge {
    /// The pair just became `(Started, Started)`.
    Rising,
    /// The pair was `(Started, Started)` and no longer is.
    Falling,
    Unchanged,
}

/// Most recent normalized state of each source.
///
/// A source that has never reported is `None`, and no comparison exists
/// until both have reported at least once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CoincidenceWindow {
    pan: Option<GestureState>,
    rotate: Option<GestureState>,
}

impl CoincidenceWindow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pan(&self) -> Option<GestureState> {
        self.pan
    }

    pub fn rotate(&self) -> Option<GestureState> {
        self.rotate
    }

    pub fn coincidence(&self) -> Option<Coincidence> {
        Some(Coincidence::compare(self.pan?, self.rotate?))
    }

    pub fn both_started(&self) -> bool {
        self.coincidence() == Some(Coincidence::BothStarted)
    }

    /// Applies every update in `frame`, then compares the pair once.
    pub fn apply(&mut self, frame: StateFrame) -> WindowEdge {
        let was_started = self.both_started();

        if let Some(state) = frame.pan {
            self.pan = Some(state);
        }
        if let Some(state) = frame.rotate {
            self.rotate = Some(state);
        }

        match (was_started, self.both_started()) {
            (false, true) => WindowEdge::Rising,
            (true, false) => WindowEdge::Falling,
            _ => WindowEdge::Unchanged,
        }
    }
}

#[cfg(test)]
#[path = "tests/window_tests.rs"]
mod tests;
