use serde::{Deserialize, Serialize};

/// Number of ticks a countdown session delivers before it completes.
pub const TICK_BOUND: u8 = 3;

/// One of the two tracked gesture channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GestureSource {
    Pan,
    Rotate,
}

impl GestureSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pan => "pan",
            Self::Rotate => "rotate",
        }
    }
}

/// Raw lifecycle phase reported by the host recognizer.
///
/// The host passes this by value at the moment it observes the recognizer,
/// so nothing downstream can see the recognizer's state move on afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GesturePhase {
    Began,
    Changed,
    Ended,
    Cancelled,
    Failed,
}

/// Normalized per-source state. Every other phase is noise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GestureState {
    Started,
    Ended,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StateChange {
    pub source: GestureSource,
    pub state: GestureState,
}

impl StateChange {
    pub fn new(source: GestureSource, state: GestureState) -> Self {
        Self { source, state }
    }
}

/// All normalized updates that belong to one logical instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StateFrame {
    pub pan: Option<GestureState>,
    pub rotate: Option<GestureState>,
}

impl StateFrame {
    pub fn pair(pan: Option<GestureState>, rotate: Option<GestureState>) -> Self {
        Self { pan, rotate }
    }

    pub fn from_change(change: StateChange) -> Self {
        let mut frame = Self::default();
        frame.set(change);
        frame
    }

    pub fn set(&mut self, change: StateChange) {
        match change.source {
            GestureSource::Pan => self.pan = Some(change.state),
            GestureSource::Rotate => self.rotate = Some(change.state),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.pan.is_none() && self.rotate.is_none()
    }
}

/// Three-valued comparison of the latest pan and rotate states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Coincidence {
    BothStarted,
    BothEnded,
    Mismatched,
}

impl Coincidence {
    pub fn compare(pan: GestureState, rotate: GestureState) -> Self {
        match (pan, rotate) {
            (GestureState::Started, GestureState::Started) => Self::BothStarted,
            (GestureState::Ended, GestureState::Ended) => Self::BothEnded,
            _ => Self::Mismatched,
        }
    }
}

/// Notification delivered to whoever listens to a reactor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum ReactorEvent {
    Start,
    Tick { count: u8 },
    Complete,
}

#[cfg(test)]
#[path = "tests/domain_tests.rs"]
mod tests;
