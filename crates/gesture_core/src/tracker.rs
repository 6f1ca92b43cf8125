//! Normalizes raw recognizer phases into started/ended transitions.

use futures::{Stream, StreamExt};
use shared::domain::{GesturePhase, GestureSource, GestureState, StateChange, StateFrame};
use tracing::trace;

/// Maps a raw phase to the transition it represents, if any.
///
/// Only `Began` and `Ended` are transitions; movement frames and
/// cancelled/failed recognizers are dropped here so the coincidence
/// window never sees them.
pub fn observe(source: GestureSource, phase: GesturePhase) -> Option<StateChange> {
    let state = match phase {
        GesturePhase::Began => GestureState::Started,
        GesturePhase::Ended => GestureState::Ended,
        GesturePhase::Changed | GesturePhase::Cancelled | GesturePhase::Failed => {
            trace!(source = source.as_str(), ?phase, "gesture: dropped phase");
            return None;
        }
    };
    Some(StateChange::new(source, state))
}

/// Normalizes updates from both sources that arrived in the same instant.
/// The result may be empty when every phase was noise.
pub fn observe_frame(pan: Option<GesturePhase>, rotate: Option<GesturePhase>) -> StateFrame {
    let mut frame = StateFrame::default();
    for change in [
        pan.and_then(|phase| observe(GestureSource::Pan, phase)),
        rotate.and_then(|phase| observe(GestureSource::Rotate, phase)),
    ]
    .into_iter()
    .flatten()
    {
        frame.set(change);
    }
    frame
}

/// Stream form of [`observe`] for one source.
pub fn track<S>(source: GestureSource, phases: S) -> impl Stream<Item = StateChange>
where
    S: Stream<Item = GesturePhase>,
{
    phases.filter_map(move |phase| futures::future::ready(observe(source, phase)))
}

#[cfg(test)]
#[path = "tests/tracker_tests.rs"]
mod tests;
