//! Pan + rotate coincidence reactor.
//!
//! Two gesture feeds are normalized to started/ended transitions; when both
//! are started a three-tick countdown runs, and either gesture ending
//! cancels it. [`reactive`] composes this out of streams, [`imperative`]
//! does the same with flags and a timer handle. Both honor one contract,
//! expressed by [`GestureReactor`] and [`ReactorListener`].

use shared::domain::GesturePhase;

pub mod imperative;
pub mod listener;
pub mod reactive;
pub mod session;
pub mod timer;
pub mod tracker;
pub mod window;

pub use imperative::ImperativeGestureReactor;
pub use listener::ReactorListener;
pub use reactive::{coincidence_events, merge_sources, run_coincidence, ReactiveGestureReactor};
pub use session::{CountdownSession, SessionStep};
pub use timer::{ManualTimer, TickStream, TimerCreator, TokioTimer};
pub use window::{CoincidenceWindow, WindowEdge};

/// Input side of a reactor: raw phase snapshots from the host recognizers.
pub trait GestureReactor {
    fn handle_pan(&self, phase: GesturePhase);
    fn handle_rotate(&self, phase: GesturePhase);
    /// Both recognizers reported in the same instant; the pair is evaluated
    /// once, after both updates are applied.
    fn handle_simultaneous(&self, pan: GesturePhase, rotate: GesturePhase);
}

impl<R: GestureReactor + ?Sized> GestureReactor for Box<R> {
    fn handle_pan(&self, phase: GesturePhase) {
        (**self).handle_pan(phase);
    }

    fn handle_rotate(&self, phase: GesturePhase) {
        (**self).handle_rotate(phase);
    }

    fn handle_simultaneous(&self, pan: GesturePhase, rotate: GesturePhase) {
        (**self).handle_simultaneous(pan, rotate);
    }
}
