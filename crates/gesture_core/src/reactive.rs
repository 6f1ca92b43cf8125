//! Stream-composed reactor: normalized state streams are merged into frames,
//! the frames drive a coincidence window, and each rising edge opens a
//! bounded tick stream that the next falling edge drops.

use std::time::Duration;

use futures::{Stream, StreamExt};
use shared::domain::{GesturePhase, GestureSource, ReactorEvent, StateChange, StateFrame};
use tokio::{sync::mpsc, task::JoinHandle};
use tokio_stream::wrappers::UnboundedReceiverStream;
use tracing::{debug, trace, warn};

use crate::{
    listener::{dispatch, ReactorListener},
    session::{CountdownSession, SessionStep},
    timer::{TickStream, TimerCreator},
    tracker,
    window::{CoincidenceWindow, WindowEdge},
    GestureReactor,
};

/// Combines two independent state streams into one stream of frames.
pub fn merge_sources<P, R>(pan: P, rotate: R) -> impl Stream<Item = StateFrame>
where
    P: Stream<Item = StateChange>,
    R: Stream<Item = StateChange>,
{
    futures::stream::select(pan, rotate).map(StateFrame::from_change)
}

/// Spawns the full pipeline over two raw phase streams and returns the
/// resulting event stream.
pub fn coincidence_events<P, R, T>(
    pan: P,
    rotate: R,
    timer_creator: T,
    interval: Duration,
) -> (JoinHandle<()>, UnboundedReceiverStream<ReactorEvent>)
where
    P: Stream<Item = GesturePhase> + Send + 'static,
    R: Stream<Item = GesturePhase> + Send + 'static,
    T: TimerCreator,
{
    let (events_tx, events_rx) = mpsc::unbounded_channel();
    let frames = merge_sources(
        tracker::track(GestureSource::Pan, pan),
        tracker::track(GestureSource::Rotate, rotate),
    );
    let task = tokio::spawn(run_coincidence(frames, events_tx, timer_creator, interval));
    (task, UnboundedReceiverStream::new(events_rx))
}

struct ActiveCountdown {
    session: CountdownSession,
    ticks: TickStream,
}

async fn next_firing(active: &mut Option<ActiveCountdown>) -> Option<()> {
    match active {
        Some(countdown) => countdown.ticks.next().await,
        None => std::future::pending().await,
    }
}

/// Drives the coincidence timer until `frames` ends.
///
/// Frames are polled before timer firings, so an end that is already
/// queued cancels the countdown ahead of a tick due at the same instant.
pub async fn run_coincidence<S, L, T>(
    frames: S,
    mut listener: L,
    timer_creator: T,
    interval: Duration,
) where
    S: Stream<Item = StateFrame>,
    L: ReactorListener,
    T: TimerCreator,
{
    let mut frames = std::pin::pin!(frames);
    let mut window = CoincidenceWindow::new();
    let mut active: Option<ActiveCountdown> = None;
    let mut sessions = 0u64;

    loop {
        tokio::select! {
            biased;
            frame = frames.next() => {
                let Some(frame) = frame else {
                    break;
                };
                match window.apply(frame) {
                    WindowEdge::Rising => {
                        sessions += 1;
                        debug!(session = sessions, "coincidence: both gestures started");
                        dispatch(&mut listener, ReactorEvent::Start);
                        active = Some(ActiveCountdown {
                            session: CountdownSession::new(sessions),
                            ticks: timer_creator.create(interval),
                        });
                    }
                    WindowEdge::Falling => {
                        if let Some(countdown) = active.take() {
                            debug!(
                                session = countdown.session.id(),
                                ticks = countdown.session.ticks(),
                                "coincidence: countdown cancelled"
                            );
                        }
                    }
                    WindowEdge::Unchanged => {}
                }
            }
            firing = next_firing(&mut active) => {
                let Some(countdown) = active.as_mut() else {
                    continue;
                };
                if firing.is_none() {
                    warn!(session = countdown.session.id(), "coincidence: timer stream ended early");
                    active = None;
                    continue;
                }
                match countdown.session.advance() {
                    SessionStep::Tick(count) => {
                        trace!(session = countdown.session.id(), count, "coincidence: tick");
                        dispatch(&mut listener, ReactorEvent::Tick { count });
                    }
                    SessionStep::Complete => {
                        debug!(session = countdown.session.id(), "coincidence: countdown complete");
                        active = None;
                        dispatch(&mut listener, ReactorEvent::Complete);
                    }
                }
            }
        }
    }

    if let Some(countdown) = active {
        debug!(
            session = countdown.session.id(),
            "coincidence: input closed, dropping countdown"
        );
    }
}

/// Handle to a spawned reactive reactor. Dropping it closes the input and
/// stops the driver task.
pub struct ReactiveGestureReactor {
    frames: mpsc::UnboundedSender<StateFrame>,
    task: JoinHandle<()>,
}

impl ReactiveGestureReactor {
    pub fn spawn<L, T>(listener: L, timer_creator: T, interval: Duration) -> Self
    where
        L: ReactorListener,
        T: TimerCreator,
    {
        let (frames, frames_rx) = mpsc::unbounded_channel();
        let task = tokio::spawn(run_coincidence(
            UnboundedReceiverStream::new(frames_rx),
            listener,
            timer_creator,
            interval,
        ));
        Self { frames, task }
    }

    pub fn with_events<T: TimerCreator>(
        timer_creator: T,
        interval: Duration,
    ) -> (Self, UnboundedReceiverStream<ReactorEvent>) {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        (
            Self::spawn(events_tx, timer_creator, interval),
            UnboundedReceiverStream::new(events_rx),
        )
    }

    /// Closes the input and waits for the driver to finish.
    pub async fn shutdown(self) {
        let Self { frames, task } = self;
        drop(frames);
        let _ = task.await;
    }

    fn push(&self, frame: StateFrame) {
        if frame.is_empty() {
            return;
        }
        let _ = self.frames.send(frame);
    }
}

impl GestureReactor for ReactiveGestureReactor {
    fn handle_pan(&self, phase: GesturePhase) {
        self.push(tracker::observe_frame(Some(phase), None));
    }

    fn handle_rotate(&self, phase: GesturePhase) {
        self.push(tracker::observe_frame(None, Some(phase)));
    }

    fn handle_simultaneous(&self, pan: GesturePhase, rotate: GesturePhase) {
        self.push(tracker::observe_frame(Some(pan), Some(rotate)));
    }
}

#[cfg(test)]
#[path = "tests/reactive_tests.rs"]
mod tests;
