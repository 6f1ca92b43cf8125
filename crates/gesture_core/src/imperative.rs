//! Flag-and-handle reactor: two presence flags, one optional timer task,
//! and a session id checked under the lock on every firing.

use std::{
    sync::{Arc, Mutex, MutexGuard},
    time::Duration,
};

use futures::StreamExt;
use shared::domain::{GesturePhase, GestureState, ReactorEvent, StateFrame};
use tokio::{sync::mpsc, task::JoinHandle};
use tokio_stream::wrappers::UnboundedReceiverStream;
use tracing::{debug, trace};

use crate::{
    listener::ReactorListener,
    session::{CountdownSession, SessionStep},
    timer::TimerCreator,
    tracker, GestureReactor,
};

struct ActiveTimer {
    countdown: CountdownSession,
    task: JoinHandle<()>,
}

struct ImperativeState<L> {
    listener: L,
    pan_present: bool,
    rotate_present: bool,
    timer: Option<ActiveTimer>,
    sessions: u64,
}

impl<L: ReactorListener> ImperativeState<L> {
    fn stop_timer_if_needed(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.task.abort();
            debug!(
                session = timer.countdown.id(),
                ticks = timer.countdown.ticks(),
                "imperative: countdown cancelled"
            );
        }
    }

    /// Returns `false` once the firing task should stop.
    fn on_timer_fired(&mut self, session: u64) -> bool {
        let Some(timer) = self.timer.as_mut() else {
            return false;
        };
        if timer.countdown.id() != session {
            return false;
        }

        match timer.countdown.advance() {
            SessionStep::Tick(count) => {
                trace!(session, count, "imperative: tick");
                self.listener.did_tick(count);
                true
            }
            SessionStep::Complete => {
                debug!(session, "imperative: countdown complete");
                self.timer = None;
                self.listener.did_complete();
                false
            }
        }
    }
}

/// Imperative counterpart of [`crate::reactive::ReactiveGestureReactor`].
///
/// Handlers and timer firings share one lock and the listener is called
/// while it is held, so a listener must not call back into the reactor.
pub struct ImperativeGestureReactor<L: ReactorListener> {
    state: Arc<Mutex<ImperativeState<L>>>,
    timer_creator: Arc<dyn TimerCreator>,
    interval: Duration,
}

impl<L: ReactorListener> ImperativeGestureReactor<L> {
    pub fn new<T: TimerCreator>(listener: L, timer_creator: T, interval: Duration) -> Self {
        Self {
            state: Arc::new(Mutex::new(ImperativeState {
                listener,
                pan_present: false,
                rotate_present: false,
                timer: None,
                sessions: 0,
            })),
            timer_creator: Arc::new(timer_creator),
            interval,
        }
    }

    fn lock(&self) -> MutexGuard<'_, ImperativeState<L>> {
        match self.state.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    fn handle_frame(&self, frame: StateFrame) {
        if frame.is_empty() {
            return;
        }

        let mut state = self.lock();
        let mut became_present = false;
        let mut ended = false;

        match frame.pan {
            Some(GestureState::Started) if !state.pan_present => {
                state.pan_present = true;
                became_present = true;
            }
            Some(GestureState::Ended) => {
                state.pan_present = false;
                ended = true;
            }
            _ => {}
        }
        match frame.rotate {
            Some(GestureState::Started) if !state.rotate_present => {
                state.rotate_present = true;
                became_present = true;
            }
            Some(GestureState::Ended) => {
                state.rotate_present = false;
                ended = true;
            }
            _ => {}
        }

        if ended {
            state.stop_timer_if_needed();
        }
        if became_present {
            self.start_if_both_present(&mut state);
        }
    }

    fn start_if_both_present(&self, state: &mut ImperativeState<L>) {
        if !(state.pan_present && state.rotate_present) || state.timer.is_some() {
            return;
        }

        state.sessions += 1;
        let session = state.sessions;
        debug!(session, "imperative: both gestures present");
        state.listener.did_start();

        let mut firings = self.timer_creator.create(self.interval);
        let shared = Arc::clone(&self.state);
        let task = tokio::spawn(async move {
            while firings.next().await.is_some() {
                let mut guard = match shared.lock() {
                    Ok(guard) => guard,
                    Err(poisoned) => poisoned.into_inner(),
                };
                if !guard.on_timer_fired(session) {
                    break;
                }
            }
        });

        state.timer = Some(ActiveTimer {
            countdown: CountdownSession::new(session),
            task,
        });
    }
}

impl ImperativeGestureReactor<mpsc::UnboundedSender<ReactorEvent>> {
    pub fn with_events<T: TimerCreator>(
        timer_creator: T,
        interval: Duration,
    ) -> (Self, UnboundedReceiverStream<ReactorEvent>) {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        (
            Self::new(events_tx, timer_creator, interval),
            UnboundedReceiverStream::new(events_rx),
        )
    }
}

impl<L: ReactorListener> GestureReactor for ImperativeGestureReactor<L> {
    fn handle_pan(&self, phase: GesturePhase) {
        self.handle_frame(tracker::observe_frame(Some(phase), None));
    }

    fn handle_rotate(&self, phase: GesturePhase) {
        self.handle_frame(tracker::observe_frame(None, Some(phase)));
    }

    fn handle_simultaneous(&self, pan: GesturePhase, rotate: GesturePhase) {
        self.handle_frame(tracker::observe_frame(Some(pan), Some(rotate)));
    }
}

impl<L: ReactorListener> Drop for ImperativeGestureReactor<L> {
    fn drop(&mut self) {
        self.lock().stop_timer_if_needed();
    }
}

#[cfg(test)]
#[path = "tests/imperative_tests.rs"]
mod tests;
