//! Feeds a gesture script into a reactor on the tokio clock and collects
//! what the reactor reports.

use std::time::Duration;

use futures::{Stream, StreamExt};
use gesture_core::{GestureReactor, ImperativeGestureReactor, ReactiveGestureReactor, TokioTimer};
use serde::Serialize;
use shared::{
    domain::{ReactorEvent, TICK_BOUND},
    script::{GestureScript, ScriptStep},
};
use tokio::time::{timeout_at, Instant};
use tracing::{debug, info};

use crate::config::Variant;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimedEvent {
    pub elapsed_ms: u64,
    #[serde(flatten)]
    pub event: ReactorEvent,
}

fn feed(reactor: &dyn GestureReactor, step: &ScriptStep) {
    match (step.pan, step.rotate) {
        (Some(pan), Some(rotate)) => reactor.handle_simultaneous(pan, rotate),
        (Some(pan), None) => reactor.handle_pan(pan),
        (None, Some(rotate)) => reactor.handle_rotate(rotate),
        (None, None) => {}
    }
}

async fn drain_until<S, F>(events: &mut S, started: Instant, until: Instant, on_event: &mut F)
where
    S: Stream<Item = ReactorEvent> + Unpin,
    F: FnMut(TimedEvent),
{
    while let Ok(Some(event)) = timeout_at(until, events.next()).await {
        let elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
        on_event(TimedEvent { elapsed_ms, event });
    }
}

/// Replays `script` and reports every event as it arrives. After the last
/// step it keeps listening until a countdown started by that step has had
/// time to finish.
pub async fn replay<F>(
    script: &GestureScript,
    variant: Variant,
    interval: Duration,
    mut on_event: F,
) -> usize
where
    F: FnMut(TimedEvent),
{
    let (reactor, mut events) = match variant {
        Variant::Reactive => {
            let (reactor, events) = ReactiveGestureReactor::with_events(TokioTimer, interval);
            (Box::new(reactor) as Box<dyn GestureReactor>, events)
        }
        Variant::Imperative => {
            let (reactor, events) = ImperativeGestureReactor::with_events(TokioTimer, interval);
            (Box::new(reactor) as Box<dyn GestureReactor>, events)
        }
    };

    info!(
        variant = variant.as_str(),
        steps = script.steps.len(),
        interval_ms = u64::try_from(interval.as_millis()).unwrap_or(u64::MAX),
        "replay: starting"
    );

    let started = Instant::now();
    let mut count = 0usize;
    let mut record = |event: TimedEvent| {
        count += 1;
        on_event(event);
    };

    for (index, step) in script.steps.iter().enumerate() {
        drain_until(&mut events, started, started + step.offset(), &mut record).await;
        debug!(index, at_ms = step.at_ms, "replay: feeding step");
        feed(&*reactor, step);
    }

    // One spare interval past the completion firing.
    let linger = interval * (u32::from(TICK_BOUND) + 2);
    drain_until(&mut events, started, Instant::now() + linger, &mut record).await;
    drop(reactor);

    info!(events = count, "replay: finished");
    count
}

#[cfg(test)]
#[path = "tests/runner_tests.rs"]
mod tests;
