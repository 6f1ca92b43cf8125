//! Timer sources a reactor can be driven by.

use std::{
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc, Mutex,
    },
    time::Duration,
};

use futures::{stream::BoxStream, StreamExt};
use tokio::{
    sync::mpsc,
    time::{interval_at, Instant},
};
use tokio_stream::wrappers::{IntervalStream, UnboundedReceiverStream};

/// Repeating firings of one timer; dropping the stream invalidates it.
pub type TickStream = BoxStream<'static, ()>;

const MIN_PERIOD: Duration = Duration::from_millis(1);

pub trait TimerCreator: Send + Sync + 'static {
    /// Creates a timer whose first firing is one `period` from now.
    fn create(&self, period: Duration) -> TickStream;
}

impl<T: TimerCreator + ?Sized> TimerCreator for Arc<T> {
    fn create(&self, period: Duration) -> TickStream {
        (**self).create(period)
    }
}

/// Wall-clock timer on the tokio time driver.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioTimer;

impl TimerCreator for TokioTimer {
    fn create(&self, period: Duration) -> TickStream {
        let period = period.max(MIN_PERIOD);
        IntervalStream::new(interval_at(Instant::now() + period, period))
            .map(|_| ())
            .boxed()
    }
}

/// Timer fired by hand. Clones share the same underlying timers, so a test
/// keeps one clone and hands another to the reactor.
#[derive(Debug, Clone, Default)]
pub struct ManualTimer {
    current: Arc<Mutex<Option<mpsc::UnboundedSender<()>>>>,
    created: Arc<AtomicUsize>,
}

impl ManualTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fires the most recently created timer. Returns `false` when there is
    /// no live timer to fire.
    pub fn fire(&self) -> bool {
        let guard = match self.current.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        guard
            .as_ref()
            .map(|tx| tx.send(()).is_ok())
            .unwrap_or(false)
    }

    /// Number of timers created so far.
    pub fn created(&self) -> usize {
        self.created.load(Ordering::SeqCst)
    }
}

impl TimerCreator for ManualTimer {
    fn create(&self, _period: Duration) -> TickStream {
        let (tx, rx) = mpsc::unbounded_channel();
        let mut guard = match self.current.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        *guard = Some(tx);
        self.created.fetch_add(1, Ordering::SeqCst);
        UnboundedReceiverStream::new(rx).boxed()
    }
}

#[cfg(test)]
#[path = "tests/timer_tests.rs"]
mod tests;
