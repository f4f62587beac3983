//! Cancellable scheduled tasks delivering firings over a channel.

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior, interval_at, sleep};
use tracing::{debug, trace};

/// Shortest period a repeating task runs at.
pub const MIN_PERIOD: Duration = Duration::from_millis(1);

/// Identifier of one scheduled task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId(u64);

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One firing of a scheduled task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerFired<K> {
    /// Task that fired.
    pub id: TaskId,
    /// Caller-defined purpose of the task.
    pub kind: K,
}

/// Owning handle of a scheduled task.
///
/// Dropping the handle aborts the task. A firing already queued before the
/// abort is still delivered; receivers compare its id with the handles they
/// hold.
#[must_use = "dropping a TaskHandle cancels the task"]
pub struct TaskHandle {
    id: TaskId,
    task: JoinHandle<()>,
}

impl TaskHandle {
    /// Returns task id.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns whether `fired` was produced by this task.
    #[must_use]
    pub fn owns<K>(&self, fired: &TimerFired<K>) -> bool {
        fired.id == self.id
    }

    /// Cancels the task.
    pub fn cancel(self) {
        drop(self);
    }
}

impl fmt::Debug for TaskHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TaskHandle")
            .field("id", &self.id)
            .field("finished", &self.task.is_finished())
            .finish()
    }
}

impl Drop for TaskHandle {
    fn drop(&mut self) {
        if !self.task.is_finished() {
            debug!(task = %self.id, "Cancelling scheduled task");
        }
        self.task.abort();
    }
}

/// Spawns one-shot and repeating tasks on the tokio runtime.
pub struct Scheduler<K> {
    tx: mpsc::UnboundedSender<TimerFired<K>>,
    next_id: Arc<AtomicU64>,
}

impl<K> Clone for Scheduler<K> {
    fn clone(&self) -> Self {
        Self {
            tx: self.tx.clone(),
            next_id: self.next_id.clone(),
        }
    }
}

impl<K> Scheduler<K>
where
    K: fmt::Debug + Copy + Send + 'static,
{
    /// Creates a scheduler and the receiver its firings arrive on.
    #[must_use]
    pub fn new() -> (Self, mpsc::UnboundedReceiver<TimerFired<K>>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let scheduler = Self {
            tx,
            next_id: Arc::new(AtomicU64::new(1)),
        };
        (scheduler, rx)
    }

    fn next_id(&self) -> TaskId {
        TaskId(self.next_id.fetch_add(1, Ordering::Relaxed))
    }

    /// Fires `kind` once after `delay`.
    pub fn once(&self, delay: Duration, kind: K) -> TaskHandle {
        let id = self.next_id();
        let tx = self.tx.clone();

        debug!(task = %id, ?kind, delay_ms = delay.as_millis(), "Scheduling one-shot task");

        let task = tokio::spawn(async move {
            sleep(delay).await;
            if tx.send(TimerFired { id, kind }).is_err() {
                trace!(task = %id, "Timer channel closed");
            }
        });

        TaskHandle { id, task }
    }

    /// Fires `kind` every `period`, first after one full period.
    ///
    /// A zero `period` is raised to [`MIN_PERIOD`].
    pub fn every(&self, period: Duration, kind: K) -> TaskHandle {
        let period = period.max(MIN_PERIOD);
        let id = self.next_id();
        let tx = self.tx.clone();

        debug!(task = %id, ?kind, period_ms = period.as_millis(), "Scheduling repeating task");

        let task = tokio::spawn(async move {
            let mut ticker = interval_at(Instant::now() + period, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                ticker.tick().await;
                if tx.send(TimerFired { id, kind }).is_err() {
                    trace!(task = %id, "Timer channel closed");
                    break;
                }
            }
        });

        TaskHandle { id, task }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Kind {
        Tick,
        Done,
    }

    #[tokio::test(start_paused = true)]
    async fn test_once_fires_after_delay() {
        let (scheduler, mut rx) = Scheduler::new();
        let start = Instant::now();

        let handle = scheduler.once(Duration::from_millis(300), Kind::Done);
        let fired = rx.recv().await.unwrap();

        assert_eq!(fired.kind, Kind::Done);
        assert!(handle.owns(&fired));
        assert_eq!(start.elapsed(), Duration::from_millis(300));
    }

    #[tokio::test(start_paused = true)]
    async fn test_every_repeats_with_same_id() {
        let (scheduler, mut rx) = Scheduler::new();
        let start = Instant::now();

        let handle = scheduler.every(Duration::from_millis(100), Kind::Tick);
        for expected in 1..=3u64 {
            let fired = rx.recv().await.unwrap();
            assert_eq!(fired.id, handle.id());
            assert_eq!(start.elapsed(), Duration::from_millis(100 * expected));
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_every_with_zero_period_still_ticks() {
        let (scheduler, mut rx) = Scheduler::new();
        let start = Instant::now();

        let handle = scheduler.every(Duration::ZERO, Kind::Tick);
        for expected in 1..=2u32 {
            let fired = rx.recv().await.unwrap();
            assert!(handle.owns(&fired));
            assert_eq!(start.elapsed(), MIN_PERIOD * expected);
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropping_handle_cancels() {
        let (scheduler, mut rx) = Scheduler::new();

        let handle = scheduler.once(Duration::from_millis(50), Kind::Done);
        drop(handle);
        sleep(Duration::from_millis(200)).await;

        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_stops_repeating_task() {
        let (scheduler, mut rx) = Scheduler::new();

        let handle = scheduler.every(Duration::from_millis(10), Kind::Tick);
        rx.recv().await.unwrap();
        handle.cancel();
        sleep(Duration::from_millis(100)).await;

        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_ids_are_unique() {
        let (scheduler, _rx) = Scheduler::<Kind>::new();
        let a = scheduler.once(Duration::from_secs(1), Kind::Done);
        let b = scheduler.clone().every(Duration::from_secs(1), Kind::Tick);

        assert_ne!(a.id(), b.id());
        assert!(!b.owns(&TimerFired {
            id: a.id(),
            kind: Kind::Done
        }));
    }
}
