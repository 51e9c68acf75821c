// src/core/timer.rs

//! Deferred delivery of app events. Every simulated delay in the application
//! (canned chat replies, the voice transcript, scan stepping) is a spawned
//! task that sleeps and then pushes a value onto the app event channel. The
//! returned handle lets a screen cancel its pending work on teardown.

use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Handle to a scheduled unit of work.
pub struct TaskHandle {
    handle: JoinHandle<()>,
}

impl TaskHandle {
    /// Stops the task. Cancelling after delivery is a no-op.
    pub fn cancel(&self) {
        self.handle.abort();
    }
}

/// Wraps an already-spawned task. The scan stepping loop needs per-step
/// sends rather than a single deferred value, so it spawns itself and only
/// borrows the cancellation handle.
impl From<JoinHandle<()>> for TaskHandle {
    fn from(handle: JoinHandle<()>) -> Self {
        Self { handle }
    }
}

/// Delivers `value` on `tx` after `delay`. Timers registered with equal
/// delays deliver in registration order. A closed channel drops the value
/// silently; there is no retry.
pub fn schedule<T: Send + 'static>(
    delay: Duration,
    tx: &mpsc::Sender<T>,
    value: T,
) -> TaskHandle {
    let tx = tx.clone();
    let handle = tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        let _ = tx.send(value).await;
    });
    TaskHandle { handle }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn delivers_the_value_after_the_delay() {
        let (tx, mut rx) = mpsc::channel(4);
        schedule(Duration::from_millis(10), &tx, 42u8);
        assert_eq!(rx.recv().await, Some(42));
    }

    #[tokio::test]
    async fn shorter_delays_deliver_first() {
        let (tx, mut rx) = mpsc::channel(4);
        schedule(Duration::from_millis(40), &tx, "slow");
        schedule(Duration::from_millis(10), &tx, "fast");
        assert_eq!(rx.recv().await, Some("fast"));
        assert_eq!(rx.recv().await, Some("slow"));
    }

    #[tokio::test]
    async fn cancelled_tasks_never_deliver() {
        let (tx, mut rx) = mpsc::channel::<u8>(4);
        let handle = schedule(Duration::from_millis(20), &tx, 7);
        handle.cancel();
        tokio::time::sleep(Duration::from_millis(60)).await;
        assert!(rx.try_recv().is_err());
    }
}
