//! Once-per-second tick source bound to a session's lifetime.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior, interval_at};

const TICK_BUFFER: usize = 8;

/// A single repeating task that emits ticks until cancelled or dropped.
///
/// The owner awaits [`SessionTicker::next`] and feeds each tick to the
/// session. After [`SessionTicker::cancel`] no further tick is delivered, even
/// ones already buffered.
#[derive(Debug)]
pub struct SessionTicker {
    task: Option<JoinHandle<()>>,
    ticks: mpsc::Receiver<()>,
}

impl SessionTicker {
    /// Spawn a ticker that fires every second. Must run inside a tokio runtime.
    #[must_use]
    pub fn spawn() -> Self {
        Self::with_period(Duration::from_secs(1))
    }

    #[must_use]
    pub fn with_period(period: Duration) -> Self {
        let (tx, ticks) = mpsc::channel(TICK_BUFFER);
        let task = tokio::spawn(async move {
            let mut interval = interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                if tx.send(()).await.is_err() {
                    break;
                }
            }
        });

        Self {
            task: Some(task),
            ticks,
        }
    }

    /// Wait for the next tick. Returns `None` once cancelled.
    pub async fn next(&mut self) -> Option<()> {
        if self.task.is_none() {
            return None;
        }
        self.ticks.recv().await
    }

    /// Stop ticking. Safe to call repeatedly.
    pub fn cancel(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
            self.ticks.close();
        }
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.task.is_none()
    }
}

impl Drop for SessionTicker {
    fn drop(&mut self) {
        self.cancel();
    }
}
