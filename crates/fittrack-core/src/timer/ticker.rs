//! Cancellable periodic tick.
//!
//! The background task only signals; it never touches state. Whoever owns the
//! event loop awaits [`Ticker::tick`] and mutates the store on its own thread.
//! Dropping the handle aborts the task.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};

#[derive(Debug)]
pub struct Ticker {
    rx: mpsc::Receiver<()>,
    handle: JoinHandle<()>,
}

impl Ticker {
    /// Arm a ticker whose first firing is one `period` from now.
    ///
    /// Must be called from within a tokio runtime.
    pub fn spawn(period: Duration) -> Self {
        let (tx, rx) = mpsc::channel(1);
        let handle = tokio::spawn(async move {
            let mut interval = time::interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
            loop {
                interval.tick().await;
                if tx.send(()).await.is_err() {
                    break;
                }
            }
        });
        Self { rx, handle }
    }

    /// Wait for the next firing. `None` once the task has stopped.
    pub async fn tick(&mut self) -> Option<()> {
        self.rx.recv().await
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn fires_once_per_period() {
        let start = Instant::now();
        let mut ticker = Ticker::spawn(Duration::from_secs(1));

        ticker.tick().await.unwrap();
        assert_eq!(start.elapsed(), Duration::from_secs(1));
        ticker.tick().await.unwrap();
        assert_eq!(start.elapsed(), Duration::from_secs(2));
    }

    #[tokio::test(start_paused = true)]
    async fn aborted_task_closes_the_channel() {
        let mut ticker = Ticker::spawn(Duration::from_secs(1));
        ticker.handle.abort();
        assert_eq!(ticker.tick().await, None);
    }
}
