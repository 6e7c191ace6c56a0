//! Periodic tick sources for the session timer.
//!
//! The actor only waits on a tick source while the timer runs, and it
//! disarms the source whenever the timer stops. A disarmed source never
//! resolves [`TickSource::tick`] and holds no pending ticks, so pausing,
//! resetting or leaving a room cannot leave a tick in flight.

use async_trait::async_trait;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::{Instant, Interval, MissedTickBehavior};

#[async_trait]
pub trait TickSource: Send {
    /// Begin delivering ticks. The first tick arrives one period from now.
    fn arm(&mut self);

    /// Stop delivering ticks and discard any that are pending.
    fn disarm(&mut self);

    fn is_armed(&self) -> bool;

    /// Wait for the next tick. Never resolves while disarmed.
    async fn tick(&mut self);
}

/// Real-time ticks backed by `tokio::time::interval`.
pub struct IntervalTicks {
    period: Duration,
    interval: Option<Interval>,
}

impl IntervalTicks {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            interval: None,
        }
    }
}

#[async_trait]
impl TickSource for IntervalTicks {
    fn arm(&mut self) {
        if self.interval.is_some() {
            return;
        }
        let mut interval = tokio::time::interval_at(Instant::now() + self.period, self.period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        self.interval = Some(interval);
    }

    fn disarm(&mut self) {
        self.interval = None;
    }

    fn is_armed(&self) -> bool {
        self.interval.is_some()
    }

    async fn tick(&mut self) {
        match self.interval.as_mut() {
            Some(interval) => {
                interval.tick().await;
            }
            None => std::future::pending::<()>().await,
        }
    }
}

/// Ticks delivered on demand through a [`ManualTickDriver`].
pub struct ManualTicks {
    rx: mpsc::UnboundedReceiver<()>,
    armed: Arc<AtomicBool>,
}

/// Test-side handle that pushes ticks into a [`ManualTicks`].
#[derive(Clone)]
pub struct ManualTickDriver {
    tx: mpsc::UnboundedSender<()>,
    armed: Arc<AtomicBool>,
}

impl ManualTicks {
    pub fn new() -> (Self, ManualTickDriver) {
        let (tx, rx) = mpsc::unbounded_channel();
        let armed = Arc::new(AtomicBool::new(false));
        (
            Self {
                rx,
                armed: Arc::clone(&armed),
            },
            ManualTickDriver { tx, armed },
        )
    }
}

impl ManualTickDriver {
    /// Queue one tick. Ticks queued while the source is disarmed are
    /// discarded when it is next armed.
    pub fn tick(&self) {
        let _ = self.tx.send(());
    }

    pub fn ticks(&self, n: u32) {
        for _ in 0..n {
            self.tick();
        }
    }

    /// Whether the session is currently listening for ticks.
    pub fn is_armed(&self) -> bool {
        self.armed.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TickSource for ManualTicks {
    fn arm(&mut self) {
        while self.rx.try_recv().is_ok() {}
        self.armed.store(true, Ordering::SeqCst);
    }

    fn disarm(&mut self) {
        self.armed.store(false, Ordering::SeqCst);
        while self.rx.try_recv().is_ok() {}
    }

    fn is_armed(&self) -> bool {
        self.armed.load(Ordering::SeqCst)
    }

    async fn tick(&mut self) {
        if !self.is_armed() {
            return std::future::pending().await;
        }
        if self.rx.recv().await.is_none() {
            std::future::pending::<()>().await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn interval_first_tick_is_one_period_after_arming() {
        let mut ticks = IntervalTicks::new(Duration::from_secs(1));
        ticks.arm();
        let started = Instant::now();
        ticks.tick().await;
        assert_eq!(started.elapsed(), Duration::from_secs(1));
        ticks.tick().await;
        assert_eq!(started.elapsed(), Duration::from_secs(2));
    }

    #[tokio::test(start_paused = true)]
    async fn disarmed_interval_never_ticks() {
        let mut ticks = IntervalTicks::new(Duration::from_secs(1));
        ticks.arm();
        ticks.disarm();
        assert!(!ticks.is_armed());
        let waited = tokio::time::timeout(Duration::from_secs(10), ticks.tick()).await;
        assert!(waited.is_err());
    }

    #[tokio::test]
    async fn disarm_drops_queued_manual_ticks() {
        let (mut ticks, driver) = ManualTicks::new();
        ticks.arm();
        driver.ticks(3);
        ticks.tick().await;
        ticks.disarm();
        assert!(!driver.is_armed());

        ticks.arm();
        let waited =
            tokio::time::timeout(Duration::from_millis(20), ticks.tick()).await;
        assert!(waited.is_err());

        driver.tick();
        ticks.tick().await;
    }
}
