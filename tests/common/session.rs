//! Test session harness.

use chrono::{NaiveDate, NaiveDateTime};
use std::sync::Arc;
use studyhall::clock::ManualClock;
use studyhall::config::Config;
use studyhall::state::StudyHall;
use studyhall::state::actor::{ManualTickDriver, ManualTicks, SessionActor, SessionHandle};

/// Ticks in a default study interval.
pub const STUDY_TICKS: u32 = 25 * 60;
/// Ticks in a default break.
pub const BREAK_TICKS: u32 = 5 * 60;

/// 2024-03-09 10:40 local.
pub fn morning() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 3, 9)
        .unwrap()
        .and_hms_opt(10, 40, 0)
        .unwrap()
}

/// A running session actor with test-controlled time.
pub struct TestSession {
    pub session: SessionHandle,
    pub ticks: ManualTickDriver,
    pub clock: Arc<ManualClock>,
    pub config: Config,
}

impl TestSession {
    pub fn spawn() -> Self {
        Self::with_config(Config::default())
    }

    pub fn with_config(config: Config) -> Self {
        let clock = Arc::new(ManualClock::new(morning()));
        let hall = StudyHall::new(&config, clock.clone());
        let (ticks, driver) = ManualTicks::new();
        let session = SessionActor::spawn(hall, ticks, config.timer.mailbox_capacity);
        Self {
            session,
            ticks: driver,
            clock,
            config,
        }
    }

    /// Spawn and log in as `name`.
    pub async fn logged_in(name: &str) -> Self {
        let test = Self::spawn();
        assert!(test.session.login(name).await.expect("session closed"));
        test
    }

    /// Deliver `n` ticks and wait until the actor has processed them.
    pub async fn tick(&self, n: u32) {
        self.settle().await;
        self.ticks.ticks(n);
        self.settle().await;
    }

    /// Round-trip a query so every earlier event has been handled.
    pub async fn settle(&self) {
        self.session.snapshot().await.expect("session closed");
    }
}

impl Drop for TestSession {
    fn drop(&mut self) {
        self.session.shutdown();
    }
}
