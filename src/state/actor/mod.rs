//! Actor Model for Session State Management.
//!
//! This module implements the `SessionActor`, which owns the [`StudyHall`]
//! in an isolated Tokio task.
//!
//! # Architecture
//!
//! - **State Ownership**: The actor owns the hall and the tick source. Nothing
//!   else can reach them.
//! - **Message Passing**: Commands and queries arrive as `SessionEvent`s with
//!   a oneshot reply channel.
//! - **Ordering**: Ticks and commands are processed one at a time; a command
//!   always runs to completion before the next tick is looked at.
//! - **Notifications**: Effects drained from the hall after every step are
//!   published on a broadcast channel.

use crate::state::{StateChange, StudyHall};
use tokio::sync::{broadcast, mpsc};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, trace};

mod handle;
mod ticks;
mod types;

pub use handle::SessionHandle;
pub use ticks::{IntervalTicks, ManualTickDriver, ManualTicks, TickSource};
pub use types::SessionEvent;

/// Buffered notifications per subscriber before the slowest one lags.
const CHANGE_CHANNEL_CAPACITY: usize = 256;

enum Step {
    Shutdown,
    Tick,
    Event(SessionEvent),
}

/// The Session Actor.
pub struct SessionActor<T: TickSource> {
    hall: StudyHall,
    ticks: T,
    changes_tx: broadcast::Sender<StateChange>,
    shutdown: CancellationToken,
}

impl<T: TickSource + 'static> SessionActor<T> {
    /// Spawn the actor and return a handle to it.
    pub fn spawn(hall: StudyHall, ticks: T, mailbox_capacity: usize) -> SessionHandle {
        let (tx, rx) = mpsc::channel(mailbox_capacity);
        let (changes_tx, _) = broadcast::channel(CHANGE_CHANNEL_CAPACITY);
        let shutdown = CancellationToken::new();

        let actor = Self {
            hall,
            ticks,
            changes_tx: changes_tx.clone(),
            shutdown: shutdown.clone(),
        };

        tokio::spawn(async move {
            actor.run(rx).await;
        });

        SessionHandle::new(tx, changes_tx, shutdown)
    }

    /// The main actor loop.
    async fn run(mut self, mut rx: mpsc::Receiver<SessionEvent>) {
        info!("session actor started");
        loop {
            let running = self.hall.is_timer_running();
            let step = tokio::select! {
                biased;
                _ = self.shutdown.cancelled() => Step::Shutdown,
                _ = self.ticks.tick(), if running => Step::Tick,
                event = rx.recv() => match event {
                    Some(event) => Step::Event(event),
                    None => Step::Shutdown,
                },
            };

            match step {
                Step::Shutdown => break,
                Step::Tick => {
                    self.hall.tick();
                    trace!(remaining = %self.hall.timer_state().remaining(), "tick");
                }
                Step::Event(event) => self.handle_event(event),
            }

            self.sync_ticks();
            self.publish();
        }
        self.ticks.disarm();
        info!("session actor stopped");
    }

    fn handle_event(&mut self, event: SessionEvent) {
        debug!(event = event.name(), "session event");
        match event {
            SessionEvent::Login { name, reply_tx } => {
                let _ = reply_tx.send(self.hall.login(&name));
            }
            SessionEvent::JoinRoom { room, reply_tx } => {
                let _ = reply_tx.send(self.hall.join_room(room));
            }
            SessionEvent::LeaveRoom { reply_tx } => {
                let _ = reply_tx.send(self.hall.leave_room());
            }
            SessionEvent::StartTimer { reply_tx } => {
                let _ = reply_tx.send(self.hall.start_timer());
            }
            SessionEvent::PauseTimer { reply_tx } => {
                let _ = reply_tx.send(self.hall.pause_timer());
            }
            SessionEvent::ResetTimer { reply_tx } => {
                let _ = reply_tx.send(self.hall.reset_timer());
            }
            SessionEvent::SendMessage { text, reply_tx } => {
                let _ = reply_tx.send(self.hall.send_message(&text));
            }
            SessionEvent::SetDailyGoal { minutes, reply_tx } => {
                let _ = reply_tx.send(self.hall.set_daily_goal(minutes));
            }
            SessionEvent::Snapshot { reply_tx } => {
                let _ = reply_tx.send(self.hall.snapshot());
            }
        }
    }

    /// Keep the tick source armed exactly while the timer runs.
    fn sync_ticks(&mut self) {
        match (self.hall.is_timer_running(), self.ticks.is_armed()) {
            (true, false) => {
                self.ticks.arm();
                debug!("tick source armed");
            }
            (false, true) => {
                self.ticks.disarm();
                debug!("tick source disarmed");
            }
            _ => {}
        }
    }

    fn publish(&mut self) {
        for change in self.hall.drain_changes() {
            // No subscribers is fine.
            let _ = self.changes_tx.send(change);
        }
    }
}
