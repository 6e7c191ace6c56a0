//! Client-side handle to the session actor.

use super::types::SessionEvent;
use crate::error::SessionError;
use crate::state::{RoomId, SessionSnapshot, StateChange};
use tokio::sync::{broadcast, mpsc, oneshot};
use tokio_util::sync::CancellationToken;

/// Cloneable command/query surface for a running session.
#[derive(Clone)]
pub struct SessionHandle {
    tx: mpsc::Sender<SessionEvent>,
    changes_tx: broadcast::Sender<StateChange>,
    shutdown: CancellationToken,
}

impl SessionHandle {
    pub(super) fn new(
        tx: mpsc::Sender<SessionEvent>,
        changes_tx: broadcast::Sender<StateChange>,
        shutdown: CancellationToken,
    ) -> Self {
        Self {
            tx,
            changes_tx,
            shutdown,
        }
    }

    async fn request<R>(
        &self,
        make: impl FnOnce(oneshot::Sender<R>) -> SessionEvent,
    ) -> Result<R, SessionError> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.tx
            .send(make(reply_tx))
            .await
            .map_err(|_| SessionError::Closed)?;
        reply_rx.await.map_err(|_| SessionError::Closed)
    }

    pub async fn login(&self, name: impl Into<String>) -> Result<bool, SessionError> {
        let name = name.into();
        self.request(|reply_tx| SessionEvent::Login { name, reply_tx })
            .await
    }

    pub async fn join_room(&self, room: RoomId) -> Result<bool, SessionError> {
        self.request(|reply_tx| SessionEvent::JoinRoom { room, reply_tx })
            .await
    }

    pub async fn leave_room(&self) -> Result<bool, SessionError> {
        self.request(|reply_tx| SessionEvent::LeaveRoom { reply_tx })
            .await
    }

    pub async fn start_timer(&self) -> Result<bool, SessionError> {
        self.request(|reply_tx| SessionEvent::StartTimer { reply_tx })
            .await
    }

    pub async fn pause_timer(&self) -> Result<bool, SessionError> {
        self.request(|reply_tx| SessionEvent::PauseTimer { reply_tx })
            .await
    }

    pub async fn reset_timer(&self) -> Result<bool, SessionError> {
        self.request(|reply_tx| SessionEvent::ResetTimer { reply_tx })
            .await
    }

    pub async fn send_message(&self, text: impl Into<String>) -> Result<bool, SessionError> {
        let text = text.into();
        self.request(|reply_tx| SessionEvent::SendMessage { text, reply_tx })
            .await
    }

    pub async fn set_daily_goal(&self, minutes: u32) -> Result<bool, SessionError> {
        self.request(|reply_tx| SessionEvent::SetDailyGoal { minutes, reply_tx })
            .await
    }

    pub async fn snapshot(&self) -> Result<SessionSnapshot, SessionError> {
        self.request(|reply_tx| SessionEvent::Snapshot { reply_tx })
            .await
    }

    /// Receive every state change published after this call.
    pub fn subscribe(&self) -> broadcast::Receiver<StateChange> {
        self.changes_tx.subscribe()
    }

    /// Stop the actor. Pending and later requests fail with `Closed`.
    pub fn shutdown(&self) {
        self.shutdown.cancel();
    }

    pub fn is_closed(&self) -> bool {
        self.tx.is_closed()
    }
}
