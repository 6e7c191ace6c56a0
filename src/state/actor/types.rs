use crate::state::{RoomId, SessionSnapshot};
use tokio::sync::oneshot;

/// Events that can be sent to the Session Actor.
///
/// Command replies carry `true` when the command changed state and `false`
/// when it was ignored as invalid or redundant.
#[derive(Debug)]
pub enum SessionEvent {
    Login {
        name: String,
        reply_tx: oneshot::Sender<bool>,
    },
    JoinRoom {
        room: RoomId,
        reply_tx: oneshot::Sender<bool>,
    },
    LeaveRoom {
        reply_tx: oneshot::Sender<bool>,
    },
    StartTimer {
        reply_tx: oneshot::Sender<bool>,
    },
    PauseTimer {
        reply_tx: oneshot::Sender<bool>,
    },
    ResetTimer {
        reply_tx: oneshot::Sender<bool>,
    },
    SendMessage {
        text: String,
        reply_tx: oneshot::Sender<bool>,
    },
    SetDailyGoal {
        minutes: u32,
        reply_tx: oneshot::Sender<bool>,
    },
    /// Request a copy of the full session state.
    Snapshot {
        reply_tx: oneshot::Sender<SessionSnapshot>,
    },
}

impl SessionEvent {
    /// Short name for logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Login { .. } => "login",
            Self::JoinRoom { .. } => "join_room",
            Self::LeaveRoom { .. } => "leave_room",
            Self::StartTimer { .. } => "start_timer",
            Self::PauseTimer { .. } => "pause_timer",
            Self::ResetTimer { .. } => "reset_timer",
            Self::SendMessage { .. } => "send_message",
            Self::SetDailyGoal { .. } => "set_daily_goal",
            Self::Snapshot { .. } => "snapshot",
        }
    }
}
