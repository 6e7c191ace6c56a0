//! State change notifications.
//!
//! The hall records a `StateChange` for every effect a command or tick has.
//! The session actor drains them after each step and fans them out to
//! subscribers, which is how a front-end learns about chat lines and timer
//! completions it did not ask for.

use super::chat::ChatMessage;
use super::room::RoomId;
use super::study_log::StudyLogEntry;
use super::timer::TimerState;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StateChange {
    LoggedIn { user: String },
    RoomJoined { room: RoomId, occupancy: u32 },
    RoomLeft { room: RoomId, occupancy: u32 },
    Timer(TimerState),
    StudyLogged(StudyLogEntry),
    ChatPosted(ChatMessage),
    DailyGoal { minutes: u32 },
}

impl StateChange {
    /// Per-second countdown updates, which most subscribers skip.
    pub fn is_countdown(&self) -> bool {
        matches!(self, Self::Timer(state) if state.running)
    }
}
