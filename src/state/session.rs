//! Per-process session context.

use super::room::RoomId;

/// The local user's session: who they are, where they are, what they aim for.
#[derive(Debug, Clone)]
pub struct SessionContext {
    user: Option<String>,
    active_room: Option<RoomId>,
    daily_goal: u32,
}

impl SessionContext {
    pub fn new(daily_goal: u32) -> Self {
        Self {
            user: None,
            active_room: None,
            daily_goal,
        }
    }

    pub fn user(&self) -> Option<&str> {
        self.user.as_deref()
    }

    pub fn is_logged_in(&self) -> bool {
        self.user.is_some()
    }

    /// Set the user name. The name is fixed once set; returns false if a
    /// name was already present.
    pub fn set_user(&mut self, name: String) -> bool {
        if self.user.is_some() {
            return false;
        }
        self.user = Some(name);
        true
    }

    pub fn active_room(&self) -> Option<RoomId> {
        self.active_room
    }

    pub(crate) fn enter(&mut self, room: RoomId) {
        self.active_room = Some(room);
    }

    pub(crate) fn exit(&mut self) -> Option<RoomId> {
        self.active_room.take()
    }

    pub fn daily_goal(&self) -> u32 {
        self.daily_goal
    }

    pub fn set_daily_goal(&mut self, minutes: u32) {
        self.daily_goal = minutes;
    }
}
