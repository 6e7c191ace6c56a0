//! Study rooms and their occupancy.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Numeric room identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoomId(pub u32);

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Subject area a room is dedicated to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoomCategory {
    Programming,
    Certification,
    Language,
}

impl fmt::Display for RoomCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Programming => f.write_str("programming"),
            Self::Certification => f.write_str("certification"),
            Self::Language => f.write_str("language"),
        }
    }
}

/// A study room.
///
/// `current_studying` is maintained independently of `roster`: it moves by
/// one on every join and leave and is never recomputed from the roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    pub id: RoomId,
    pub name: String,
    pub description: String,
    pub category: RoomCategory,
    #[serde(default)]
    pub roster: Vec<String>,
    #[serde(default)]
    pub current_studying: u32,
    pub max_participants: u32,
}

impl Room {
    /// Whether occupancy has reached the advisory capacity.
    pub fn is_at_capacity(&self) -> bool {
        self.current_studying >= self.max_participants
    }

    fn admit(&mut self, user: &str) {
        self.roster.push(user.to_string());
        self.current_studying = self.current_studying.saturating_add(1);
    }

    fn release(&mut self, user: &str) {
        if let Some(pos) = self.roster.iter().position(|name| name == user) {
            self.roster.remove(pos);
        }
        self.current_studying = self.current_studying.saturating_sub(1);
    }
}

/// The fixed set of rooms available for the lifetime of the process.
#[derive(Debug, Clone, Default)]
pub struct RoomRegistry {
    rooms: Vec<Room>,
}

impl RoomRegistry {
    /// Build a registry from seed rooms, keeping their order.
    pub fn new(rooms: Vec<Room>) -> Self {
        Self { rooms }
    }

    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn get(&self, id: RoomId) -> Option<&Room> {
        self.rooms.iter().find(|room| room.id == id)
    }

    /// Add `user` to the room's roster and bump its occupancy.
    ///
    /// Capacity is not enforced. Returns `None` if the room does not exist.
    pub fn join(&mut self, id: RoomId, user: &str) -> Option<&Room> {
        let room = self.rooms.iter_mut().find(|room| room.id == id)?;
        room.admit(user);
        Some(&*room)
    }

    /// Remove the first roster entry for `user` and drop occupancy by one,
    /// never below zero. Returns `None` if the room does not exist.
    pub fn leave(&mut self, id: RoomId, user: &str) -> Option<&Room> {
        let room = self.rooms.iter_mut().find(|room| room.id == id)?;
        room.release(user);
        Some(&*room)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn room(id: u32, roster: &[&str], current: u32, max: u32) -> Room {
        Room {
            id: RoomId(id),
            name: format!("room-{id}"),
            description: String::new(),
            category: RoomCategory::Programming,
            roster: roster.iter().map(|s| s.to_string()).collect(),
            current_studying: current,
            max_participants: max,
        }
    }

    #[test]
    fn join_appends_and_increments() {
        let mut registry = RoomRegistry::new(vec![room(1, &["taro"], 1, 6)]);
        let joined = registry.join(RoomId(1), "aki").unwrap();
        assert_eq!(joined.roster, vec!["taro", "aki"]);
        assert_eq!(joined.current_studying, 2);
    }

    #[test]
    fn join_ignores_capacity() {
        let mut registry = RoomRegistry::new(vec![room(1, &["a", "b"], 2, 2)]);
        assert!(registry.get(RoomId(1)).unwrap().is_at_capacity());
        let joined = registry.join(RoomId(1), "c").unwrap();
        assert_eq!(joined.current_studying, 3);
        assert_eq!(joined.roster.len(), 3);
    }

    #[test]
    fn join_saturates_occupancy() {
        let mut registry = RoomRegistry::new(vec![room(1, &[], u32::MAX, 6)]);
        let joined = registry.join(RoomId(1), "aki").unwrap();
        assert_eq!(joined.current_studying, u32::MAX);
        assert_eq!(joined.roster, vec!["aki"]);
    }

    #[test]
    fn join_unknown_room_is_none() {
        let mut registry = RoomRegistry::new(vec![room(1, &[], 0, 6)]);
        assert!(registry.join(RoomId(9), "aki").is_none());
        assert_eq!(registry.get(RoomId(1)).unwrap().current_studying, 0);
    }

    #[test]
    fn leave_removes_only_first_occurrence() {
        let mut registry = RoomRegistry::new(vec![room(1, &["aki", "taro", "aki"], 3, 6)]);
        let left = registry.leave(RoomId(1), "aki").unwrap();
        assert_eq!(left.roster, vec!["taro", "aki"]);
        assert_eq!(left.current_studying, 2);
    }

    #[test]
    fn leave_never_drops_occupancy_below_zero() {
        let mut registry = RoomRegistry::new(vec![room(1, &["aki"], 0, 6)]);
        for _ in 0..3 {
            registry.leave(RoomId(1), "aki");
        }
        let room = registry.get(RoomId(1)).unwrap();
        assert_eq!(room.current_studying, 0);
        assert!(room.roster.is_empty());
    }

    #[test]
    fn other_rooms_are_untouched() {
        let mut registry = RoomRegistry::new(vec![room(1, &[], 2, 6), room(2, &["mika"], 1, 8)]);
        registry.join(RoomId(1), "aki");
        registry.leave(RoomId(1), "aki");
        assert_eq!(registry.get(RoomId(2)).unwrap(), &room(2, &["mika"], 1, 8));
    }

    #[test]
    fn category_deserializes_lowercase() {
        let parsed: RoomCategory = serde_json::from_str("\"certification\"").unwrap();
        assert_eq!(parsed, RoomCategory::Certification);
    }
}
