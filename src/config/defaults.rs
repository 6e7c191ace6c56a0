//! Default value functions for configuration.
//!
//! Separated into its own module for clarity and reuse.

use super::chat::GreetingLine;
use crate::state::{Room, RoomCategory, RoomId};

// =============================================================================
// Logging Defaults
// =============================================================================

pub fn default_log_filter() -> String {
    "info".to_string()
}

// =============================================================================
// Timer Defaults
// =============================================================================

pub fn default_study_minutes() -> u32 {
    25
}

pub fn default_break_minutes() -> u32 {
    5
}

pub fn default_tick_millis() -> u64 {
    1000
}

pub fn default_mailbox_capacity() -> usize {
    64
}

// =============================================================================
// Goal Defaults
// =============================================================================

pub fn default_goal_minutes() -> u32 {
    120
}

pub fn default_goal_min() -> u32 {
    30
}

pub fn default_goal_max() -> u32 {
    480
}

pub fn default_goal_step() -> u32 {
    15
}

// =============================================================================
// Chat Defaults
// =============================================================================

pub fn default_system_author() -> String {
    "System".to_string()
}

pub fn default_fallback_subject() -> String {
    "Individual study".to_string()
}

pub fn default_greeting() -> Vec<GreetingLine> {
    vec![
        GreetingLine {
            author: None,
            body: "Let's all stay focused and do our best!".to_string(),
            time: Some("10:30".to_string()),
        },
        GreetingLine {
            author: Some("Hanako".to_string()),
            body: "Good morning! Looking forward to studying with you all today".to_string(),
            time: Some("10:32".to_string()),
        },
        GreetingLine {
            author: Some("Yuta".to_string()),
            body: "Working through React right now. Let's keep at it together".to_string(),
            time: Some("10:35".to_string()),
        },
    ]
}

// =============================================================================
// Seed Rooms
// =============================================================================

fn roster(names: &[&str]) -> Vec<String> {
    names.iter().map(|name| name.to_string()).collect()
}

pub fn default_rooms() -> Vec<Room> {
    vec![
        Room {
            id: RoomId(1),
            name: "Programming Room".to_string(),
            description: "For people learning web and app development".to_string(),
            category: RoomCategory::Programming,
            roster: roster(&["Taro", "Hanako", "Yuta"]),
            current_studying: 2,
            max_participants: 6,
        },
        Room {
            id: RoomId(2),
            name: "Certification Room".to_string(),
            description: "Preparing for professional certification exams".to_string(),
            category: RoomCategory::Certification,
            roster: roster(&["Mika", "Kenji"]),
            current_studying: 1,
            max_participants: 8,
        },
        Room {
            id: RoomId(3),
            name: "Language Room".to_string(),
            description: "English and other foreign languages".to_string(),
            category: RoomCategory::Language,
            roster: roster(&["Ai", "Satoshi", "Mari", "Ryo"]),
            current_studying: 3,
            max_participants: 10,
        },
    ]
}
