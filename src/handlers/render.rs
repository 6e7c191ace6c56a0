//! Plain-text rendering of session state.

use crate::state::{ChatMessage, Room, SessionSnapshot, StateChange, StudyLogEntry, TimerState};

/// `[1] Programming Room (programming) 3/6 - description`
pub fn room_line(room: &Room, active: bool) -> String {
    let marker = if active { "*" } else { " " };
    let full = if room.is_at_capacity() { " full" } else { "" };
    format!(
        "{marker}[{}] {} ({}) {}/{}{full} - {}",
        room.id,
        room.name,
        room.category,
        room.current_studying,
        room.max_participants,
        room.description
    )
}

/// Roster preview: the first three names and a count of the rest.
pub fn roster_preview(room: &Room) -> String {
    const SHOWN: usize = 3;
    let mut preview = room
        .roster
        .iter()
        .take(SHOWN)
        .cloned()
        .collect::<Vec<_>>()
        .join(", ");
    if room.roster.len() > SHOWN {
        preview.push_str(&format!(" +{}", room.roster.len() - SHOWN));
    }
    preview
}

pub fn timer_line(timer: &TimerState) -> String {
    let status = if timer.running { "running" } else { "paused" };
    format!("{} {} ({status})", timer.mode, timer.remaining())
}

pub fn log_line(entry: &StudyLogEntry) -> String {
    format!(
        "{} {} {} min - {}",
        entry.date,
        entry.time_label(),
        entry.minutes,
        entry.subject
    )
}

pub fn chat_line(message: &ChatMessage, system_author: &str) -> String {
    format!(
        "[{}] <{}> {}",
        message.timestamp,
        message.display_author(system_author),
        message.body
    )
}

pub fn stats_lines(snapshot: &SessionSnapshot) -> Vec<String> {
    vec![
        format!(
            "today: {} min / goal {} min ({}%)",
            snapshot.today_total, snapshot.daily_goal, snapshot.goal_progress
        ),
        format!("all time: {} min", snapshot.all_time_total),
        format!("intervals logged: {}", snapshot.study_log.len()),
    ]
}

/// Line to print for an unsolicited change, if any.
///
/// Only chat posts and logged intervals are shown; everything else is
/// either a direct reply to a command or per-second noise.
pub fn change_line(change: &StateChange, system_author: &str) -> Option<String> {
    match change {
        StateChange::ChatPosted(message) => Some(chat_line(message, system_author)),
        StateChange::StudyLogged(entry) => Some(format!("logged: {}", log_line(entry))),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Author, RoomCategory, RoomId, TimerMode};

    fn room(roster: &[&str]) -> Room {
        Room {
            id: RoomId(3),
            name: "Language Room".into(),
            description: "English".into(),
            category: RoomCategory::Language,
            roster: roster.iter().map(|s| s.to_string()).collect(),
            current_studying: 3,
            max_participants: 10,
        }
    }

    #[test]
    fn room_line_shows_occupancy_and_marker() {
        assert_eq!(
            room_line(&room(&[]), true),
            "*[3] Language Room (language) 3/10 - English"
        );
        assert!(room_line(&room(&[]), false).starts_with(" [3]"));
    }

    #[test]
    fn room_line_flags_full_rooms() {
        let mut full = room(&[]);
        full.current_studying = 10;
        assert!(room_line(&full, false).contains("10/10 full - "));
    }

    #[test]
    fn roster_preview_truncates_after_three() {
        assert_eq!(roster_preview(&room(&["a", "b"])), "a, b");
        assert_eq!(roster_preview(&room(&["a", "b", "c", "d", "e"])), "a, b, c +2");
    }

    #[test]
    fn timer_line_formats_countdown() {
        let timer = TimerState {
            mode: TimerMode::Break,
            minutes: 4,
            seconds: 7,
            running: true,
        };
        assert_eq!(timer_line(&timer), "break 04:07 (running)");
    }

    #[test]
    fn chat_line_resolves_system_author() {
        let message = ChatMessage {
            id: 1,
            author: Author::System,
            body: "Aki joined".into(),
            timestamp: "10:40".into(),
        };
        assert_eq!(chat_line(&message, "System"), "[10:40] <System> Aki joined");
    }

    #[test]
    fn countdown_changes_are_not_printed() {
        let timer = TimerState {
            mode: TimerMode::Study,
            minutes: 20,
            seconds: 0,
            running: true,
        };
        assert_eq!(change_line(&StateChange::Timer(timer), "System"), None);
    }
}
