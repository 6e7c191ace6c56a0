//! Record of completed study intervals, newest first.

use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

/// Identifier derived from the creation time in milliseconds.
///
/// Strictly increasing within one store, even when two entries are created
/// in the same millisecond.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct EntryId(pub i64);

/// One completed study interval.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StudyLogEntry {
    pub id: EntryId,
    /// Local calendar day the interval finished on.
    pub date: NaiveDate,
    pub minutes: u32,
    /// Room name, or the individual-study label.
    pub subject: String,
    pub created_at: NaiveDateTime,
}

impl StudyLogEntry {
    /// Creation time for display, `HH:MM:SS`.
    pub fn time_label(&self) -> String {
        self.created_at.format("%H:%M:%S").to_string()
    }
}

/// Append-only store. Entries are never edited or removed.
#[derive(Debug, Clone, Default)]
pub struct StudyLog {
    entries: Vec<StudyLogEntry>,
    last_id: Option<EntryId>,
}

impl StudyLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an interval finished at `at`. The new entry becomes the head.
    pub fn record(&mut self, at: NaiveDateTime, minutes: u32, subject: impl Into<String>) -> &StudyLogEntry {
        let id = self.next_id(at);
        let entry = StudyLogEntry {
            id,
            date: at.date(),
            minutes,
            subject: subject.into(),
            created_at: at,
        };
        self.entries.insert(0, entry);
        &self.entries[0]
    }

    /// Entries in canonical order, newest first.
    pub fn entries(&self) -> &[StudyLogEntry] {
        &self.entries
    }

    /// Minutes logged on `today`. Matches on the calendar day only.
    pub fn total_on(&self, today: NaiveDate) -> u32 {
        self.entries
            .iter()
            .filter(|entry| entry.date == today)
            .map(|entry| entry.minutes)
            .sum()
    }

    /// Minutes logged over the lifetime of the store.
    pub fn all_time_total(&self) -> u32 {
        self.entries.iter().map(|entry| entry.minutes).sum()
    }

    fn next_id(&mut self, at: NaiveDateTime) -> EntryId {
        let millis = at.and_utc().timestamp_millis();
        let id = match self.last_id {
            Some(EntryId(last)) if millis <= last => EntryId(last + 1),
            _ => EntryId(millis),
        };
        self.last_id = Some(id);
        id
    }
}
