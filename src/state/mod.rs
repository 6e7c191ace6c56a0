//! State management module.
//!
//! Contains the study hall (session orchestration), its components, and the
//! actor that owns it at runtime.

pub mod actor;
mod chat;
mod hall;
mod observer;
mod room;
mod session;
mod study_log;
mod timer;

pub use chat::{Author, ChatLog, ChatMessage};
pub use hall::{SessionSnapshot, StudyHall};
pub use observer::StateChange;
pub use room::{Room, RoomCategory, RoomId, RoomRegistry};
pub use session::SessionContext;
pub use study_log::{EntryId, StudyLog, StudyLogEntry};
pub use timer::{IntervalDurations, SessionTimer, TimerEvent, TimerMode, TimerState};
