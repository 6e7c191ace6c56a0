//! The study hall: session orchestration.
//!
//! `StudyHall` is the only place that reacts to one external action by
//! touching more than one component. It owns the room registry, the timer,
//! the study log and the chat, plus the session context, and it records a
//! [`StateChange`] for every effect so the actor can publish them.
//!
//! Every command is total. Invalid input (a blank name, a blank message, an
//! unknown room) leaves state untouched and the command returns `false`.

use super::chat::{Author, ChatLog, ChatMessage};
use super::observer::StateChange;
use super::room::{Room, RoomId, RoomRegistry};
use super::session::SessionContext;
use super::study_log::{StudyLog, StudyLogEntry};
use super::timer::{SessionTimer, TimerEvent, TimerState};
use crate::clock::Clock;
use crate::config::{Config, GreetingLine};
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, info};

/// Point-in-time copy of everything a front-end may display.
#[derive(Debug, Clone, Serialize)]
pub struct SessionSnapshot {
    pub user: Option<String>,
    pub timer: TimerState,
    pub rooms: Vec<Room>,
    pub active_room: Option<Room>,
    pub chat: Vec<ChatMessage>,
    pub study_log: Vec<StudyLogEntry>,
    pub today_total: u32,
    pub all_time_total: u32,
    pub daily_goal: u32,
    pub goal_progress: u32,
}

pub struct StudyHall {
    context: SessionContext,
    rooms: RoomRegistry,
    timer: SessionTimer,
    log: StudyLog,
    chat: ChatLog,
    clock: Arc<dyn Clock>,
    fallback_subject: String,
    greeting: Vec<GreetingLine>,
    changes: Vec<StateChange>,
}

impl StudyHall {
    pub fn new(config: &Config, clock: Arc<dyn Clock>) -> Self {
        Self {
            context: SessionContext::new(config.goal.default_minutes),
            rooms: RoomRegistry::new(config.rooms.clone()),
            timer: SessionTimer::new(config.timer.durations()),
            log: StudyLog::new(),
            chat: ChatLog::new(),
            clock,
            fallback_subject: config.chat.fallback_subject.clone(),
            greeting: config.chat.greeting.clone(),
            changes: Vec::new(),
        }
    }

    // ========================================================================
    // Commands
    // ========================================================================

    /// Log in as `name` and seed the chat with the greeting set.
    pub fn login(&mut self, name: &str) -> bool {
        let name = name.trim();
        if name.is_empty() {
            debug!("ignoring login with blank name");
            return false;
        }
        if !self.context.set_user(name.to_string()) {
            debug!(name = %name, "ignoring second login");
            return false;
        }
        info!(user = %name, "logged in");

        let stamp = self.stamp();
        let seed = self.greeting.iter().map(|line| {
            let author = match &line.author {
                Some(user) => Author::user(user.clone()),
                None => Author::System,
            };
            let time = line.time.clone().unwrap_or_else(|| stamp.clone());
            (author, line.body.clone(), time)
        });
        self.chat.replace_with(seed);

        self.changes.push(StateChange::LoggedIn {
            user: name.to_string(),
        });
        let seeded: Vec<_> = self
            .chat
            .messages()
            .iter()
            .cloned()
            .map(StateChange::ChatPosted)
            .collect();
        self.changes.extend(seeded);
        true
    }

    /// Join a room and announce it. An active room is left first.
    pub fn join_room(&mut self, id: RoomId) -> bool {
        let Some(user) = self.context.user().map(str::to_string) else {
            debug!(room = %id, "ignoring join before login");
            return false;
        };
        if self.rooms.get(id).is_none() {
            debug!(room = %id, "ignoring join of unknown room");
            return false;
        }
        if self.context.active_room().is_some() {
            self.leave_room();
        }

        let Some(room) = self.rooms.join(id, &user) else {
            return false;
        };
        let occupancy = room.current_studying;
        info!(user = %user, room = %id, occupancy, "joined room");
        self.context.enter(id);
        self.changes.push(StateChange::RoomJoined {
            room: id,
            occupancy,
        });
        self.announce(format!("{user} joined"));
        true
    }

    /// Leave the active room and stop the timer. No-op without a room.
    pub fn leave_room(&mut self) -> bool {
        let Some(id) = self.context.exit() else {
            debug!("ignoring leave without an active room");
            return false;
        };
        let user = self.context.user().unwrap_or_default().to_string();
        let occupancy = self
            .rooms
            .leave(id, &user)
            .map(|room| room.current_studying)
            .unwrap_or_default();
        info!(user = %user, room = %id, occupancy, "left room");
        self.changes.push(StateChange::RoomLeft {
            room: id,
            occupancy,
        });

        if self.timer.is_running() {
            self.timer.pause();
            self.changes.push(StateChange::Timer(self.timer.state()));
        }
        true
    }

    /// Post `text` under the user's name. Blank text is ignored.
    pub fn send_message(&mut self, text: &str) -> bool {
        if text.trim().is_empty() {
            debug!("ignoring blank message");
            return false;
        }
        let Some(user) = self.context.user().map(str::to_string) else {
            debug!("ignoring message before login");
            return false;
        };
        let stamp = self.stamp();
        let message = self.chat.post(Author::User(user), text, stamp).clone();
        self.changes.push(StateChange::ChatPosted(message));
        true
    }

    /// Start the countdown. Requires a logged-in user; returns whether the
    /// timer was stopped before the call.
    pub fn start_timer(&mut self) -> bool {
        if !self.context.is_logged_in() {
            debug!("ignoring timer start before login");
            return false;
        }
        if self.timer.is_running() {
            return false;
        }
        self.timer.start();
        debug!(mode = %self.timer.state().mode, "timer started");
        self.changes.push(StateChange::Timer(self.timer.state()));
        true
    }

    /// Pause the countdown. Returns whether the timer was running.
    pub fn pause_timer(&mut self) -> bool {
        if !self.timer.is_running() {
            return false;
        }
        self.timer.pause();
        debug!(remaining = %self.timer.state().remaining(), "timer paused");
        self.changes.push(StateChange::Timer(self.timer.state()));
        true
    }

    /// Stop and rewind the current interval.
    pub fn reset_timer(&mut self) -> bool {
        let before = self.timer.state();
        self.timer.reset();
        let after = self.timer.state();
        if before == after {
            return false;
        }
        debug!(mode = %after.mode, "timer reset");
        self.changes.push(StateChange::Timer(after));
        true
    }

    /// Store the daily goal as given. Range checks belong to the caller.
    pub fn set_daily_goal(&mut self, minutes: u32) -> bool {
        self.context.set_daily_goal(minutes);
        self.changes.push(StateChange::DailyGoal { minutes });
        true
    }

    /// Advance the timer by one second, handling interval completion.
    pub fn tick(&mut self) -> Option<TimerEvent> {
        if !self.timer.is_running() {
            return None;
        }
        let event = self.timer.tick();
        self.changes.push(StateChange::Timer(self.timer.state()));
        match event {
            Some(TimerEvent::StudyCompleted { minutes }) => self.on_timer_completed(minutes),
            Some(TimerEvent::BreakCompleted) => info!("break finished"),
            None => {}
        }
        event
    }

    /// Record a finished study interval and congratulate the user.
    pub fn on_timer_completed(&mut self, minutes: u32) {
        let subject = self
            .active_room()
            .map(|room| room.name.clone())
            .unwrap_or_else(|| self.fallback_subject.clone());
        let now = self.clock.now();
        let entry = self.log.record(now, minutes, subject).clone();
        info!(minutes, subject = %entry.subject, "study interval logged");
        self.changes.push(StateChange::StudyLogged(entry));

        let user = self.context.user().unwrap_or_default().to_string();
        self.announce(format!(
            "{user} completed {minutes} minutes of study. Great work!"
        ));
    }

    // ========================================================================
    // Queries
    // ========================================================================

    pub fn user(&self) -> Option<&str> {
        self.context.user()
    }

    pub fn timer_state(&self) -> TimerState {
        self.timer.state()
    }

    pub fn is_timer_running(&self) -> bool {
        self.timer.is_running()
    }

    pub fn rooms(&self) -> &[Room] {
        self.rooms.rooms()
    }

    pub fn active_room(&self) -> Option<&Room> {
        self.context.active_room().and_then(|id| self.rooms.get(id))
    }

    pub fn chat(&self) -> &[ChatMessage] {
        self.chat.messages()
    }

    pub fn study_log(&self) -> &[StudyLogEntry] {
        self.log.entries()
    }

    /// Minutes logged on the clock's current calendar day.
    pub fn today_total(&self) -> u32 {
        self.log.total_on(self.clock.now().date())
    }

    pub fn all_time_total(&self) -> u32 {
        self.log.all_time_total()
    }

    pub fn daily_goal(&self) -> u32 {
        self.context.daily_goal()
    }

    /// Today's total as a percentage of the daily goal, capped at 100.
    pub fn goal_progress(&self) -> u32 {
        let goal = self.context.daily_goal();
        if goal == 0 {
            return 100;
        }
        (self.today_total().saturating_mul(100) / goal).min(100)
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            user: self.user().map(str::to_string),
            timer: self.timer_state(),
            rooms: self.rooms().to_vec(),
            active_room: self.active_room().cloned(),
            chat: self.chat().to_vec(),
            study_log: self.study_log().to_vec(),
            today_total: self.today_total(),
            all_time_total: self.all_time_total(),
            daily_goal: self.daily_goal(),
            goal_progress: self.goal_progress(),
        }
    }

    /// Take the changes recorded since the last call.
    pub fn drain_changes(&mut self) -> Vec<StateChange> {
        std::mem::take(&mut self.changes)
    }

    fn announce(&mut self, body: String) {
        let stamp = self.stamp();
        let message = self.chat.post(Author::System, body, stamp).clone();
        self.changes.push(StateChange::ChatPosted(message));
    }

    fn stamp(&self) -> String {
        self.clock.now().format("%H:%M").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use crate::state::TimerMode;
    use chrono::{NaiveDate, NaiveDateTime};

    const STUDY_TICKS: u32 = 25 * 60;
    const BREAK_TICKS: u32 = 5 * 60;

    fn morning() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 9)
            .unwrap()
            .and_hms_opt(10, 40, 0)
            .unwrap()
    }

    fn hall_with_clock() -> (StudyHall, Arc<ManualClock>) {
        let clock = Arc::new(ManualClock::new(morning()));
        let hall = StudyHall::new(&Config::default(), clock.clone());
        (hall, clock)
    }

    fn logged_in() -> StudyHall {
        let (mut hall, _) = hall_with_clock();
        assert!(hall.login("Aki"));
        hall
    }

    fn run(hall: &mut StudyHall, ticks: u32) {
        for _ in 0..ticks {
            hall.tick();
        }
    }

    #[test]
    fn login_rejects_blank_names() {
        let (mut hall, _) = hall_with_clock();
        assert!(!hall.login(""));
        assert!(!hall.login("   \t"));
        assert_eq!(hall.user(), None);
        assert!(hall.chat().is_empty());
    }

    #[test]
    fn login_seeds_greeting_and_is_once_only() {
        let mut hall = logged_in();
        assert_eq!(hall.user(), Some("Aki"));
        assert_eq!(hall.chat().len(), 3);
        assert!(hall.chat()[0].author.is_system());
        assert_eq!(hall.chat()[0].timestamp, "10:30");

        assert!(!hall.login("Mika"));
        assert_eq!(hall.user(), Some("Aki"));
        assert_eq!(hall.chat().len(), 3);
    }

    #[test]
    fn aki_scenario_join_complete_leave() {
        let mut hall = logged_in();
        let chat_before = hall.chat().len();

        assert!(hall.join_room(RoomId(1)));
        let room = hall.active_room().unwrap().clone();
        assert_eq!(room.current_studying, 3);
        assert_eq!(room.max_participants, 6);
        assert!(room.roster.contains(&"Aki".to_string()));
        assert_eq!(hall.chat().len(), chat_before + 1);
        let joined = hall.chat().last().unwrap();
        assert!(joined.author.is_system());
        assert_eq!(joined.body, "Aki joined");

        assert!(hall.start_timer());
        run(&mut hall, STUDY_TICKS);

        assert_eq!(hall.study_log().len(), 1);
        let entry = &hall.study_log()[0];
        assert_eq!(entry.minutes, 25);
        assert_eq!(entry.subject, room.name);
        assert_eq!(hall.chat().len(), chat_before + 2);
        let congrats = hall.chat().last().unwrap();
        assert!(congrats.author.is_system());
        assert!(congrats.body.contains("Aki"));
        assert!(congrats.body.contains("25"));

        let timer = hall.timer_state();
        assert_eq!(timer.mode, TimerMode::Break);
        assert_eq!((timer.minutes, timer.seconds), (5, 0));

        hall.start_timer();
        run(&mut hall, 10);
        assert!(hall.leave_room());
        let room = &hall.rooms()[0];
        assert_eq!(room.current_studying, 2);
        assert!(!room.roster.contains(&"Aki".to_string()));
        assert!(hall.active_room().is_none());
        assert!(!hall.is_timer_running());
    }

    #[test]
    fn break_interval_logs_nothing() {
        let mut hall = logged_in();
        hall.start_timer();
        run(&mut hall, STUDY_TICKS);
        let log_len = hall.study_log().len();
        let chat_len = hall.chat().len();

        hall.start_timer();
        run(&mut hall, BREAK_TICKS);
        assert_eq!(hall.study_log().len(), log_len);
        assert_eq!(hall.chat().len(), chat_len);
        assert_eq!(hall.timer_state().mode, TimerMode::Study);
        assert_eq!(hall.timer_state().remaining(), "25:00");
    }

    #[test]
    fn completion_without_room_uses_fallback_subject() {
        let mut hall = logged_in();
        hall.start_timer();
        run(&mut hall, STUDY_TICKS);
        assert_eq!(hall.study_log()[0].subject, "Individual study");
    }

    #[test]
    fn join_requires_login_and_known_room() {
        let (mut hall, _) = hall_with_clock();
        assert!(!hall.join_room(RoomId(1)));
        assert_eq!(hall.rooms()[0].current_studying, 2);

        hall.login("Aki");
        assert!(!hall.join_room(RoomId(42)));
        assert!(hall.active_room().is_none());
    }

    #[test]
    fn joining_another_room_leaves_the_first() {
        let mut hall = logged_in();
        hall.join_room(RoomId(1));
        hall.join_room(RoomId(2));

        assert_eq!(hall.rooms()[0].current_studying, 2);
        assert!(!hall.rooms()[0].roster.contains(&"Aki".to_string()));
        assert_eq!(hall.rooms()[1].current_studying, 2);
        assert_eq!(hall.active_room().unwrap().id, RoomId(2));
    }

    #[test]
    fn leave_without_room_is_a_noop() {
        let mut hall = logged_in();
        hall.start_timer();
        let before = hall.snapshot();
        assert!(!hall.leave_room());
        let after = hall.snapshot();
        assert_eq!(before.timer, after.timer);
        assert_eq!(before.rooms, after.rooms);
    }

    #[test]
    fn occupancy_never_negative_under_repeated_leaves() {
        let toml = r#"
[[rooms]]
id = 1
name = "Empty"
description = ""
category = "language"
max_participants = 3
"#;
        let config = Config::parse(toml).unwrap();
        let clock = Arc::new(ManualClock::new(morning()));
        let mut hall = StudyHall::new(&config, clock);
        hall.login("Aki");
        for _ in 0..5 {
            hall.join_room(RoomId(1));
            hall.leave_room();
            hall.leave_room();
        }
        assert_eq!(hall.rooms()[0].current_studying, 0);
    }

    #[test]
    fn send_message_ignores_blank_text() {
        let mut hall = logged_in();
        let before = hall.chat().len();
        assert!(!hall.send_message(""));
        assert!(!hall.send_message("  \n "));
        assert_eq!(hall.chat().len(), before);

        assert!(hall.send_message("hello"));
        let last = hall.chat().last().unwrap();
        assert_eq!(last.author, Author::user("Aki"));
        assert_eq!(last.body, "hello");
        assert_eq!(last.timestamp, "10:40");
    }

    #[test]
    fn timer_needs_login_to_start() {
        let (mut hall, _) = hall_with_clock();
        assert!(!hall.start_timer());
        assert!(!hall.is_timer_running());
    }

    #[test]
    fn pause_twice_matches_pause_once() {
        let mut hall = logged_in();
        hall.start_timer();
        run(&mut hall, 7);
        assert!(hall.pause_timer());
        let once = hall.timer_state();
        assert!(!hall.pause_timer());
        assert_eq!(hall.timer_state(), once);
    }

    #[test]
    fn daily_goal_is_stored_verbatim() {
        let mut hall = logged_in();
        assert_eq!(hall.daily_goal(), 120);
        hall.set_daily_goal(7);
        assert_eq!(hall.daily_goal(), 7);
        hall.set_daily_goal(10_000);
        assert_eq!(hall.daily_goal(), 10_000);
    }

    #[test]
    fn today_total_follows_the_clock_date() {
        let (mut hall, clock) = hall_with_clock();
        hall.login("Aki");
        hall.on_timer_completed(25);
        hall.on_timer_completed(25);
        assert_eq!(hall.today_total(), 50);
        assert_eq!(hall.goal_progress(), 41);

        clock.advance(chrono::Duration::days(1));
        hall.on_timer_completed(25);
        assert_eq!(hall.today_total(), 25);
        assert_eq!(hall.all_time_total(), 75);
    }

    #[test]
    fn goal_progress_caps_at_100() {
        let mut hall = logged_in();
        hall.set_daily_goal(30);
        hall.on_timer_completed(25);
        hall.on_timer_completed(25);
        assert_eq!(hall.goal_progress(), 100);
    }

    #[test]
    fn drain_changes_reports_completion_effects() {
        let mut hall = logged_in();
        hall.drain_changes();
        hall.start_timer();
        run(&mut hall, STUDY_TICKS);
        let changes = hall.drain_changes();
        assert!(changes.iter().any(|c| matches!(c, StateChange::StudyLogged(e) if e.minutes == 25)));
        let posted = changes
            .iter()
            .filter(|c| matches!(c, StateChange::ChatPosted(_)))
            .count();
        assert_eq!(posted, 1);
        assert!(hall.drain_changes().is_empty());
    }
}
