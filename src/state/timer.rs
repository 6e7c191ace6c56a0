//! Work/break interval timer.
//!
//! `SessionTimer` owns nothing but its own countdown. Completion of a study
//! interval is reported to the caller of [`SessionTimer::tick`] as a
//! [`TimerEvent`]; the timer never touches the study log or the chat.

use serde::Serialize;
use std::fmt;

/// Which interval the timer is counting down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TimerMode {
    Study,
    Break,
}

impl fmt::Display for TimerMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Study => f.write_str("study"),
            Self::Break => f.write_str("break"),
        }
    }
}

/// Observable countdown state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimerState {
    pub mode: TimerMode,
    pub minutes: u32,
    pub seconds: u32,
    pub running: bool,
}

impl TimerState {
    /// Remaining time rendered as `MM:SS`.
    pub fn remaining(&self) -> String {
        format!("{:02}:{:02}", self.minutes, self.seconds)
    }

    fn is_zero(&self) -> bool {
        self.minutes == 0 && self.seconds == 0
    }
}

/// Emitted by a tick that finishes an interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    /// A study interval ran to zero. Carries the minutes actually studied.
    StudyCompleted { minutes: u32 },
    /// A break ran to zero. Nothing is logged for breaks.
    BreakCompleted,
}

/// Canonical interval lengths in whole minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntervalDurations {
    pub study_minutes: u32,
    pub break_minutes: u32,
}

impl IntervalDurations {
    pub fn for_mode(&self, mode: TimerMode) -> u32 {
        match mode {
            TimerMode::Study => self.study_minutes,
            TimerMode::Break => self.break_minutes,
        }
    }
}

impl Default for IntervalDurations {
    fn default() -> Self {
        Self {
            study_minutes: 25,
            break_minutes: 5,
        }
    }
}

/// Countdown state machine with `study` and `break` states.
#[derive(Debug, Clone)]
pub struct SessionTimer {
    state: TimerState,
    durations: IntervalDurations,
}

impl SessionTimer {
    /// A paused timer at the start of a study interval.
    pub fn new(durations: IntervalDurations) -> Self {
        Self {
            state: TimerState {
                mode: TimerMode::Study,
                minutes: durations.study_minutes,
                seconds: 0,
                running: false,
            },
            durations,
        }
    }

    pub fn state(&self) -> TimerState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state.running
    }

    pub fn start(&mut self) {
        self.state.running = true;
    }

    pub fn pause(&mut self) {
        self.state.running = false;
    }

    /// Stop and rewind to the full length of the current mode.
    pub fn reset(&mut self) {
        self.state.running = false;
        self.load(self.state.mode);
    }

    /// Advance the countdown by one second.
    ///
    /// Ticks while paused are ignored. The tick that brings the countdown to
    /// 00:00 also performs the interval transition, so a running timer is
    /// never observed at zero.
    pub fn tick(&mut self) -> Option<TimerEvent> {
        if !self.state.running {
            return None;
        }

        if self.state.seconds > 0 {
            self.state.seconds -= 1;
        } else if self.state.minutes > 0 {
            self.state.minutes -= 1;
            self.state.seconds = 59;
        }

        if self.state.is_zero() {
            Some(self.complete())
        } else {
            None
        }
    }

    fn complete(&mut self) -> TimerEvent {
        self.state.running = false;
        match self.state.mode {
            TimerMode::Study => {
                self.load(TimerMode::Break);
                TimerEvent::StudyCompleted {
                    minutes: self.durations.study_minutes,
                }
            }
            TimerMode::Break => {
                self.load(TimerMode::Study);
                TimerEvent::BreakCompleted
            }
        }
    }

    fn load(&mut self, mode: TimerMode) {
        self.state.mode = mode;
        self.state.minutes = self.durations.for_mode(mode);
        self.state.seconds = 0;
    }
}

impl Default for SessionTimer {
    fn default() -> Self {
        Self::new(IntervalDurations::default())
    }
}
