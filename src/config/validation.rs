//! Configuration validation.
//!
//! Validates configuration at startup to catch common errors early.

use super::Config;
use chrono::NaiveTime;
use std::collections::HashSet;
use thiserror::Error;

/// Validation errors for configuration.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("timer.study_minutes must be positive")]
    ZeroStudyMinutes,
    #[error("timer.break_minutes must be positive")]
    ZeroBreakMinutes,
    #[error("timer.tick_millis must be positive")]
    ZeroTickPeriod,
    #[error("timer.mailbox_capacity must be positive")]
    ZeroMailbox,
    #[error("goal.min_minutes ({min}) must not exceed goal.max_minutes ({max})")]
    GoalRangeInverted { min: u32, max: u32 },
    #[error("goal.step_minutes must be positive")]
    ZeroGoalStep,
    #[error("goal.default_minutes ({0}) is outside the configured range")]
    GoalDefaultOutOfRange(u32),
    #[error("chat.system_author must not be blank")]
    BlankSystemAuthor,
    #[error("chat.greeting time '{0}' is not HH:MM")]
    InvalidGreetingTime(String),
    #[error("duplicate room id {0}")]
    DuplicateRoomId(u32),
    #[error("room {0} has an empty name")]
    EmptyRoomName(u32),
}

/// Validate a configuration, returning all errors found.
pub fn validate(config: &Config) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    // Timer
    if config.timer.study_minutes == 0 {
        errors.push(ValidationError::ZeroStudyMinutes);
    }
    if config.timer.break_minutes == 0 {
        errors.push(ValidationError::ZeroBreakMinutes);
    }
    if config.timer.tick_millis == 0 {
        errors.push(ValidationError::ZeroTickPeriod);
    }
    if config.timer.mailbox_capacity == 0 {
        errors.push(ValidationError::ZeroMailbox);
    }

    // Goal
    let goal = &config.goal;
    if goal.min_minutes > goal.max_minutes {
        errors.push(ValidationError::GoalRangeInverted {
            min: goal.min_minutes,
            max: goal.max_minutes,
        });
    } else if !(goal.min_minutes..=goal.max_minutes).contains(&goal.default_minutes) {
        errors.push(ValidationError::GoalDefaultOutOfRange(goal.default_minutes));
    }
    if goal.step_minutes == 0 {
        errors.push(ValidationError::ZeroGoalStep);
    }

    // Chat
    if config.chat.system_author.trim().is_empty() {
        errors.push(ValidationError::BlankSystemAuthor);
    }
    for line in &config.chat.greeting {
        if let Some(time) = &line.time
            && NaiveTime::parse_from_str(time, "%H:%M").is_err()
        {
            errors.push(ValidationError::InvalidGreetingTime(time.clone()));
        }
    }

    // Rooms
    let mut seen = HashSet::new();
    for room in &config.rooms {
        if !seen.insert(room.id) {
            errors.push(ValidationError::DuplicateRoomId(room.id.0));
        }
        if room.name.trim().is_empty() {
            errors.push(ValidationError::EmptyRoomName(room.id.0));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
