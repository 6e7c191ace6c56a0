//! Interval timer configuration.

use serde::Deserialize;
use std::time::Duration;

use super::defaults::{
    default_break_minutes, default_mailbox_capacity, default_study_minutes, default_tick_millis,
};
use crate::state::IntervalDurations;

/// Interval timer configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct TimerConfig {
    /// Length of a study interval in minutes (default: 25).
    #[serde(default = "default_study_minutes")]
    pub study_minutes: u32,
    /// Length of a break in minutes (default: 5).
    #[serde(default = "default_break_minutes")]
    pub break_minutes: u32,
    /// Real time between countdown ticks in milliseconds (default: 1000).
    /// Each tick removes one second from the countdown regardless of this value.
    #[serde(default = "default_tick_millis")]
    pub tick_millis: u64,
    /// Session actor mailbox capacity (default: 64).
    #[serde(default = "default_mailbox_capacity")]
    pub mailbox_capacity: usize,
}

impl TimerConfig {
    pub fn durations(&self) -> IntervalDurations {
        IntervalDurations {
            study_minutes: self.study_minutes,
            break_minutes: self.break_minutes,
        }
    }

    pub fn tick_period(&self) -> Duration {
        Duration::from_millis(self.tick_millis)
    }
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            study_minutes: default_study_minutes(),
            break_minutes: default_break_minutes(),
            tick_millis: default_tick_millis(),
            mailbox_capacity: default_mailbox_capacity(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_classic_intervals() {
        let config = TimerConfig::default();
        assert_eq!(
            config.durations(),
            IntervalDurations {
                study_minutes: 25,
                break_minutes: 5
            }
        );
        assert_eq!(config.tick_period(), Duration::from_secs(1));
    }

    #[test]
    fn partial_table_keeps_other_defaults() {
        let config: TimerConfig = toml::from_str("study_minutes = 50").unwrap();
        assert_eq!(config.study_minutes, 50);
        assert_eq!(config.break_minutes, 5);
        assert_eq!(config.mailbox_capacity, 64);
    }
}
