//! Daily goal configuration.

use serde::Deserialize;

use super::defaults::{default_goal_max, default_goal_min, default_goal_minutes, default_goal_step};

/// Daily study goal configuration.
///
/// The range and step apply to user input only. The session stores whatever
/// value it is handed.
#[derive(Debug, Clone, Deserialize)]
pub struct GoalConfig {
    /// Goal at startup in minutes (default: 120).
    #[serde(default = "default_goal_minutes")]
    pub default_minutes: u32,
    /// Smallest accepted goal (default: 30).
    #[serde(default = "default_goal_min")]
    pub min_minutes: u32,
    /// Largest accepted goal (default: 480).
    #[serde(default = "default_goal_max")]
    pub max_minutes: u32,
    /// Granularity of accepted goals (default: 15).
    #[serde(default = "default_goal_step")]
    pub step_minutes: u32,
}

impl GoalConfig {
    /// Clamp `requested` into range and snap it to the nearest step,
    /// measured from `min_minutes`. Ties round up.
    pub fn normalize(&self, requested: u32) -> u32 {
        let clamped = requested.clamp(self.min_minutes, self.max_minutes);
        if self.step_minutes == 0 {
            return clamped;
        }
        let offset = clamped - self.min_minutes;
        let steps = (offset + self.step_minutes / 2) / self.step_minutes;
        (self.min_minutes + steps * self.step_minutes).min(self.max_minutes)
    }
}

impl Default for GoalConfig {
    fn default() -> Self {
        Self {
            default_minutes: default_goal_minutes(),
            min_minutes: default_goal_min(),
            max_minutes: default_goal_max(),
            step_minutes: default_goal_step(),
        }
    }
}
