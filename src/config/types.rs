//! Core configuration types and loading.

use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

use super::chat::ChatConfig;
use super::defaults::default_rooms;
use super::goal::GoalConfig;
use super::logging::LoggingConfig;
use super::timer::TimerConfig;
use super::validation::{self, ValidationError};
use crate::state::Room;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid config: {}", format_errors(.0))]
    Invalid(Vec<ValidationError>),
}

fn format_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Study hall configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Log filter and format.
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Interval lengths and tick period.
    #[serde(default)]
    pub timer: TimerConfig,
    /// Daily goal default and accepted input range.
    #[serde(default)]
    pub goal: GoalConfig,
    /// System identity, subject fallback and login greeting.
    #[serde(default)]
    pub chat: ChatConfig,
    /// Rooms available for the lifetime of the process.
    #[serde(default = "default_rooms")]
    pub rooms: Vec<Room>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            logging: LoggingConfig::default(),
            timer: TimerConfig::default(),
            goal: GoalConfig::default(),
            chat: ChatConfig::default(),
            rooms: default_rooms(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parse and validate configuration from TOML text.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content)?;
        validation::validate(&config).map_err(ConfigError::Invalid)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{RoomCategory, RoomId};
    use std::io::Write;

    #[test]
    fn empty_file_yields_defaults() {
        let config = Config::parse("").unwrap();
        assert_eq!(config.timer.study_minutes, 25);
        assert_eq!(config.timer.break_minutes, 5);
        assert_eq!(config.goal.default_minutes, 120);
        assert_eq!(config.rooms.len(), 3);
        assert_eq!(config.chat.greeting.len(), 3);
    }

    #[test]
    fn rooms_table_replaces_seed_rooms() {
        let toml = r#"
[[rooms]]
id = 7
name = "Rust"
description = "Borrow checker support group"
category = "programming"
roster = ["ferris"]
current_studying = 1
max_participants = 4
"#;
        let config = Config::parse(toml).unwrap();
        assert_eq!(config.rooms.len(), 1);
        let room = &config.rooms[0];
        assert_eq!(room.id, RoomId(7));
        assert_eq!(room.category, RoomCategory::Programming);
        assert_eq!(room.roster, vec!["ferris"]);
    }

    #[test]
    fn invalid_values_are_reported_together() {
        let toml = r#"
[timer]
study_minutes = 0
break_minutes = 0
"#;
        let err = Config::parse(toml).unwrap_err();
        match err {
            ConfigError::Invalid(errors) => assert_eq!(errors.len(), 2),
            other => panic!("expected validation failure, got {other}"),
        }
    }

    #[test]
    fn load_reads_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[goal]\ndefault_minutes = 90").unwrap();
        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.goal.default_minutes, 90);
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let err = Config::load("/nonexistent/studyhall.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn malformed_toml_is_parse_error() {
        let err = Config::parse("[timer\nstudy_minutes = ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
