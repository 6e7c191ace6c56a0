//! Configuration loading and management.
//!
//! This module is split into logical submodules:
//! - [`types`]: Top-level `Config` and loading
//! - [`timer`]: Interval lengths and tick period (TimerConfig)
//! - [`goal`]: Daily goal default and input range (GoalConfig)
//! - [`chat`]: System identity, study subject fallback and login greeting (ChatConfig)
//! - [`logging`]: Log filter and output format (LoggingConfig)
//! - [`defaults`]: Default values, including the seed rooms
//! - [`validation`]: Startup validation

mod chat;
mod defaults;
mod goal;
mod logging;
mod timer;
mod types;
pub mod validation;

pub use chat::{ChatConfig, GreetingLine};
pub use goal::GoalConfig;
pub use logging::{LogFormat, LoggingConfig};
pub use timer::TimerConfig;
pub use types::{Config, ConfigError};
