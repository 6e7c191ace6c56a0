//! Front-end command handlers.
//!
//! This module contains the Handler trait and command registry for
//! dispatching lines typed by the user. Lines starting with `/` name a
//! command; anything else is a chat message.
//!
//! Handlers translate a line into one session request and describe the
//! outcome. Input checks that belong to the boundary (numeric arguments,
//! goal range) happen here, so the session only ever sees well-formed
//! requests.

mod goal;
mod messaging;
mod query;
mod registry;
pub mod render;
mod room;
mod session;
mod timer;

pub use goal::GoalHandler;
pub use messaging::SayHandler;
pub use query::{ChatHandler, DumpHandler, HelpHandler, LogHandler, QuitHandler, StatsHandler, StatusHandler};
pub use registry::Registry;
pub use room::{JoinHandler, LeaveHandler, RoomsHandler};
pub use session::LoginHandler;
pub use timer::{PauseHandler, ResetHandler, StartHandler};

pub use crate::error::{HandlerError, HandlerResult};

use crate::config::Config;
use crate::state::actor::SessionHandle;
use async_trait::async_trait;

/// Handler context passed to each command handler.
pub struct Context<'a> {
    /// The running session.
    pub session: &'a SessionHandle,
    /// Loaded configuration (goal range, system author name).
    pub config: &'a Config,
    /// Command registry (for `/stats` usage counts).
    pub registry: &'a Registry,
    /// Lines to show the user once the handler returns.
    pub output: Vec<String>,
    /// Set by `/quit`.
    pub quit: bool,
}

impl<'a> Context<'a> {
    pub fn new(session: &'a SessionHandle, config: &'a Config, registry: &'a Registry) -> Self {
        Self {
            session,
            config,
            registry,
            output: Vec::new(),
            quit: false,
        }
    }

    pub fn reply(&mut self, line: impl Into<String>) {
        self.output.push(line.into());
    }

    /// Fail with `NotLoggedIn` unless a user is logged in.
    pub async fn require_login(&self) -> Result<String, HandlerError> {
        self.session
            .snapshot()
            .await?
            .user
            .ok_or(HandlerError::NotLoggedIn)
    }
}

/// A front-end command.
#[async_trait]
pub trait Handler: Send + Sync {
    /// Handle one invocation. `args` is the rest of the line, trimmed.
    async fn handle(&self, ctx: &mut Context<'_>, args: &str) -> HandlerResult;
}

/// Parse a required unsigned integer argument.
pub(crate) fn parse_number(args: &str) -> Result<u32, HandlerError> {
    let arg = args.split_whitespace().next().ok_or(HandlerError::NeedMoreParams)?;
    arg.parse()
        .map_err(|_| HandlerError::InvalidNumber(arg.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_number_takes_first_word() {
        assert_eq!(parse_number("2 extra").unwrap(), 2);
    }

    #[test]
    fn parse_number_rejects_missing_and_garbage() {
        assert!(matches!(parse_number(""), Err(HandlerError::NeedMoreParams)));
        assert!(matches!(
            parse_number("two"),
            Err(HandlerError::InvalidNumber(arg)) if arg == "two"
        ));
        assert!(matches!(parse_number("-5"), Err(HandlerError::InvalidNumber(_))));
    }
}
