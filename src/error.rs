//! Unified error handling for studyhall.
//!
//! The session core has no error paths of its own: invalid input is ignored.
//! Errors only exist at the edges, where a request cannot reach the session
//! actor or a front-end command line cannot be turned into a request.

use thiserror::Error;

// ============================================================================
// Session Errors (actor mailbox)
// ============================================================================

/// Failure to talk to the session actor.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("session has stopped")]
    Closed,
}

// ============================================================================
// Handler Errors (command processing)
// ============================================================================

/// Errors that can occur during command handling.
#[derive(Debug, Error)]
pub enum HandlerError {
    #[error("not enough parameters")]
    NeedMoreParams,

    #[error("unknown command: {0}")]
    UnknownCommand(String),

    #[error("not a number: {0}")]
    InvalidNumber(String),

    #[error("not logged in")]
    NotLoggedIn,

    #[error("no such room: {0}")]
    NoSuchRoom(u32),

    #[error("not in a room")]
    NotInRoom,

    #[error("render error: {0}")]
    Render(#[from] serde_json::Error),

    #[error(transparent)]
    Session(#[from] SessionError),
}

impl HandlerError {
    /// Get a static error code string for log labeling.
    #[inline]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::NeedMoreParams => "need_more_params",
            Self::UnknownCommand(_) => "unknown_command",
            Self::InvalidNumber(_) => "invalid_number",
            Self::NotLoggedIn => "not_logged_in",
            Self::NoSuchRoom(_) => "no_such_room",
            Self::NotInRoom => "not_in_room",
            Self::Render(_) => "render_error",
            Self::Session(_) => "session_closed",
        }
    }

    /// Whether the front-end should stop reading input.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::Session(_))
    }
}

/// Result type for command handlers.
pub type HandlerResult = Result<(), HandlerError>;
