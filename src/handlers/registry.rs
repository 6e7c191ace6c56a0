//! Command handler registry and dispatch.
//!
//! The `Registry` manages command handlers and provides command usage statistics.

use super::{
    ChatHandler, Context, DumpHandler, GoalHandler, Handler, HandlerError, HandlerResult,
    HelpHandler, JoinHandler, LeaveHandler, LogHandler, LoginHandler, PauseHandler, QuitHandler,
    ResetHandler, RoomsHandler, SayHandler, StartHandler, StatsHandler, StatusHandler,
};
use crate::telemetry::spans;
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::{Instrument, debug};

/// Name under which plain chat lines are counted.
const SAY: &str = "say";

/// Registry of command handlers.
pub struct Registry {
    handlers: HashMap<&'static str, Box<dyn Handler>>,
    /// Command usage counters for `/stats`
    command_counts: HashMap<&'static str, Arc<AtomicU64>>,
}

impl Registry {
    /// Create a new registry with all handlers registered.
    pub fn new() -> Self {
        let mut handlers: HashMap<&'static str, Box<dyn Handler>> = HashMap::new();

        // Session
        handlers.insert("login", Box::new(LoginHandler));
        handlers.insert("goal", Box::new(GoalHandler));
        handlers.insert("quit", Box::new(QuitHandler));

        // Rooms
        handlers.insert("rooms", Box::new(RoomsHandler));
        handlers.insert("join", Box::new(JoinHandler));
        handlers.insert("leave", Box::new(LeaveHandler));

        // Timer
        handlers.insert("start", Box::new(StartHandler));
        handlers.insert("pause", Box::new(PauseHandler));
        handlers.insert("reset", Box::new(ResetHandler));

        // Messaging
        handlers.insert(SAY, Box::new(SayHandler));

        // Queries
        handlers.insert("status", Box::new(StatusHandler));
        handlers.insert("log", Box::new(LogHandler));
        handlers.insert("chat", Box::new(ChatHandler));
        handlers.insert("stats", Box::new(StatsHandler));
        handlers.insert("dump", Box::new(DumpHandler));
        handlers.insert("help", Box::new(HelpHandler));

        let mut command_counts = HashMap::new();
        for &cmd in handlers.keys() {
            command_counts.insert(cmd, Arc::new(AtomicU64::new(0)));
        }

        Self {
            handlers,
            command_counts,
        }
    }

    /// Get command usage statistics, most used first.
    pub fn get_command_stats(&self) -> Vec<(&'static str, u64)> {
        let mut stats: Vec<_> = self
            .command_counts
            .iter()
            .map(|(cmd, count)| (*cmd, count.load(Ordering::Relaxed)))
            .filter(|(_, count)| *count > 0)
            .collect();

        stats.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(b.0)));
        stats
    }

    /// Dispatch one input line to the appropriate handler.
    ///
    /// Blank lines are ignored. `/name args` runs the named command; any
    /// other line is sent as a chat message.
    pub async fn dispatch(&self, ctx: &mut Context<'_>, line: &str) -> HandlerResult {
        let line = line.trim_end_matches(['\r', '\n']);
        if line.trim().is_empty() {
            return Ok(());
        }

        let (name, args) = match line.trim_start().strip_prefix('/') {
            Some(rest) => {
                let (name, args) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
                (name.to_ascii_lowercase(), args.trim())
            }
            None => (SAY.to_string(), line),
        };

        let Some((&key, handler)) = self.handlers.get_key_value(name.as_str()) else {
            return Err(HandlerError::UnknownCommand(format!("/{name}")));
        };

        if let Some(counter) = self.command_counts.get(key) {
            counter.fetch_add(1, Ordering::Relaxed);
        }

        let result = handler
            .handle(ctx, args)
            .instrument(spans::command(key))
            .await;

        if let Err(ref e) = result {
            debug!(command = %key, error = %e, code = e.error_code(), "Command error");
        }
        result
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}
