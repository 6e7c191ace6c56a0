//! Read-only commands and `/quit`.

use super::render::{chat_line, log_line, stats_lines, timer_line};
use super::{Context, Handler, HandlerResult};
use async_trait::async_trait;

/// Handler for `/status`.
pub struct StatusHandler;

#[async_trait]
impl Handler for StatusHandler {
    async fn handle(&self, ctx: &mut Context<'_>, _args: &str) -> HandlerResult {
        let snapshot = ctx.session.snapshot().await?;
        let user = snapshot.user.as_deref().unwrap_or("(not logged in)");
        let room = snapshot
            .active_room
            .as_ref()
            .map_or("(no room)", |room| room.name.as_str());
        ctx.reply(format!("user: {user}"));
        ctx.reply(format!("room: {room}"));
        ctx.reply(format!("timer: {}", timer_line(&snapshot.timer)));
        ctx.reply(format!(
            "today: {} / {} min",
            snapshot.today_total, snapshot.daily_goal
        ));
        Ok(())
    }
}

/// Handler for `/log`. Newest first.
pub struct LogHandler;

#[async_trait]
impl Handler for LogHandler {
    async fn handle(&self, ctx: &mut Context<'_>, _args: &str) -> HandlerResult {
        let snapshot = ctx.session.snapshot().await?;
        if snapshot.study_log.is_empty() {
            ctx.reply("no study intervals logged yet");
        }
        for entry in &snapshot.study_log {
            ctx.reply(log_line(entry));
        }
        Ok(())
    }
}

/// Handler for `/chat`. Replays the whole history.
pub struct ChatHandler;

#[async_trait]
impl Handler for ChatHandler {
    async fn handle(&self, ctx: &mut Context<'_>, _args: &str) -> HandlerResult {
        let snapshot = ctx.session.snapshot().await?;
        let system = ctx.config.chat.system_author.clone();
        for message in &snapshot.chat {
            ctx.reply(chat_line(message, &system));
        }
        Ok(())
    }
}

/// Handler for `/stats`.
pub struct StatsHandler;

#[async_trait]
impl Handler for StatsHandler {
    async fn handle(&self, ctx: &mut Context<'_>, _args: &str) -> HandlerResult {
        let snapshot = ctx.session.snapshot().await?;
        for line in stats_lines(&snapshot) {
            ctx.reply(line);
        }
        let usage = ctx
            .registry
            .get_command_stats()
            .into_iter()
            .map(|(cmd, count)| format!("{cmd}={count}"))
            .collect::<Vec<_>>()
            .join(" ");
        ctx.reply(format!("commands: {usage}"));
        Ok(())
    }
}

/// Handler for `/dump`. Full snapshot as JSON.
pub struct DumpHandler;

#[async_trait]
impl Handler for DumpHandler {
    async fn handle(&self, ctx: &mut Context<'_>, _args: &str) -> HandlerResult {
        let snapshot = ctx.session.snapshot().await?;
        let json = serde_json::to_string_pretty(&snapshot)?;
        ctx.reply(json);
        Ok(())
    }
}

const HELP: &[&str] = &[
    "/login <name>    choose your display name",
    "/rooms           list study rooms",
    "/join <id>       join a room",
    "/leave           leave the room (stops the timer)",
    "/start /pause /reset   control the timer",
    "/goal <minutes>  set today's goal",
    "/status /log /chat /stats /dump",
    "/quit",
    "anything else is sent to the chat",
];

/// Handler for `/help`.
pub struct HelpHandler;

#[async_trait]
impl Handler for HelpHandler {
    async fn handle(&self, ctx: &mut Context<'_>, _args: &str) -> HandlerResult {
        for line in HELP {
            ctx.reply(*line);
        }
        Ok(())
    }
}

/// Handler for `/quit`.
pub struct QuitHandler;

#[async_trait]
impl Handler for QuitHandler {
    async fn handle(&self, ctx: &mut Context<'_>, _args: &str) -> HandlerResult {
        ctx.quit = true;
        Ok(())
    }
}
