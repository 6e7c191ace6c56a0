//! Room commands: `/rooms`, `/join <id>`, `/leave`.

use super::render::{room_line, roster_preview};
use super::{Context, Handler, HandlerError, HandlerResult, parse_number};
use crate::state::RoomId;
use async_trait::async_trait;

/// Handler for `/rooms`.
pub struct RoomsHandler;

#[async_trait]
impl Handler for RoomsHandler {
    async fn handle(&self, ctx: &mut Context<'_>, _args: &str) -> HandlerResult {
        let snapshot = ctx.session.snapshot().await?;
        let active = snapshot.active_room.as_ref().map(|room| room.id);
        for room in &snapshot.rooms {
            ctx.reply(room_line(room, active == Some(room.id)));
            if !room.roster.is_empty() {
                ctx.reply(format!("      {}", roster_preview(room)));
            }
        }
        Ok(())
    }
}

/// Handler for `/join <id>`.
///
/// Capacity is shown but never enforced. Joining while in another room
/// leaves it first.
pub struct JoinHandler;

#[async_trait]
impl Handler for JoinHandler {
    async fn handle(&self, ctx: &mut Context<'_>, args: &str) -> HandlerResult {
        let id = RoomId(parse_number(args)?);
        let before = ctx.session.snapshot().await?;
        if before.user.is_none() {
            return Err(HandlerError::NotLoggedIn);
        }

        if !ctx.session.join_room(id).await? {
            return Err(HandlerError::NoSuchRoom(id.0));
        }

        let snapshot = ctx.session.snapshot().await?;
        if let Some(room) = snapshot.active_room {
            ctx.reply(format!(
                "now studying in {} ({}/{})",
                room.name, room.current_studying, room.max_participants
            ));
        }
        // Switching rooms leaves the old one, which stops the timer.
        if before.timer.running && !snapshot.timer.running {
            ctx.reply("left the previous room; timer stopped");
        }
        Ok(())
    }
}

/// Handler for `/leave`. Stops the timer.
pub struct LeaveHandler;

#[async_trait]
impl Handler for LeaveHandler {
    async fn handle(&self, ctx: &mut Context<'_>, _args: &str) -> HandlerResult {
        if !ctx.session.leave_room().await? {
            return Err(HandlerError::NotInRoom);
        }
        ctx.reply("left the room; timer stopped");
        Ok(())
    }
}
