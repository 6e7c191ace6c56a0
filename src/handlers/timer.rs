//! Timer commands: `/start`, `/pause`, `/reset`.

use super::render::timer_line;
use super::{Context, Handler, HandlerResult};
use async_trait::async_trait;

/// Handler for `/start`.
pub struct StartHandler;

#[async_trait]
impl Handler for StartHandler {
    async fn handle(&self, ctx: &mut Context<'_>, _args: &str) -> HandlerResult {
        ctx.require_login().await?;
        let started = ctx.session.start_timer().await?;
        let timer = ctx.session.snapshot().await?.timer;
        if started {
            ctx.reply(timer_line(&timer));
        } else {
            ctx.reply(format!("already running: {}", timer_line(&timer)));
        }
        Ok(())
    }
}

/// Handler for `/pause`.
pub struct PauseHandler;

#[async_trait]
impl Handler for PauseHandler {
    async fn handle(&self, ctx: &mut Context<'_>, _args: &str) -> HandlerResult {
        ctx.session.pause_timer().await?;
        let timer = ctx.session.snapshot().await?.timer;
        ctx.reply(timer_line(&timer));
        Ok(())
    }
}

/// Handler for `/reset`. Rewinds the current interval without switching mode.
pub struct ResetHandler;

#[async_trait]
impl Handler for ResetHandler {
    async fn handle(&self, ctx: &mut Context<'_>, _args: &str) -> HandlerResult {
        ctx.session.reset_timer().await?;
        let timer = ctx.session.snapshot().await?.timer;
        ctx.reply(timer_line(&timer));
        Ok(())
    }
}
