//! Chat messages: plain lines and `/say <text>`.
//!
//! Blank text is dropped without a reply. The posted line is echoed back
//! through the session's change feed, not by this handler.

use super::{Context, Handler, HandlerResult};
use async_trait::async_trait;

pub struct SayHandler;

#[async_trait]
impl Handler for SayHandler {
    async fn handle(&self, ctx: &mut Context<'_>, args: &str) -> HandlerResult {
        ctx.require_login().await?;
        ctx.session.send_message(args).await?;
        Ok(())
    }
}
