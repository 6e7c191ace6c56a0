//! `/login <name>`
//!
//! Sets the user name for the lifetime of the process and seeds the chat
//! with the greeting set. The name cannot be changed afterwards.

use super::{Context, Handler, HandlerError, HandlerResult};
use async_trait::async_trait;

pub struct LoginHandler;

#[async_trait]
impl Handler for LoginHandler {
    async fn handle(&self, ctx: &mut Context<'_>, args: &str) -> HandlerResult {
        if args.is_empty() {
            return Err(HandlerError::NeedMoreParams);
        }

        if ctx.session.login(args).await? {
            ctx.reply(format!("welcome, {args}. /rooms lists the study rooms"));
        } else if let Some(user) = ctx.session.snapshot().await?.user {
            ctx.reply(format!("already logged in as {user}"));
        }
        Ok(())
    }
}
