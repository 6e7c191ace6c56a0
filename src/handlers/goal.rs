//! `/goal <minutes>`
//!
//! The configured range and step are applied here. Out-of-range input is
//! clamped and snapped rather than rejected.

use super::{Context, Handler, HandlerResult, parse_number};
use async_trait::async_trait;

pub struct GoalHandler;

#[async_trait]
impl Handler for GoalHandler {
    async fn handle(&self, ctx: &mut Context<'_>, args: &str) -> HandlerResult {
        let requested = parse_number(args)?;
        let minutes = ctx.config.goal.normalize(requested);
        ctx.session.set_daily_goal(minutes).await?;

        if minutes == requested {
            ctx.reply(format!("daily goal: {minutes} min"));
        } else {
            ctx.reply(format!("daily goal: {minutes} min (adjusted from {requested})"));
        }
        Ok(())
    }
}
