//! studyhall - shared study rooms with a work/break interval timer.
//!
//! Reads commands from stdin, one per line. See `/help`.

use std::path::Path;
use std::sync::Arc;
use studyhall::clock::SystemClock;
use studyhall::config::Config;
use studyhall::handlers::{Context, Registry, render};
use studyhall::state::StudyHall;
use studyhall::state::actor::{IntervalTicks, SessionActor};
use studyhall::telemetry;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::broadcast::error::RecvError;
use tracing::{error, info, warn};

const DEFAULT_CONFIG_PATH: &str = "studyhall.toml";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration. Without an explicit path a missing default file
    // means built-in defaults.
    let config = match std::env::args().nth(1) {
        Some(path) => Config::load(&path)?,
        None if Path::new(DEFAULT_CONFIG_PATH).exists() => Config::load(DEFAULT_CONFIG_PATH)?,
        None => Config::default(),
    };

    telemetry::init(&config.logging);

    info!(
        rooms = config.rooms.len(),
        study_minutes = config.timer.study_minutes,
        break_minutes = config.timer.break_minutes,
        "Starting studyhall"
    );

    let hall = StudyHall::new(&config, Arc::new(SystemClock));
    let ticks = IntervalTicks::new(config.timer.tick_period());
    let session = SessionActor::spawn(hall, ticks, config.timer.mailbox_capacity);

    // Print chat lines and logged intervals as they happen.
    {
        let mut changes = session.subscribe();
        let system_author = config.chat.system_author.clone();
        tokio::spawn(async move {
            loop {
                match changes.recv().await {
                    Ok(change) => {
                        if let Some(line) = render::change_line(&change, &system_author) {
                            println!("{line}");
                        }
                    }
                    Err(RecvError::Lagged(skipped)) => {
                        warn!(skipped, "Notification feed lagged");
                    }
                    Err(RecvError::Closed) => break,
                }
            }
        });
    }

    let registry = Registry::new();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    println!("studyhall ready. /login <name> to begin, /help for commands");

    loop {
        let line = tokio::select! {
            line = lines.next_line() => line?,
            _ = tokio::signal::ctrl_c() => None,
        };
        let Some(line) = line else { break };

        let mut ctx = Context::new(&session, &config, &registry);
        let result = registry.dispatch(&mut ctx, &line).await;
        for out in &ctx.output {
            println!("{out}");
        }
        match result {
            Ok(()) if ctx.quit => break,
            Ok(()) => {}
            Err(e) if e.is_fatal() => {
                error!(error = %e, "Session lost");
                return Err(e.into());
            }
            Err(e) => println!("error: {e}"),
        }
    }

    session.shutdown();
    info!("Goodbye");
    Ok(())
}
