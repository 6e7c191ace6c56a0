//! studyhall - shared study rooms with a work/break interval timer.
//!
//! Users join a room, run a study/break countdown, accumulate a log of
//! completed study intervals and chat with the room. All state lives in
//! process memory for the lifetime of the program.

pub mod clock;
pub mod config;
pub mod error;
pub mod handlers;
pub mod state;
pub mod telemetry;
