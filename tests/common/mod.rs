//! Integration test common infrastructure.
//!
//! Provides a session actor wired to a manual clock and manually driven
//! ticks, so timer behavior can be asserted without waiting in real time.

#![allow(dead_code)]

pub mod session;

#[allow(unused_imports)]
pub use session::{TestSession, STUDY_TICKS, BREAK_TICKS, morning};
