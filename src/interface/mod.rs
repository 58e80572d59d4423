//! # Interface Layer
//!
//! The demo bot: its responders, its assembly from configuration, and the console loop.

pub mod bot;
pub mod repl;
pub mod responders;
