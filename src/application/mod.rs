//! # Application Layer
//!
//! Contains the turn orchestration of the bot: the dispatcher and its assembly,
//! effect and history collaborators, and logging setup.

pub mod builder;
pub mod dispatcher;
pub mod effects;
pub mod history;
pub mod logging;
