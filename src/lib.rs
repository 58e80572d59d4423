//! # philobot
//!
//! A confidence-arbitrated chat dispatcher. Each user message runs through an NLU
//! pipeline, every responder proposes a reply, and the most confident proposal is
//! committed. A responder can capture the conversational floor to run a multi-turn
//! script, and a fallback answers when nobody is confident enough.
//!
//! - Domain: data bag, responses, actions, traits, configuration
//! - Application: dispatcher, builder, effects, history, logging
//! - Infrastructure: NLU stages and tokio timers
//! - Interface: demo responders, bot assembly, console loop

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interface;
pub mod strings;

pub use application::builder::DispatcherBuilder;
pub use application::dispatcher::Dispatcher;
pub use domain::error::{BotError, Result};
