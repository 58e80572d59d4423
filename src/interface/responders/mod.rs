//! # Demo Responders
//!
//! The responders of the demo bot. Each one is independent and only sees the
//! [`Message`] it is handed; cross-turn state lives inside the responder.

pub mod faq;
pub mod gratitude;
pub mod greet;
pub mod smalltalk;
pub mod timer;
pub mod topic;

pub use faq::FaqResponder;
pub use gratitude::GratitudeResponder;
pub use greet::GreetResponder;
pub use smalltalk::SmallTalkResponder;
pub use timer::TimerResponder;
pub use topic::TopicResponder;

use crate::domain::error::{BotError, Result};
use crate::domain::message::{DataKind, KeywordHits, Message};

/// Keyword hits of the message, or the precondition error naming `owner`.
fn keywords<'a>(owner: &str, message: &'a Message) -> Result<&'a KeywordHits> {
    message
        .keywords()
        .ok_or_else(|| BotError::missing(owner, DataKind::Keywords))
}

/// Words that abandon a multi-turn script.
fn is_stop(text: &str) -> bool {
    let lower = text.trim().to_lowercase();
    lower == "stop" || lower == "cancel" || text.contains("停止")
}
